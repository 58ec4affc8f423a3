// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Input Classification
//!
//! A raw profile value is first sorted into one of three shapes, and only
//! then handled according to the entry's declared input type. The URL shape
//! wins over every declared type except `email`.

use super::primitives::{
    encode_component, is_http_url, is_numeric_id, is_safe_handle, is_valid_email,
    normalize_handle,
};
use super::url_policy::validate_url;
use crate::config::{non_empty, InputType, LinkConfigEntry};
use crate::error::LinkError;

/// Shape of a trimmed, non-empty raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Declared `email`; shape not yet checked.
    Email(&'a str),
    /// Starts with `http://` or `https://`.
    AbsoluteUrlCandidate(&'a str),
    /// Anything else.
    HandleCandidate(&'a str),
}

/// Sorts a raw value by shape.
pub fn classify(input_type: InputType, raw: &str) -> Result<Classified<'_>, LinkError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LinkError::EmptyValue);
    }

    if input_type == InputType::Email {
        Ok(Classified::Email(raw))
    } else if is_http_url(raw) {
        Ok(Classified::AbsoluteUrlCandidate(raw))
    } else {
        Ok(Classified::HandleCandidate(raw))
    }
}

/// Turns a user's raw value into a safe href for the entry.
///
/// ```
/// use profile_links::config::{InputType, LinkConfigEntry};
/// use profile_links::policy::build_href;
///
/// let entry = LinkConfigEntry::new("github", "GitHub", InputType::Handle)
///     .with_base_url("https://github.com/");
/// assert_eq!(build_href(&entry, "@alice").unwrap(), "https://github.com/alice");
/// assert!(build_href(&entry, "javascript:alert(1)").is_err());
/// ```
pub fn build_href(entry: &LinkConfigEntry, raw: &str) -> Result<String, LinkError> {
    let input_type = entry.input_type();

    match classify(input_type, raw)? {
        Classified::Email(value) => {
            if is_valid_email(value) {
                Ok(format!("mailto:{}", value))
            } else {
                Err(LinkError::InvalidEmail)
            }
        }
        Classified::AbsoluteUrlCandidate(candidate) => validate_url(entry, candidate),
        Classified::HandleCandidate(_) if input_type.is_url_only() => Err(LinkError::UrlOnly),
        Classified::HandleCandidate(value) => handle_href(entry, input_type, value),
    }
}

fn handle_href(
    entry: &LinkConfigEntry,
    input_type: InputType,
    value: &str,
) -> Result<String, LinkError> {
    let handle = normalize_handle(value);
    if !is_safe_handle(&handle) {
        return Err(LinkError::UnsafeHandle(handle));
    }
    if input_type == InputType::NumericId && !is_numeric_id(&handle) {
        return Err(LinkError::NotNumeric(handle));
    }

    let base_url = non_empty(&entry.base_url)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .ok_or(LinkError::MissingBaseUrl)?;

    Ok(format!("{}{}", base_url, encode_component(&handle)))
}
