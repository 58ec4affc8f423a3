// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Primitive Validators
//!
//! Small shape and protocol checks the classifier and URL policy are built from.

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::Url;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

static HTTP_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("valid url prefix pattern"));

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// The only scheme a link or icon may use.
pub const SAFE_SCHEME: &str = "https";

/// Returns true if the value starts with `http://` or `https://` (any case).
pub fn is_http_url(value: &str) -> bool {
    HTTP_PREFIX.is_match(value)
}

/// Splits an allowlist on commas and whitespace, lowercasing each host.
///
/// ```
/// use profile_links::policy::normalize_hosts;
///
/// assert_eq!(normalize_hosts(" GitHub.com, .example.com\n"), vec!["github.com", ".example.com"]);
/// assert!(normalize_hosts("").is_empty());
/// ```
pub fn normalize_hosts(hosts: &str) -> Vec<String> {
    hosts
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Checks a hostname against an allowlist.
///
/// An entry with a leading dot matches the bare domain and anything ending in
/// the dotted suffix. Any other entry must match exactly. An empty allowlist
/// matches nothing.
pub fn host_allowed(hostname: &str, allowed_hosts: &[String]) -> bool {
    let host = hostname.to_lowercase();

    allowed_hosts.iter().any(|allowed| {
        if allowed.is_empty() {
            return false;
        }
        match allowed.strip_prefix('.') {
            Some(bare) => host == bare || host.ends_with(allowed.as_str()),
            None => host == *allowed,
        }
    })
}

/// Parses a URL, returning None instead of an error.
pub fn safe_parse_url(value: &str) -> Option<Url> {
    Url::parse(value).ok()
}

/// Returns true if the URL uses `https`.
pub fn is_safe_protocol(url: &Url) -> bool {
    url.scheme() == SAFE_SCHEME
}

/// Trims, drops one leading `@` and removes all whitespace.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('@').unwrap_or(trimmed);
    trimmed.chars().filter(|c| !c.is_whitespace()).collect()
}

/// A handle is safe when non-empty and free of URL separators and whitespace.
pub fn is_safe_handle(handle: &str) -> bool {
    !handle.is_empty()
        && !handle
            .chars()
            .any(|c| matches!(c, '/' | ':' | '?' | '#') || c.is_whitespace())
}

/// Returns true for a non-empty run of ASCII digits.
pub fn is_numeric_id(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Loose `local@domain.tld` shape check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Percent-encodes a value the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}
