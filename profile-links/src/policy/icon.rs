// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Icon References
//!
//! Icons come from the theme's upload table (trusted) or from a direct https
//! URL. No host allowlist applies to icons.

use super::primitives::{is_http_url, is_safe_protocol, safe_parse_url};
use crate::config::ThemeUploads;

/// Resolves an icon image or mask reference, or returns an empty string.
pub fn resolve_icon(raw: Option<&str>, uploads: &ThemeUploads) -> String {
    let raw = raw.unwrap_or_default().trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Some(upload) = uploads.get(raw).filter(|u| !u.is_empty()) {
        return upload.clone();
    }

    if is_http_url(raw) {
        if let Some(url) = safe_parse_url(raw).filter(is_safe_protocol) {
            return url.to_string();
        }
    }

    String::new()
}
