// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Safety Policy
//!
//! This module provides:
//! - Primitive shape checks for handles, emails and URLs
//! - Classification of raw profile values into hrefs
//! - The https/allowlist policy for user-supplied URLs
//! - Icon reference resolution

mod classify;
mod icon;
mod primitives;
mod url_policy;

pub use classify::{build_href, classify, Classified};
pub use icon::resolve_icon;
pub use primitives::{
    encode_component, host_allowed, is_http_url, is_numeric_id, is_safe_handle,
    is_safe_protocol, is_valid_email, normalize_handle, normalize_hosts, safe_parse_url,
    SAFE_SCHEME,
};
pub use url_policy::{validate_url, UrlPolicy};
