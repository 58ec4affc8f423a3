// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Error Types
//!
//! Every reason a configured link can be dropped. Resolution never surfaces
//! these to the renderer; they exist for logging and admin diagnostics.

use thiserror::Error;

/// Reason a link entry was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Entry has `enabled: false`.
    #[error("entry is disabled")]
    Disabled,

    /// Entry names no user field.
    #[error("entry has no user_field")]
    MissingUserField,

    /// No site field definition carries the configured name.
    #[error("no site user field named {0:?}")]
    UnknownSiteField(String),

    /// The user left the field blank.
    #[error("user has no value for this field")]
    MissingValue,

    /// Value is empty after trimming.
    #[error("value cannot be empty")]
    EmptyValue,

    /// Value does not look like `local@domain.tld`.
    #[error("invalid email format")]
    InvalidEmail,

    /// Entry accepts only absolute URLs.
    #[error("input type accepts only https URLs")]
    UrlOnly,

    /// Handle is empty or contains separators/whitespace.
    #[error("unsafe handle {0:?}")]
    UnsafeHandle(String),

    /// Handle for a numeric id contains non-digits.
    #[error("handle {0:?} is not numeric")]
    NotNumeric(String),

    /// Handle entry has no base URL to prefix.
    #[error("entry has no base_url")]
    MissingBaseUrl,

    /// Value could not be parsed as a URL.
    #[error("unparsable url")]
    UnparsableUrl,

    /// URL scheme is not `https`.
    #[error("protocol {0:?} is not allowed")]
    InsecureProtocol(String),

    /// URL entry requires a host allowlist but none is configured.
    #[error("allowed_hosts is required for this input type")]
    EmptyAllowlist,

    /// URL host is not on the allowlist.
    #[error("host {0:?} is not allowed")]
    HostNotAllowed(String),

    /// `path_regex` does not compile.
    #[error("invalid path pattern: {0}")]
    InvalidPathPattern(String),

    /// URL path does not match `path_regex`.
    #[error("path {0:?} does not match the allowed pattern")]
    PathMismatch(String),
}
