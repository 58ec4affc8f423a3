// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

/// Strategy for generating email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._+-]{1,12}", "[a-z]{2,10}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Strategy for generating hostnames.
pub fn host_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{1,10}", "[a-z]{2,4}").prop_map(|(name, tld)| format!("{}.{}", name, tld))
}

/// Strategy for generating URL paths.
pub fn path_strategy() -> impl Strategy<Value = String> {
    "(/[a-zA-Z0-9_-]{1,10}){0,3}"
}

/// Strategy for generating handles with at least one non-digit.
pub fn non_numeric_handle_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,5}[a-zA-Z_.-][a-zA-Z0-9_.-]{0,10}"
}

/// Strategy for generating plain handles.
pub fn handle_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,20}"
}
