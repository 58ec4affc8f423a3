// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures for profile link tests.

#![allow(dead_code)]

pub mod strategies;

use std::collections::HashMap;

use profile_links::config::ThemeUploads;
use profile_links::{LinkConfigEntry, ProfileModel, SiteUserField, UserFieldValues};

/// Routes library logs to the test writer. Set `RUST_LOG=debug` to see drops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Site field definitions used across tests.
pub fn site_fields() -> Vec<SiteUserField> {
    vec![
        SiteUserField::new(1, "GitHub"),
        SiteUserField::new(2, "Email"),
        SiteUserField::new(3, "Website"),
        SiteUserField::new(4, "Steam ID"),
        SiteUserField::new(5, "Mastodon"),
    ]
}

/// User values keyed by site field id.
pub fn user_values(values: &[(u64, &str)]) -> UserFieldValues {
    values
        .iter()
        .map(|(id, v)| (*id, Some(v.to_string())))
        .collect()
}

/// A complete profile model over [`site_fields`].
pub fn profile(values: &[(u64, &str)]) -> ProfileModel {
    ProfileModel::new(site_fields(), user_values(values))
}

/// Theme upload table with a couple of pre-approved assets.
pub fn uploads() -> ThemeUploads {
    let mut uploads = HashMap::new();
    uploads.insert(
        "github_logo".to_string(),
        "https://cdn.example.com/uploads/github.svg".to_string(),
    );
    uploads.insert("local_mask".to_string(), "/uploads/mask.svg".to_string());
    uploads
}

/// Handle entry pointing at GitHub profiles.
pub fn github_entry() -> LinkConfigEntry {
    LinkConfigEntry::new("github", "GitHub", profile_links::InputType::Handle)
        .with_label("GitHub")
        .with_base_url("https://github.com/")
        .with_allowed_hosts("github.com")
}
