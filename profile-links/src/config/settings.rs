// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host Settings Snapshot
//!
//! The host hands over `social_links` either as a JSON array or as the raw
//! text an admin typed into a settings box. Both collapse to a typed entry
//! list here; anything malformed reads as "no links configured".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

use super::entry::LinkConfigEntry;

/// Upload key to pre-approved asset URL.
pub type ThemeUploads = HashMap<String, String>;

/// Raw `social_links` setting as supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SocialLinksSetting {
    /// Already-structured list.
    Structured(Vec<Value>),
    /// Serialized JSON text.
    Text(String),
    /// Any other shape (object, number, null).
    Other(Value),
}

impl Default for SocialLinksSetting {
    fn default() -> Self {
        SocialLinksSetting::Structured(Vec::new())
    }
}

impl From<Vec<LinkConfigEntry>> for SocialLinksSetting {
    fn from(entries: Vec<LinkConfigEntry>) -> Self {
        SocialLinksSetting::Structured(
            entries
                .iter()
                .filter_map(|e| serde_json::to_value(e).ok())
                .collect(),
        )
    }
}

/// Reads the configured link entries.
///
/// Never fails: unparsable text or a non-list value yields an empty list, and
/// list elements that are not well-formed entries are skipped.
pub fn get_link_config(setting: &SocialLinksSetting) -> Vec<LinkConfigEntry> {
    match setting {
        SocialLinksSetting::Structured(items) => decode_entries(items),
        SocialLinksSetting::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => decode_entries(&items),
            Ok(_) => {
                warn!("social_links setting is not a list");
                Vec::new()
            }
            Err(e) => {
                warn!("social_links setting is not valid JSON: {}", e);
                Vec::new()
            }
        },
        SocialLinksSetting::Other(_) => {
            warn!("social_links setting is not a list");
            Vec::new()
        }
    }
}

fn decode_entries(items: &[Value]) -> Vec<LinkConfigEntry> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            if !item.is_object() {
                return None;
            }
            LinkConfigEntry::deserialize(item)
                .map_err(|e| warn!(index, "skipping malformed social link entry: {}", e))
                .ok()
        })
        .collect()
}

/// Configuration snapshot for one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSettings {
    #[serde(default)]
    pub social_links: SocialLinksSetting,
    #[serde(default)]
    pub theme_uploads: ThemeUploads,
}

impl LinkSettings {
    /// Uses the given entries as the structured link list.
    pub fn with_social_links(mut self, entries: Vec<LinkConfigEntry>) -> Self {
        self.social_links = entries.into();
        self
    }

    /// Uses raw settings text for the link list.
    pub fn with_social_links_text(mut self, text: &str) -> Self {
        self.social_links = SocialLinksSetting::Text(text.to_string());
        self
    }

    /// Replaces the theme upload table.
    pub fn with_theme_uploads(mut self, uploads: ThemeUploads) -> Self {
        self.theme_uploads = uploads;
        self
    }

    /// Parsed link entries.
    pub fn link_config(&self) -> Vec<LinkConfigEntry> {
        get_link_config(&self.social_links)
    }

    /// Deserializes a settings snapshot from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
