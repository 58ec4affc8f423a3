// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Model Types
//!
//! Input supplied by the host's profile layer and the descriptor handed to
//! the renderer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Site field id to the viewed user's raw value.
pub type UserFieldValues = HashMap<u64, Option<String>>;

/// A site-wide user field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteUserField {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

impl SiteUserField {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Site-level part of the profile model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteModel {
    #[serde(default, deserialize_with = "lenient_site_fields")]
    pub user_fields: Option<Vec<SiteUserField>>,
}

/// The profile being viewed, as the host presents it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileModel {
    #[serde(default, deserialize_with = "lenient_user_values")]
    pub user_fields: Option<UserFieldValues>,
    #[serde(default)]
    pub site: Option<SiteModel>,
}

impl ProfileModel {
    /// Creates a complete model from site definitions and user values.
    pub fn new(site_fields: Vec<SiteUserField>, user_fields: UserFieldValues) -> Self {
        Self {
            user_fields: Some(user_fields),
            site: Some(SiteModel {
                user_fields: Some(site_fields),
            }),
        }
    }

    /// Site field definitions, if the host supplied them.
    pub fn site_fields(&self) -> Option<&[SiteUserField]> {
        self.site.as_ref()?.user_fields.as_deref()
    }

    /// Deserializes a profile model from the host's JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Reads user values one by one: strings are kept, numbers become strings,
/// and any other shape (arrays, objects, booleans) reads as absent. Keys that
/// are not numeric ids are skipped.
fn lenient_user_values<'de, D>(deserializer: D) -> Result<Option<UserFieldValues>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter_map(|(key, value)| {
                let id = key.trim().parse::<u64>().ok()?;
                let value = match value {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                };
                Some((id, value))
            })
            .collect()
    }))
}

/// Keeps only site field elements shaped like `{id, name}`.
fn lenient_site_fields<'de, D>(deserializer: D) -> Result<Option<Vec<SiteUserField>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|items| {
        items
            .into_iter()
            .filter_map(|item| SiteUserField::deserialize(item).ok())
            .collect()
    }))
}

/// A safe, render-ready link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub id: String,
    pub name: String,
    /// https URL, `mailto:` URI, or base URL plus encoded handle.
    pub href: String,
    pub icon: String,
    /// Empty, a theme upload, or an https URL.
    pub icon_image: String,
    /// Empty, a theme upload, or an https URL.
    pub icon_mask: String,
    pub badge_background: String,
    pub badge_background_dark: String,
    pub badge_radius: String,
    pub color: String,
    pub color_dark: String,
}

/// Serializes descriptors for the renderer.
pub fn descriptors_to_json(descriptors: &[LinkDescriptor]) -> Result<String, serde_json::Error> {
    serde_json::to_string(descriptors)
}
