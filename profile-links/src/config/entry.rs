// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Configuration Entries
//!
//! One declarative social-link definition as written by a site admin.

use serde::{Deserialize, Deserializer, Serialize};

/// Label used when an entry has neither a label nor an id.
pub const DEFAULT_LABEL: &str = "Link";

/// How the user's raw value for a link is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// A username appended to `base_url`.
    #[default]
    Handle,
    /// A handle made only of digits.
    NumericId,
    /// An email address rendered as `mailto:`.
    Email,
    /// An https URL whose host must be on the allowlist.
    UrlLocked,
    /// Any https URL, optionally narrowed by the allowlist.
    UrlAnyHttps,
}

impl InputType {
    /// Returns true for types that accept nothing but absolute URLs.
    pub fn is_url_only(&self) -> bool {
        matches!(self, InputType::UrlLocked | InputType::UrlAnyHttps)
    }
}

/// A social link definition.
///
/// Every field is optional in the host configuration; JSON `null` reads as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfigEntry {
    #[serde(deserialize_with = "text_or_number")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub label: Option<String>,
    /// Name of the site user field holding the value.
    pub user_field: Option<String>,
    #[serde(deserialize_with = "blank_input_type")]
    pub input_type: Option<InputType>,
    /// Prefix for handle-style values.
    pub base_url: Option<String>,
    /// Hostnames separated by commas or whitespace.
    pub allowed_hosts: Option<String>,
    pub path_regex: Option<String>,
    pub icon: Option<String>,
    /// Full-color image: theme upload key or https URL.
    pub icon_image: Option<String>,
    /// Monochrome mask: theme upload key or https URL.
    pub icon_mask: Option<String>,
    pub badge_background: Option<String>,
    pub badge_background_dark: Option<String>,
    pub badge_radius: Option<String>,
    pub color: Option<String>,
    pub color_dark: Option<String>,
    pub enabled: Option<bool>,
}

impl LinkConfigEntry {
    /// Creates an enabled entry bound to a user field.
    pub fn new(id: &str, user_field: &str, input_type: InputType) -> Self {
        Self {
            id: Some(id.to_string()),
            user_field: Some(user_field.to_string()),
            input_type: Some(input_type),
            ..Default::default()
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Sets the handle prefix.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Sets the host allowlist text.
    pub fn with_allowed_hosts(mut self, hosts: &str) -> Self {
        self.allowed_hosts = Some(hosts.to_string());
        self
    }

    /// Sets the path pattern.
    pub fn with_path_regex(mut self, pattern: &str) -> Self {
        self.path_regex = Some(pattern.to_string());
        self
    }

    /// Declared input type, `handle` when unset.
    pub fn input_type(&self) -> InputType {
        self.input_type.unwrap_or_default()
    }

    /// Only an explicit `enabled: false` disables an entry.
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Label, else id, else [`DEFAULT_LABEL`].
    pub fn display_label(&self) -> &str {
        non_empty(&self.label)
            .or_else(|| non_empty(&self.id))
            .unwrap_or(DEFAULT_LABEL)
    }
}

/// Returns the value unless it is absent or empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Accepts `"id": 7` as well as `"id": "7"`.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Treats `"input_type": ""` like a missing type.
fn blank_input_type<'de, D>(deserializer: D) -> Result<Option<InputType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => InputType::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(
            name,
        ))
        .map(Some),
    }
}
