// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Assembly
//!
//! Joins each configured entry with its site field and the user's value.
//! An entry either resolves completely or is dropped; there is no partial
//! descriptor.

use tracing::debug;

use super::model::{LinkDescriptor, SiteUserField, UserFieldValues};
use crate::config::{non_empty, LinkConfigEntry, ThemeUploads};
use crate::error::LinkError;
use crate::policy::{build_href, resolve_icon};

/// Icon used when an entry names none.
pub const DEFAULT_ICON: &str = "globe";

/// Result of resolving one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Id of the configured entry, if it has one.
    pub entry_id: Option<String>,
    pub result: Result<LinkDescriptor, LinkError>,
}

/// Resolves a single entry into a descriptor.
pub fn build_field(
    entry: &LinkConfigEntry,
    site_fields: &[SiteUserField],
    user_fields: &UserFieldValues,
    uploads: &ThemeUploads,
) -> Result<LinkDescriptor, LinkError> {
    if !entry.is_enabled() {
        return Err(LinkError::Disabled);
    }

    let name = entry.display_label().to_string();
    let user_field = non_empty(&entry.user_field).ok_or(LinkError::MissingUserField)?;

    let site_field = site_fields
        .iter()
        .find(|f| f.name == user_field)
        .ok_or_else(|| LinkError::UnknownSiteField(user_field.to_string()))?;

    let raw = user_fields
        .get(&site_field.id)
        .and_then(|v| v.as_deref())
        .filter(|v| !v.is_empty())
        .ok_or(LinkError::MissingValue)?;

    let href = build_href(entry, raw)?;

    Ok(LinkDescriptor {
        id: entry.id.clone().unwrap_or_default(),
        name,
        href,
        icon: non_empty(&entry.icon).unwrap_or(DEFAULT_ICON).to_string(),
        icon_image: resolve_icon(entry.icon_image.as_deref(), uploads),
        icon_mask: resolve_icon(entry.icon_mask.as_deref(), uploads),
        badge_background: trimmed(&entry.badge_background),
        badge_background_dark: trimmed(&entry.badge_background_dark),
        badge_radius: trimmed(&entry.badge_radius),
        color: trimmed(&entry.color),
        color_dark: trimmed(&entry.color_dark),
    })
}

/// Resolves every entry in order, keeping the reason for each drop.
pub fn assemble(
    entries: &[LinkConfigEntry],
    site_fields: &[SiteUserField],
    user_fields: &UserFieldValues,
    uploads: &ThemeUploads,
) -> Vec<FieldOutcome> {
    entries
        .iter()
        .map(|entry| {
            let result = build_field(entry, site_fields, user_fields, uploads);
            if let Err(reason) = &result {
                debug!(entry = ?entry.id, %reason, "dropping social link");
            }
            FieldOutcome {
                entry_id: entry.id.clone(),
                result,
            }
        })
        .collect()
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}
