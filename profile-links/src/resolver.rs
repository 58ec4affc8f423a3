// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Resolver
//!
//! Entry point for hosts. A resolver owns one settings snapshot and never
//! mutates it, so it can be shared freely between request threads.

use tracing::trace;

use crate::config::{LinkConfigEntry, LinkSettings};
use crate::profile::{assemble, FieldOutcome, LinkDescriptor, ProfileModel};

/// Resolves profile links against a settings snapshot.
#[derive(Debug, Clone, Default)]
pub struct LinkResolver {
    settings: LinkSettings,
}

impl LinkResolver {
    /// Creates a resolver over a settings snapshot.
    pub fn new(settings: LinkSettings) -> Self {
        Self { settings }
    }

    /// Returns the settings snapshot.
    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    /// Configured link entries; empty when the setting is malformed.
    pub fn link_config(&self) -> Vec<LinkConfigEntry> {
        self.settings.link_config()
    }

    /// Resolves every configured entry, reporting why dropped entries failed.
    pub fn explain_fields(&self, model: &ProfileModel) -> Option<Vec<FieldOutcome>> {
        explain_fields(&self.settings, model)
    }

    /// Safe link descriptors for the profile, in configuration order.
    pub fn resolve_fields(&self, model: &ProfileModel) -> Option<Vec<LinkDescriptor>> {
        resolve_fields(&self.settings, model)
    }
}

/// Resolves every configured entry, keeping the drop reason for each.
///
/// Returns None when the model lacks user values or site field definitions.
pub fn explain_fields(
    settings: &LinkSettings,
    model: &ProfileModel,
) -> Option<Vec<FieldOutcome>> {
    let user_fields = model.user_fields.as_ref()?;
    let site_fields = model.site_fields()?;

    Some(assemble(
        &settings.link_config(),
        site_fields,
        user_fields,
        &settings.theme_uploads,
    ))
}

/// Safe link descriptors for the profile, in configuration order.
///
/// Returns None when the model lacks user values or site field definitions.
pub fn resolve_fields(
    settings: &LinkSettings,
    model: &ProfileModel,
) -> Option<Vec<LinkDescriptor>> {
    let descriptors: Vec<_> = explain_fields(settings, model)?
        .into_iter()
        .filter_map(|outcome| outcome.result.ok())
        .collect();

    trace!(count = descriptors.len(), "resolved social links");
    Some(descriptors)
}
