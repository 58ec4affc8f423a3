// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Links
//!
//! Turns admin-declared social link definitions and a profile owner's field
//! values into link descriptors that are safe to render. Every user-supplied
//! value passes a fail-closed policy: https only, host allowlists, handle
//! shape checks. Anything that does not fully resolve is dropped.

pub mod config;
pub mod error;
pub mod policy;
pub mod profile;
pub mod resolver;

pub use config::{get_link_config, InputType, LinkConfigEntry, LinkSettings, SocialLinksSetting};
pub use error::LinkError;
pub use profile::{
    descriptors_to_json, FieldOutcome, LinkDescriptor, ProfileModel, SiteUserField,
    UserFieldValues,
};
pub use resolver::{explain_fields, resolve_fields, LinkResolver};
