// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile Link Assembly
//!
//! Profile model inputs, the descriptor output, and the per-entry assembler.

mod assemble;
mod model;

pub use assemble::{assemble, build_field, FieldOutcome, DEFAULT_ICON};
pub use model::{
    descriptors_to_json, LinkDescriptor, ProfileModel, SiteModel, SiteUserField, UserFieldValues,
};
