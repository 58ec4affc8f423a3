// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Link Configuration
//!
//! Typed view of the host's `social_links` and `theme_uploads` settings.

mod entry;
mod settings;

pub(crate) use entry::non_empty;
pub use entry::{InputType, LinkConfigEntry, DEFAULT_LABEL};
pub use settings::{get_link_config, LinkSettings, SocialLinksSetting, ThemeUploads};
