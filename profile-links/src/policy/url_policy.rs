// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! URL Policy
//!
//! Decides whether an absolute URL supplied by a profile owner may become a
//! link. Only `https` is accepted. `url_any_https` entries may leave the host
//! allowlist empty to accept any host; every other type that reaches this
//! policy must name its hosts.

use regex::Regex;
use url::Url;

use super::primitives::{host_allowed, is_safe_protocol, normalize_hosts, safe_parse_url};
use crate::config::{non_empty, InputType, LinkConfigEntry};
use crate::error::LinkError;

/// Host and path rules for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPolicy<'a> {
    pub allowed_hosts: Vec<String>,
    pub path_regex: Option<&'a str>,
    /// An empty allowlist means "any host".
    pub allow_any_host: bool,
}

impl<'a> UrlPolicy<'a> {
    /// Builds the policy an entry declares.
    pub fn for_entry(entry: &'a LinkConfigEntry) -> Self {
        Self {
            allowed_hosts: normalize_hosts(entry.allowed_hosts.as_deref().unwrap_or_default()),
            path_regex: non_empty(&entry.path_regex),
            allow_any_host: entry.input_type() == InputType::UrlAnyHttps,
        }
    }

    /// Validates a candidate and returns its canonical form.
    pub fn check(&self, candidate: &str) -> Result<String, LinkError> {
        let url = safe_parse_url(candidate).ok_or(LinkError::UnparsableUrl)?;
        if !is_safe_protocol(&url) {
            return Err(LinkError::InsecureProtocol(url.scheme().to_string()));
        }

        self.check_host(&url)?;
        self.check_path(&url)?;

        Ok(url.to_string())
    }

    fn check_host(&self, url: &Url) -> Result<(), LinkError> {
        if self.allowed_hosts.is_empty() {
            return if self.allow_any_host {
                Ok(())
            } else {
                Err(LinkError::EmptyAllowlist)
            };
        }

        let host = url.host_str().unwrap_or_default();
        if host_allowed(host, &self.allowed_hosts) {
            Ok(())
        } else {
            Err(LinkError::HostNotAllowed(host.to_string()))
        }
    }

    fn check_path(&self, url: &Url) -> Result<(), LinkError> {
        let Some(pattern) = self.path_regex else {
            return Ok(());
        };

        let re = Regex::new(pattern).map_err(|e| LinkError::InvalidPathPattern(e.to_string()))?;
        if re.is_match(url.path()) {
            Ok(())
        } else {
            Err(LinkError::PathMismatch(url.path().to_string()))
        }
    }
}

/// Validates an absolute URL candidate against the entry's policy.
pub fn validate_url(entry: &LinkConfigEntry, candidate: &str) -> Result<String, LinkError> {
    UrlPolicy::for_entry(entry).check(candidate)
}
