// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the https/allowlist URL policy

use profile_links::policy::{validate_url, UrlPolicy};
use profile_links::{InputType, LinkConfigEntry, LinkError};

fn locked(hosts: &str) -> LinkConfigEntry {
    LinkConfigEntry::new("site", "Website", InputType::UrlLocked).with_allowed_hosts(hosts)
}

fn any_https() -> LinkConfigEntry {
    LinkConfigEntry::new("site", "Website", InputType::UrlAnyHttps)
}

// ============================================================
// Protocol
// ============================================================

#[test]
fn test_https_url_is_canonicalized() {
    assert_eq!(
        validate_url(&any_https(), "HTTPS://Example.COM"),
        Ok("https://example.com/".to_string())
    );
}

#[test]
fn test_http_url_is_rejected_even_when_host_allowed() {
    assert_eq!(
        validate_url(&locked("example.com"), "http://example.com/"),
        Err(LinkError::InsecureProtocol("http".to_string()))
    );
    assert!(validate_url(&any_https(), "http://example.com/").is_err());
}

#[test]
fn test_other_schemes_are_rejected() {
    for candidate in ["javascript:alert(1)", "data:text/html,hi", "ftp://example.com/"] {
        assert!(validate_url(&any_https(), candidate).is_err(), "{}", candidate);
    }
}

#[test]
fn test_unparsable_url_is_rejected() {
    assert_eq!(
        validate_url(&any_https(), "https://"),
        Err(LinkError::UnparsableUrl)
    );
}

// ============================================================
// Hosts
// ============================================================

#[test]
fn test_any_https_without_allowlist_accepts_any_host() {
    assert_eq!(
        validate_url(&any_https(), "https://my-blog.dev/about"),
        Ok("https://my-blog.dev/about".to_string())
    );
}

#[test]
fn test_any_https_with_allowlist_restricts_hosts() {
    let entry = any_https().with_allowed_hosts("other.com");
    assert_eq!(
        validate_url(&entry, "https://example.com/"),
        Err(LinkError::HostNotAllowed("example.com".to_string()))
    );
    assert!(validate_url(&entry, "https://other.com/").is_ok());
}

#[test]
fn test_locked_url_requires_allowlist() {
    assert_eq!(
        validate_url(&locked(""), "https://example.com/"),
        Err(LinkError::EmptyAllowlist)
    );
    assert_eq!(
        validate_url(&locked(" , "), "https://example.com/"),
        Err(LinkError::EmptyAllowlist)
    );
}

#[test]
fn test_dotted_allowlist_entry() {
    let entry = locked(".example.com");

    assert!(validate_url(&entry, "https://example.com/").is_ok());
    assert!(validate_url(&entry, "https://a.example.com/").is_ok());
    assert!(validate_url(&entry, "https://notexample.com/").is_err());
    assert!(validate_url(&entry, "https://example.org/").is_err());
}

#[test]
fn test_userinfo_does_not_spoof_host() {
    let entry = locked("github.com");
    assert_eq!(
        validate_url(&entry, "https://github.com@evil.com/alice"),
        Err(LinkError::HostNotAllowed("evil.com".to_string()))
    );
}

#[test]
fn test_allowlist_is_case_insensitive() {
    let entry = locked("GitHub.com");
    assert_eq!(
        validate_url(&entry, "https://GITHUB.com/Alice"),
        Ok("https://github.com/Alice".to_string())
    );
}

// ============================================================
// Path patterns
// ============================================================

#[test]
fn test_path_regex_must_match() {
    let entry = locked("mastodon.social").with_path_regex("^/@[A-Za-z0-9_]+$");

    assert_eq!(
        validate_url(&entry, "https://mastodon.social/@alice"),
        Ok("https://mastodon.social/@alice".to_string())
    );
    assert_eq!(
        validate_url(&entry, "https://mastodon.social/about"),
        Err(LinkError::PathMismatch("/about".to_string()))
    );
}

#[test]
fn test_path_regex_applies_to_any_https() {
    let entry = any_https().with_path_regex("^/in/");

    assert!(validate_url(&entry, "https://linkedin.com/in/alice").is_ok());
    assert!(validate_url(&entry, "https://linkedin.com/company/x").is_err());
}

#[test]
fn test_malformed_path_regex_rejects_instead_of_panicking() {
    let entry = locked("example.com").with_path_regex("[a-z");
    assert!(matches!(
        validate_url(&entry, "https://example.com/abc"),
        Err(LinkError::InvalidPathPattern(_))
    ));

    let entry = any_https().with_path_regex("(unclosed");
    assert!(matches!(
        validate_url(&entry, "https://example.com/abc"),
        Err(LinkError::InvalidPathPattern(_))
    ));
}

#[test]
fn test_empty_path_regex_is_ignored() {
    let entry = locked("example.com").with_path_regex("");
    assert!(validate_url(&entry, "https://example.com/anything").is_ok());
}

#[test]
fn test_policy_for_entry() {
    let entry = any_https()
        .with_allowed_hosts("A.com b.com")
        .with_path_regex("^/x");
    let policy = UrlPolicy::for_entry(&entry);

    assert_eq!(policy.allowed_hosts, vec!["a.com", "b.com"]);
    assert_eq!(policy.path_regex, Some("^/x"));
    assert!(policy.allow_any_host);
    assert!(!UrlPolicy::for_entry(&locked("a.com")).allow_any_host);
}
