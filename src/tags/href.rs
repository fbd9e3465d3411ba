//! Href resolution: asset versioning and public-path prefixing.

use std::sync::LazyLock;

use regex::Regex;

static ABSOLUTE_URL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("invalid absolute url regex"));

/// Returns `true` when `href` starts with `http://` or `https://`, ignoring case.
pub fn is_absolute_url(href: &str) -> bool {
  ABSOLUTE_URL.is_match(href)
}

/// Query string appended to every generated href, empty when no version is configured.
pub fn version_suffix(assets_version: &str) -> String {
  if assets_version.is_empty() {
    String::new()
  } else {
    format!("?v={assets_version}")
  }
}

/// Append the version suffix and prefix relative paths with `base_path`.
///
/// Absolute URLs are never prefixed but still carry the suffix.
pub fn resolve_href(base_path: &str, href: &str, version_suffix: &str) -> String {
  if is_absolute_url(href) {
    format!("{href}{version_suffix}")
  } else {
    format!("{base_path}{href}{version_suffix}")
  }
}
