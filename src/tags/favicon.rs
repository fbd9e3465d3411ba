//! IE-only wrapping of the template's favicon link.

use std::sync::LazyLock;

use regex::Regex;

static FAVICON_LINK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"<link rel="icon"[^>]+>"#).expect("invalid favicon regex"));

/// Wrap the first `<link rel="icon" ...>` of the template in an IE-only conditional comment.
///
/// Modern browsers then only see the generated favicon links. HTML without such a link is
/// returned unchanged.
pub fn wrap_ie_favicon(html: &str) -> String {
  FAVICON_LINK
    .replacen(html, 1, "<!--[if IE]>${0}<![endif]-->")
    .into_owned()
}
