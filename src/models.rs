//! Data structures shared between the resolver, the tag generator and the host.

use serde::Serialize;
use serde_json::{Map, Value};

/// Fully merged configuration. Immutable once constructed by [`crate::resolve::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
  /// Application name; `None` when explicitly set to `null`.
  pub name: Option<String>,
  /// Theme color; `None` suppresses the `theme-color` meta tag.
  pub theme_color: Option<String>,
  /// Windows tile color; `None` suppresses the tile color meta tag.
  pub ms_tile_color: Option<String>,
  /// `apple-mobile-web-app-capable` value.
  pub apple_mobile_web_app_capable: Option<String>,
  /// `apple-mobile-web-app-status-bar-style` value.
  pub apple_mobile_web_app_status_bar_style: Option<String>,
  /// Cache-busting token, empty when unused.
  pub assets_version: String,
  /// Output path or absolute URL of the manifest.
  pub manifest_path: String,
  /// User manifest keys layered over the generated manifest.
  pub manifest_options: Map<String, Value>,
  /// CORS mode for the manifest link.
  pub manifest_crossorigin: Option<String>,
  /// Base path override for the manifest link.
  pub manifest_public_path: Option<String>,
  /// Icon paths per role.
  pub icon_paths: IconPaths,
}

/// Resolved icon path per role. `None` disables the matching tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPaths {
  /// SVG favicon.
  #[serde(rename = "faviconSVG")]
  pub favicon_svg: Option<String>,
  /// 32x32 PNG favicon.
  #[serde(rename = "favicon32")]
  pub favicon32: Option<String>,
  /// 16x16 PNG favicon.
  #[serde(rename = "favicon16")]
  pub favicon16: Option<String>,
  /// iOS home screen icon.
  #[serde(rename = "appleTouchIcon")]
  pub apple_touch_icon: Option<String>,
  /// Safari pinned tab icon.
  #[serde(rename = "maskIcon")]
  pub mask_icon: Option<String>,
  /// Windows tile image.
  #[serde(rename = "msTileImage")]
  pub ms_tile_image: Option<String>,
}

/// One element destined for the document `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDescriptor {
  /// Element name, `link` or `meta`.
  pub tag_name: String,
  /// Whether the element is a void element (no closing tag).
  pub is_void_element: bool,
  /// Attributes in emission order.
  pub attributes: Vec<(String, String)>,
}

impl TagDescriptor {
  /// Build a void element from attribute pairs, preserving their order.
  pub fn void<I, K, V>(tag_name: &str, attributes: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      tag_name: tag_name.to_string(),
      is_void_element: true,
      attributes: attributes
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect(),
    }
  }

  /// Look up an attribute value by name.
  pub fn attribute(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.as_str())
  }
}

/// HTML handed over by the host right before it is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlData {
  /// Raw HTML source.
  pub html: String,
}

/// Head tag list the host is assembling for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTagData {
  /// Tags in document order.
  pub head_tags: Vec<TagDescriptor>,
}
