//! Merge user options over the built-in defaults.
//!
//! Two explicit merges keep precedence auditable: [`merge_icon_paths`] works per icon role,
//! [`merge_options`] replaces whole top-level fields.

use serde_json::{Map, Value};

use crate::config::{IconPathOverrides, PwaOptions};
use crate::models::{IconPaths, ResolvedConfig};

/// Default application name.
pub const DEFAULT_NAME: &str = "PWA app";
/// Default theme color.
pub const DEFAULT_THEME_COLOR: &str = "#4DBA87";
/// Default Windows tile color.
pub const DEFAULT_MS_TILE_COLOR: &str = "#000000";
/// Default `apple-mobile-web-app-capable` value.
pub const DEFAULT_APPLE_CAPABLE: &str = "no";
/// Default `apple-mobile-web-app-status-bar-style` value.
pub const DEFAULT_APPLE_STATUS_BAR_STYLE: &str = "default";
/// Default manifest output path.
pub const DEFAULT_MANIFEST_PATH: &str = "manifest.json";

/// Text a `null` turns into where a string is always needed.
const NULL_TEXT: &str = "null";

impl Default for IconPaths {
  fn default() -> Self {
    Self {
      favicon_svg: Some("img/icons/favicon.svg".into()),
      favicon32: Some("img/icons/favicon-32x32.png".into()),
      favicon16: Some("img/icons/favicon-16x16.png".into()),
      apple_touch_icon: Some("img/icons/apple-touch-icon-152x152.png".into()),
      mask_icon: Some("img/icons/safari-pinned-tab.svg".into()),
      ms_tile_image: Some("img/icons/msapplication-icon-144x144.png".into()),
    }
  }
}

impl Default for ResolvedConfig {
  fn default() -> Self {
    Self {
      name: Some(DEFAULT_NAME.into()),
      theme_color: Some(DEFAULT_THEME_COLOR.into()),
      ms_tile_color: Some(DEFAULT_MS_TILE_COLOR.into()),
      apple_mobile_web_app_capable: Some(DEFAULT_APPLE_CAPABLE.into()),
      apple_mobile_web_app_status_bar_style: Some(DEFAULT_APPLE_STATUS_BAR_STYLE.into()),
      assets_version: String::new(),
      manifest_path: DEFAULT_MANIFEST_PATH.into(),
      manifest_options: Map::new(),
      manifest_crossorigin: None,
      manifest_public_path: None,
      icon_paths: IconPaths::default(),
    }
  }
}

/// Resolve user options into a complete configuration.
///
/// Pure: the same options always produce an equal configuration and the input is not touched.
pub fn resolve(options: &PwaOptions) -> ResolvedConfig {
  let icon_paths = merge_icon_paths(IconPaths::default(), options.icon_paths.as_ref());
  ResolvedConfig {
    icon_paths,
    ..merge_options(ResolvedConfig::default(), options)
  }
}

/// Override default icon paths role by role.
///
/// A role present in `overrides` replaces the default, including an explicit `null` which
/// disables the icon. Absent roles keep their default path.
pub fn merge_icon_paths(defaults: IconPaths, overrides: Option<&IconPathOverrides>) -> IconPaths {
  let Some(overrides) = overrides else {
    return defaults;
  };

  IconPaths {
    favicon_svg: replace_if_present(defaults.favicon_svg, &overrides.favicon_svg),
    favicon32: replace_if_present(defaults.favicon32, &overrides.favicon32),
    favicon16: replace_if_present(defaults.favicon16, &overrides.favicon16),
    apple_touch_icon: replace_if_present(defaults.apple_touch_icon, &overrides.apple_touch_icon),
    mask_icon: replace_if_present(defaults.mask_icon, &overrides.mask_icon),
    ms_tile_image: replace_if_present(defaults.ms_tile_image, &overrides.ms_tile_image),
  }
}

/// Replace top-level fields of `defaults` with every field present in `options`.
///
/// An explicit `null` replaces the default too: it becomes an empty version token, and a
/// `manifest_path` of literally `null`. `icon_paths` is left as found in `defaults`; see
/// [`merge_icon_paths`].
pub fn merge_options(defaults: ResolvedConfig, options: &PwaOptions) -> ResolvedConfig {
  ResolvedConfig {
    name: replace_if_present(defaults.name, &options.name),
    theme_color: replace_if_present(defaults.theme_color, &options.theme_color),
    ms_tile_color: replace_if_present(defaults.ms_tile_color, &options.ms_tile_color),
    apple_mobile_web_app_capable: replace_if_present(
      defaults.apple_mobile_web_app_capable,
      &options.apple_mobile_web_app_capable,
    ),
    apple_mobile_web_app_status_bar_style: replace_if_present(
      defaults.apple_mobile_web_app_status_bar_style,
      &options.apple_mobile_web_app_status_bar_style,
    ),
    assets_version: match &options.assets_version {
      Some(explicit) => explicit.clone().unwrap_or_default(),
      None => defaults.assets_version,
    },
    manifest_path: match &options.manifest_path {
      Some(explicit) => explicit.clone().unwrap_or_else(|| NULL_TEXT.into()),
      None => defaults.manifest_path,
    },
    manifest_options: match &options.manifest_options {
      Some(Value::Object(map)) => map.clone(),
      Some(_) => Map::new(),
      None => defaults.manifest_options,
    },
    manifest_crossorigin: replace_if_present(
      defaults.manifest_crossorigin,
      &options.manifest_crossorigin,
    ),
    manifest_public_path: replace_if_present(
      defaults.manifest_public_path,
      &options.manifest_public_path,
    ),
    icon_paths: defaults.icon_paths,
  }
}

fn replace_if_present(default: Option<String>, value: &Option<Option<String>>) -> Option<String> {
  match value {
    Some(explicit) => explicit.clone(),
    None => default,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn empty_options_resolve_to_defaults() {
    let config = resolve(&PwaOptions::default());

    assert_eq!(config, ResolvedConfig::default());
    assert_eq!(config.name.as_deref(), Some("PWA app"));
    assert_eq!(config.theme_color.as_deref(), Some("#4DBA87"));
    assert_eq!(config.manifest_path, "manifest.json");
    assert!(config.manifest_crossorigin.is_none());
  }

  #[test]
  fn explicit_null_replaces_default() {
    let options = PwaOptions {
      theme_color: Some(None),
      ms_tile_color: Some(None),
      ..PwaOptions::default()
    };

    let config = resolve(&options);

    assert_eq!(config.theme_color, None);
    assert_eq!(config.ms_tile_color, None);
    assert_eq!(config.name.as_deref(), Some(DEFAULT_NAME));
  }

  #[test]
  fn icon_overrides_apply_per_role() {
    let overrides = IconPathOverrides {
      favicon_svg: Some(None),
      mask_icon: Some(Some("custom/mask.svg".into())),
      ..IconPathOverrides::default()
    };

    let icons = merge_icon_paths(IconPaths::default(), Some(&overrides));

    assert_eq!(icons.favicon_svg, None);
    assert_eq!(icons.mask_icon.as_deref(), Some("custom/mask.svg"));
    assert_eq!(
      icons.favicon32.as_deref(),
      Some("img/icons/favicon-32x32.png")
    );
    assert_eq!(
      icons.ms_tile_image.as_deref(),
      Some("img/icons/msapplication-icon-144x144.png")
    );
  }

  #[test]
  fn merge_options_keeps_icon_paths_untouched() {
    let mut defaults = ResolvedConfig::default();
    defaults.icon_paths.favicon16 = None;
    let options = PwaOptions {
      icon_paths: Some(IconPathOverrides {
        favicon16: Some(Some("ignored.png".into())),
        ..IconPathOverrides::default()
      }),
      ..PwaOptions::default()
    };

    let merged = merge_options(defaults, &options);

    assert_eq!(merged.icon_paths.favicon16, None);
  }

  #[test]
  fn manifest_options_replace_wholesale() {
    let manifest_options = json!({ "display": "fullscreen" })
      .as_object()
      .cloned()
      .unwrap();
    let options = PwaOptions {
      manifest_options: Some(Value::Object(manifest_options.clone())),
      manifest_crossorigin: Some(Some("use-credentials".into())),
      manifest_public_path: Some(Some("https://cdn.example.com/".into())),
      assets_version: Some(Some("42".into())),
      ..PwaOptions::default()
    };

    let config = resolve(&options);

    assert_eq!(config.manifest_options, manifest_options);
    assert_eq!(config.manifest_crossorigin.as_deref(), Some("use-credentials"));
    assert_eq!(
      config.manifest_public_path.as_deref(),
      Some("https://cdn.example.com/")
    );
    assert_eq!(config.assets_version, "42");
  }

  #[test]
  fn explicit_null_manifest_path_is_kept_literally() {
    let options: PwaOptions =
      serde_json::from_str(r#"{"manifestPath": null, "assetsVersion": null}"#).unwrap();

    let config = resolve(&options);

    assert_eq!(config.manifest_path, "null");
    assert_eq!(config.assets_version, "");
  }

  #[test]
  fn non_object_manifest_options_add_nothing() {
    let options: PwaOptions = serde_json::from_str(r#"{"manifestOptions": 5}"#).unwrap();

    assert!(resolve(&options).manifest_options.is_empty());
  }

  #[test]
  fn numeric_assets_version_is_used_as_text() {
    let options: PwaOptions = serde_json::from_str(r#"{"assetsVersion": 2}"#).unwrap();

    assert_eq!(resolve(&options).assets_version, "2");
  }

  #[test]
  fn resolving_twice_is_deterministic() {
    let options: PwaOptions = serde_json::from_str(
      r##"{"name": "App", "themeColor": "#112233", "iconPaths": {"faviconSVG": null}}"##,
    )
    .unwrap();
    let before = options.clone();

    assert_eq!(resolve(&options), resolve(&options));
    assert_eq!(options, before);
  }
}
