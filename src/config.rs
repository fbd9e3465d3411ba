//! User-facing options loaded from code or from a `pwa.config.json` file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// File name searched for by [`PwaOptions::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "pwa.config.json";

/// Partially populated options supplied by the user.
///
/// Every field may be absent. Fields typed `Option<Option<_>>` distinguish an absent key
/// (`None`) from an explicit JSON `null` (`Some(None)`), because an explicit `null` replaces
/// the built-in default instead of falling back to it.
///
/// Text fields accept any JSON scalar and keep its textual form, so `"assetsVersion": 2`
/// reads as `"2"`. Fields only tested for presence in the output (`assetsVersion`,
/// `manifestCrossorigin`, `manifestPublicPath`) read `false`, `0` and `""` as `null`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaOptions {
  /// Application name used for the iOS title and the manifest `name`/`short_name`.
  #[serde(default, deserialize_with = "lenient_text")]
  pub name: Option<Option<String>>,
  /// CSS color for the `theme-color` meta tag, the mask icon and the manifest.
  #[serde(default, deserialize_with = "lenient_text")]
  pub theme_color: Option<Option<String>>,
  /// Windows tile background color.
  #[serde(default, deserialize_with = "lenient_text")]
  pub ms_tile_color: Option<Option<String>>,
  /// Value for `apple-mobile-web-app-capable`, usually `yes` or `no`.
  #[serde(default, deserialize_with = "lenient_text")]
  pub apple_mobile_web_app_capable: Option<Option<String>>,
  /// Value for `apple-mobile-web-app-status-bar-style`.
  #[serde(default, deserialize_with = "lenient_text")]
  pub apple_mobile_web_app_status_bar_style: Option<Option<String>>,
  /// Cache-busting token appended to local hrefs as `?v=<token>`.
  #[serde(default, deserialize_with = "truthy_text")]
  pub assets_version: Option<Option<String>>,
  /// Output path (or absolute URL) of the web app manifest.
  #[serde(default, deserialize_with = "lenient_text")]
  pub manifest_path: Option<Option<String>>,
  /// Extra top-level manifest keys, overriding the generated ones.
  ///
  /// Only a JSON object contributes keys; any other value adds nothing.
  #[serde(default)]
  pub manifest_options: Option<Value>,
  /// CORS mode added to the manifest link as `crossorigin`.
  #[serde(default, deserialize_with = "truthy_text")]
  pub manifest_crossorigin: Option<Option<String>>,
  /// Base path used for the manifest link instead of the build's public path.
  #[serde(default, deserialize_with = "truthy_text")]
  pub manifest_public_path: Option<Option<String>>,
  /// Per-role icon overrides, merged over the default icon table.
  #[serde(default)]
  pub icon_paths: Option<IconPathOverrides>,
}

/// Per-role icon path overrides. `Some(None)` disables the icon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconPathOverrides {
  /// SVG favicon.
  #[serde(rename = "faviconSVG", default, deserialize_with = "lenient_text")]
  pub favicon_svg: Option<Option<String>>,
  /// 32x32 PNG favicon.
  #[serde(rename = "favicon32", default, deserialize_with = "lenient_text")]
  pub favicon32: Option<Option<String>>,
  /// 16x16 PNG favicon.
  #[serde(rename = "favicon16", default, deserialize_with = "lenient_text")]
  pub favicon16: Option<Option<String>>,
  /// iOS home screen icon.
  #[serde(rename = "appleTouchIcon", default, deserialize_with = "lenient_text")]
  pub apple_touch_icon: Option<Option<String>>,
  /// Safari pinned tab icon.
  #[serde(rename = "maskIcon", default, deserialize_with = "lenient_text")]
  pub mask_icon: Option<Option<String>>,
  /// Windows tile image.
  #[serde(rename = "msTileImage", default, deserialize_with = "lenient_text")]
  pub ms_tile_image: Option<Option<String>>,
}

/// Errors that can occur while loading options from disk.
#[derive(Debug)]
pub enum OptionsError {
  /// Failed to read the options file.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the options JSON.
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl PwaOptions {
  /// Look for [`DEFAULT_CONFIG_FILE`] inside `dir`.
  ///
  /// A missing file yields default options; a file that exists but cannot be read or parsed
  /// is reported as an error.
  pub fn discover(dir: &Path) -> Result<Self, OptionsError> {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(&candidate) {
      Ok(contents) => Self::from_json(&candidate, &contents),
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
      Err(err) => Err(OptionsError::Io {
        path: candidate,
        source: err,
      }),
    }
  }

  /// Read options from a specific JSON file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| OptionsError::Io {
      path: path.to_path_buf(),
      source: err,
    })?;
    Self::from_json(path, &contents)
  }

  fn from_json(path: &Path, contents: &str) -> Result<Self, OptionsError> {
    serde_json::from_str(contents).map_err(|err| OptionsError::Parse {
      path: path.to_path_buf(),
      source: err,
    })
  }
}

impl std::fmt::Display for OptionsError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::Parse { path, source } => {
        write!(f, "failed to parse {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for OptionsError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}

/// Deserialize a present key as `Some(text)`, keeping JSON `null` as `Some(None)`.
///
/// Paired with `#[serde(default)]`, an absent key stays `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<Value>::deserialize(deserializer).map(|value| Some(value.and_then(scalar_text)))
}

/// Like [`lenient_text`], with `false`, `0` and `""` read as `null`.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Option::<Value>::deserialize(deserializer)
    .map(|value| Some(value.filter(is_truthy).and_then(scalar_text)))
}

fn scalar_text(value: Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(text) => Some(text),
    other => Some(other.to_string()),
  }
}

fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(flag) => *flag,
    Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
    Value::String(text) => !text.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn distinguishes_absent_null_and_present_keys() {
    let options: PwaOptions =
      serde_json::from_str(r##"{"name": "App", "themeColor": null}"##).unwrap();

    assert_eq!(options.name, Some(Some("App".into())));
    assert_eq!(options.theme_color, Some(None));
    assert_eq!(options.ms_tile_color, None);
  }

  #[test]
  fn reads_icon_overrides_with_original_role_names() {
    let options: PwaOptions = serde_json::from_str(
      r#"{"iconPaths": {"faviconSVG": null, "maskIcon": "icons/mask.svg"}}"#,
    )
    .unwrap();

    let icons = options.icon_paths.unwrap();
    assert_eq!(icons.favicon_svg, Some(None));
    assert_eq!(icons.mask_icon, Some(Some("icons/mask.svg".into())));
    assert_eq!(icons.favicon32, None);
  }

  #[test]
  fn keeps_textual_form_of_scalars() {
    let options: PwaOptions = serde_json::from_str(
      r#"{"assetsVersion": 2, "name": true, "manifestPath": null, "iconPaths": {"favicon16": 16}}"#,
    )
    .unwrap();

    assert_eq!(options.assets_version, Some(Some("2".into())));
    assert_eq!(options.name, Some(Some("true".into())));
    assert_eq!(options.manifest_path, Some(None));
    assert_eq!(options.icon_paths.unwrap().favicon16, Some(Some("16".into())));
  }

  #[test]
  fn falsy_presence_fields_read_as_null() {
    let options: PwaOptions = serde_json::from_str(
      r#"{"assetsVersion": 0, "manifestCrossorigin": false, "manifestPublicPath": ""}"#,
    )
    .unwrap();

    assert_eq!(options.assets_version, Some(None));
    assert_eq!(options.manifest_crossorigin, Some(None));
    assert_eq!(options.manifest_public_path, Some(None));
  }

  #[test]
  fn ignores_unknown_keys() {
    let options: PwaOptions =
      serde_json::from_str(r#"{"workboxPluginMode": "GenerateSW"}"#).unwrap();
    assert_eq!(options, PwaOptions::default());
  }

  #[test]
  fn discover_returns_default_for_missing_file() {
    let temp = tempdir().expect("failed to create temp dir");

    let options = PwaOptions::discover(temp.path()).expect("missing file should not error");

    assert_eq!(options, PwaOptions::default());
  }

  #[test]
  fn discover_reads_configuration() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"manifestPath": "site.webmanifest", "assetsVersion": "3"}"#,
    )
    .expect("failed to write options file");

    let options = PwaOptions::discover(temp.path()).expect("options should load");

    assert_eq!(options.manifest_path, Some(Some("site.webmanifest".into())));
    assert_eq!(options.assets_version, Some(Some("3".into())));
  }

  #[test]
  fn from_path_reports_parse_errors_with_path() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ not json").expect("failed to write options file");

    let err = PwaOptions::from_path(&path).unwrap_err();

    assert!(matches!(err, OptionsError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
  }

  #[test]
  fn from_path_reports_missing_file() {
    let temp = tempdir().expect("failed to create temp dir");

    let err = PwaOptions::from_path(temp.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, OptionsError::Io { .. }));
  }
}
