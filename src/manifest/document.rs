//! Layered manifest document: defaults, then public fields, then user options.

use serde_json::{Map, Value, json};

use crate::models::ResolvedConfig;

/// Built-in manifest keys: Android icon set, start URL, display mode and background.
pub fn default_manifest() -> Map<String, Value> {
  let manifest = json!({
    "icons": [
      {
        "src": "./img/icons/android-chrome-192x192.png",
        "sizes": "192x192",
        "type": "image/png"
      },
      {
        "src": "./img/icons/android-chrome-512x512.png",
        "sizes": "512x512",
        "type": "image/png"
      },
      {
        "src": "./img/icons/android-chrome-maskable-192x192.png",
        "sizes": "192x192",
        "type": "image/png",
        "purpose": "maskable"
      },
      {
        "src": "./img/icons/android-chrome-maskable-512x512.png",
        "sizes": "512x512",
        "type": "image/png",
        "purpose": "maskable"
      }
    ],
    "start_url": ".",
    "display": "standalone",
    "background_color": "#000000"
  });

  match manifest {
    Value::Object(map) => map,
    _ => Map::new(),
  }
}

/// Build the manifest for `config` with a shallow, top-level merge.
///
/// Precedence from lowest to highest: [`default_manifest`], the `name`/`short_name`/
/// `theme_color` derived from the configuration, then `manifest_options`. Keys keep the
/// position of their first insertion, so the public fields lead the document.
pub fn build_manifest_document(config: &ResolvedConfig) -> Map<String, Value> {
  let mut document = Map::new();
  document.insert("name".into(), nullable_string(&config.name));
  document.insert("short_name".into(), nullable_string(&config.name));
  document.insert("theme_color".into(), nullable_string(&config.theme_color));

  for (key, value) in default_manifest() {
    document.entry(key).or_insert(value);
  }
  for (key, value) in &config.manifest_options {
    document.insert(key.clone(), value.clone());
  }

  document
}

fn nullable_string(value: &Option<String>) -> Value {
  value.clone().map_or(Value::Null, Value::String)
}
