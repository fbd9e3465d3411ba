//! In-memory output assets handed to the host for writing.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::manifest::document::build_manifest_document;
use crate::models::ResolvedConfig;
use crate::tags::is_absolute_url;

/// Output assets keyed by their path relative to the build output directory.
pub type OutputAssets = BTreeMap<String, Arc<dyn Asset>>;

/// Content the host writes to storage.
pub trait Asset: fmt::Debug + Send + Sync {
  /// Raw bytes of the asset.
  fn source(&self) -> &[u8];

  /// Size in bytes.
  fn size(&self) -> usize {
    self.source().len()
  }
}

/// Precomputed text asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAsset {
  content: Arc<str>,
}

impl RawAsset {
  /// Wrap already serialized content.
  pub fn new(content: impl Into<Arc<str>>) -> Self {
    Self {
      content: content.into(),
    }
  }

  /// Content as text.
  pub fn as_str(&self) -> &str {
    &self.content
  }
}

impl Asset for RawAsset {
  fn source(&self) -> &[u8] {
    self.content.as_bytes()
  }
}

/// Serialized manifest and the output path it is registered under.
#[derive(Debug, Clone)]
pub struct ManifestAsset {
  /// Output path, taken verbatim from `manifest_path`.
  pub path: String,
  /// Compact JSON content, shared by every compilation.
  pub asset: Arc<RawAsset>,
}

/// Serialize the manifest once, or return `None` when the manifest is hosted elsewhere.
pub fn build_manifest_asset(config: &ResolvedConfig) -> Option<ManifestAsset> {
  if is_absolute_url(&config.manifest_path) {
    return None;
  }

  let content = Value::Object(build_manifest_document(config)).to_string();
  Some(ManifestAsset {
    path: config.manifest_path.clone(),
    asset: Arc::new(RawAsset::new(content)),
  })
}
