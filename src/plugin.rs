//! Extension points called by a host build and the PWA plugin implementing them.

use std::sync::Arc;

use log::debug;

use crate::config::PwaOptions;
use crate::manifest::{Asset, ManifestAsset, OutputAssets, build_manifest_asset};
use crate::models::{HeadTagData, HtmlData, ResolvedConfig};
use crate::resolve::resolve;
use crate::tags::{generate_head_tags, wrap_ie_favicon};

/// Hooks a host build invokes during every compilation.
///
/// Each hook receives only the data it may change. Default implementations do nothing so
/// extensions override just the points they care about.
pub trait CompilationHooks {
  /// Called with the final HTML right before the host emits it.
  fn on_html_ready(&self, _data: &mut HtmlData) {}

  /// Called while the host assembles the document's head tags.
  fn on_head_tags_assembling(&self, _data: &mut HeadTagData, _public_path: &str) {}

  /// Called when the host finalizes the set of output assets.
  fn on_assets_finalizing(&self, _assets: &mut OutputAssets) {}
}

/// Adds PWA head tags to generated HTML and emits the web app manifest.
#[derive(Debug, Clone)]
pub struct HtmlPwaPlugin {
  config: ResolvedConfig,
  manifest: Option<ManifestAsset>,
}

impl HtmlPwaPlugin {
  /// Resolve `options` and precompute the manifest asset when it is served locally.
  pub fn new(options: &PwaOptions) -> Self {
    Self::from_config(resolve(options))
  }

  /// Build the plugin from an already resolved configuration.
  pub fn from_config(config: ResolvedConfig) -> Self {
    let manifest = build_manifest_asset(&config);
    match &manifest {
      Some(manifest) => debug!(
        "manifest {} prepared ({} bytes)",
        manifest.path,
        manifest.asset.size()
      ),
      None => debug!(
        "manifest {} is an absolute URL, no asset emitted",
        config.manifest_path
      ),
    }
    Self { config, manifest }
  }

  /// The resolved configuration.
  pub fn config(&self) -> &ResolvedConfig {
    &self.config
  }

  /// The manifest asset registered each compilation, if any.
  pub fn manifest_asset(&self) -> Option<&ManifestAsset> {
    self.manifest.as_ref()
  }
}

impl CompilationHooks for HtmlPwaPlugin {
  fn on_html_ready(&self, data: &mut HtmlData) {
    data.html = wrap_ie_favicon(&data.html);
  }

  fn on_head_tags_assembling(&self, data: &mut HeadTagData, public_path: &str) {
    let tags = generate_head_tags(&self.config, public_path);
    debug!("appending {} PWA head tags", tags.len());
    data.head_tags.extend(tags);
  }

  fn on_assets_finalizing(&self, assets: &mut OutputAssets) {
    if let Some(manifest) = &self.manifest {
      let asset: Arc<dyn Asset> = manifest.asset.clone();
      assets.insert(manifest.path.clone(), asset);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::TagDescriptor;

  #[test]
  fn appends_after_existing_head_tags() {
    let plugin = HtmlPwaPlugin::new(&PwaOptions::default());
    let existing = TagDescriptor::void("meta", [("charset", "utf-8")]);
    let mut data = HeadTagData {
      head_tags: vec![existing.clone()],
    };

    plugin.on_head_tags_assembling(&mut data, "/");

    assert_eq!(data.head_tags[0], existing);
    assert_eq!(data.head_tags.len(), 13);
    assert_eq!(data.head_tags[1].attribute("type"), Some("image/svg+xml"));
  }

  #[test]
  fn wraps_template_favicon() {
    let plugin = HtmlPwaPlugin::new(&PwaOptions::default());
    let mut data = HtmlData {
      html: r#"<head><link rel="icon" href="/favicon.ico"></head>"#.into(),
    };

    plugin.on_html_ready(&mut data);

    assert_eq!(
      data.html,
      r#"<head><!--[if IE]><link rel="icon" href="/favicon.ico"><![endif]--></head>"#
    );
  }

  #[test]
  fn registers_the_same_manifest_every_compilation() {
    let plugin = HtmlPwaPlugin::new(&PwaOptions {
      manifest_path: Some(Some("app.webmanifest".into())),
      ..PwaOptions::default()
    });

    let mut first = OutputAssets::new();
    let mut second = OutputAssets::new();
    plugin.on_assets_finalizing(&mut first);
    plugin.on_assets_finalizing(&mut second);

    assert_eq!(first.len(), 1);
    let a = &first["app.webmanifest"];
    let b = &second["app.webmanifest"];
    assert_eq!(a.source(), b.source());
    assert!(std::ptr::eq(a.source().as_ptr(), b.source().as_ptr()));
  }

  #[test]
  fn null_manifest_path_is_used_literally() {
    let options: PwaOptions = serde_json::from_str(r#"{"manifestPath": null}"#).unwrap();
    let plugin = HtmlPwaPlugin::new(&options);

    let mut head = HeadTagData::default();
    plugin.on_head_tags_assembling(&mut head, "/pub/");
    let mut assets = OutputAssets::new();
    plugin.on_assets_finalizing(&mut assets);

    let manifest = head
      .head_tags
      .iter()
      .find(|tag| tag.attribute("rel") == Some("manifest"))
      .unwrap();
    assert_eq!(manifest.attribute("href"), Some("/pub/null"));
    assert!(assets.contains_key("null"));
  }

  #[test]
  fn remote_manifest_registers_nothing() {
    let plugin = HtmlPwaPlugin::new(&PwaOptions {
      manifest_path: Some(Some("https://cdn.example.com/manifest.json".into())),
      ..PwaOptions::default()
    });

    let mut assets = OutputAssets::new();
    plugin.on_assets_finalizing(&mut assets);

    assert!(assets.is_empty());
    assert!(plugin.manifest_asset().is_none());
  }
}
