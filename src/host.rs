//! Minimal file-system host that runs one compilation against a built static site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{debug, info};

use crate::manifest::OutputAssets;
use crate::models::{HeadTagData, HtmlData, TagDescriptor};
use crate::plugin::CompilationHooks;
use crate::tags::inject_head_tags;

/// Already-built site directory whose index document receives the hooks' output.
#[derive(Debug, Clone)]
pub struct StaticSite {
  out_dir: PathBuf,
  index_html: PathBuf,
  public_path: String,
}

/// Outcome of a single [`StaticSite::compile`] run.
#[derive(Debug, Clone, Default)]
pub struct CompilationReport {
  /// Head tags injected into the index document, in order.
  pub head_tags: Vec<TagDescriptor>,
  /// Files written for registered output assets.
  pub written_assets: Vec<PathBuf>,
}

impl StaticSite {
  /// Site rooted at `out_dir`, served from `/` with an `index.html` entry point.
  pub fn new(out_dir: impl Into<PathBuf>) -> Self {
    Self {
      out_dir: out_dir.into(),
      index_html: PathBuf::from("index.html"),
      public_path: "/".into(),
    }
  }

  /// Use a different HTML file, relative to the output directory.
  pub fn with_index_html(mut self, index_html: impl Into<PathBuf>) -> Self {
    self.index_html = index_html.into();
    self
  }

  /// URL prefix the output directory is served under.
  pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
    self.public_path = public_path.into();
    self
  }

  /// Output directory.
  pub fn out_dir(&self) -> &Path {
    &self.out_dir
  }

  /// Run the hooks once: assemble head tags, patch the template and inject the tags, then
  /// write every registered asset and finally the HTML back to the output directory.
  ///
  /// Fails without writing anything when the HTML has no `</head>` to inject into.
  pub fn compile<H: CompilationHooks + ?Sized>(&self, hooks: &H) -> Result<CompilationReport> {
    let index_path = self.out_dir.join(&self.index_html);
    let html = fs::read_to_string(&index_path)
      .with_context(|| format!("failed to read {}", index_path.display()))?;

    let mut head = HeadTagData::default();
    hooks.on_head_tags_assembling(&mut head, &self.public_path);

    let mut data = HtmlData { html };
    hooks.on_html_ready(&mut data);
    let Some(html) = inject_head_tags(&data.html, &head.head_tags) else {
      bail!("no </head> in {}", index_path.display());
    };

    let mut assets = OutputAssets::new();
    hooks.on_assets_finalizing(&mut assets);

    let mut written_assets = Vec::with_capacity(assets.len());
    for (relative, asset) in &assets {
      let target = self.out_dir.join(relative.trim_start_matches('/'));
      if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      fs::write(&target, asset.source())
        .with_context(|| format!("failed to write {}", target.display()))?;
      debug!("wrote {} ({} bytes)", target.display(), asset.size());
      written_assets.push(target);
    }

    fs::write(&index_path, html)
      .with_context(|| format!("failed to write {}", index_path.display()))?;
    info!(
      "injected {} head tags into {}",
      head.head_tags.len(),
      index_path.display()
    );

    Ok(CompilationReport {
      head_tags: head.head_tags,
      written_assets,
    })
  }
}
