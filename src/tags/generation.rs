//! Ordered PWA head tag emission.

use crate::models::{ResolvedConfig, TagDescriptor};
use crate::tags::href::{resolve_href, version_suffix};

/// Value written for always-emitted attributes whose configured value is `null`.
const NULL_ATTRIBUTE: &str = "null";

/// Build the PWA head tags for `config`, relative paths resolved against `public_path`.
///
/// The order is fixed: favicons, manifest, theme color, iOS metas and touch icon, Safari mask
/// icon, Windows tile metas. Disabled tags are skipped without reordering the rest.
pub fn generate_head_tags(config: &ResolvedConfig, public_path: &str) -> Vec<TagDescriptor> {
  let suffix = version_suffix(&config.assets_version);
  let resolve = |path: &str| resolve_href(public_path, path, &suffix);
  let icons = &config.icon_paths;
  let mut tags = Vec::new();

  if let Some(path) = icons.favicon_svg.as_deref() {
    let href = resolve(path);
    tags.push(tag(
      "link",
      &[
        ("rel", "icon"),
        ("type", "image/svg+xml"),
        ("href", href.as_str()),
      ],
    ));
  }
  if let Some(path) = icons.favicon32.as_deref() {
    let href = resolve(path);
    tags.push(tag(
      "link",
      &[
        ("rel", "icon"),
        ("type", "image/png"),
        ("sizes", "32x32"),
        ("href", href.as_str()),
      ],
    ));
  }
  if let Some(path) = icons.favicon16.as_deref() {
    let href = resolve(path);
    tags.push(tag(
      "link",
      &[
        ("rel", "icon"),
        ("type", "image/png"),
        ("sizes", "16x16"),
        ("href", href.as_str()),
      ],
    ));
  }

  tags.push(manifest_link(config, public_path, &suffix));

  if let Some(theme_color) = config.theme_color.as_deref() {
    tags.push(meta("theme-color", theme_color));
  }

  tags.push(meta(
    "apple-mobile-web-app-capable",
    or_null(&config.apple_mobile_web_app_capable),
  ));
  tags.push(meta(
    "apple-mobile-web-app-status-bar-style",
    or_null(&config.apple_mobile_web_app_status_bar_style),
  ));
  tags.push(meta("apple-mobile-web-app-title", or_null(&config.name)));

  if let Some(path) = icons.apple_touch_icon.as_deref() {
    let href = resolve(path);
    tags.push(tag(
      "link",
      &[("rel", "apple-touch-icon"), ("href", href.as_str())],
    ));
  }
  // `color` is written even without a theme color.
  if let Some(path) = icons.mask_icon.as_deref() {
    let href = resolve(path);
    tags.push(tag(
      "link",
      &[
        ("rel", "mask-icon"),
        ("href", href.as_str()),
        ("color", or_null(&config.theme_color)),
      ],
    ));
  }

  if let Some(path) = icons.ms_tile_image.as_deref() {
    tags.push(meta("msapplication-TileImage", &resolve(path)));
  }
  if let Some(tile_color) = config.ms_tile_color.as_deref() {
    tags.push(meta("msapplication-TileColor", tile_color));
  }

  tags
}

fn manifest_link(config: &ResolvedConfig, public_path: &str, suffix: &str) -> TagDescriptor {
  let base = config
    .manifest_public_path
    .as_deref()
    .filter(|path| !path.is_empty())
    .unwrap_or(public_path);
  let href = resolve_href(base, &config.manifest_path, suffix);

  match config
    .manifest_crossorigin
    .as_deref()
    .filter(|mode| !mode.is_empty())
  {
    Some(crossorigin) => tag(
      "link",
      &[
        ("rel", "manifest"),
        ("href", href.as_str()),
        ("crossorigin", crossorigin),
      ],
    ),
    None => tag("link", &[("rel", "manifest"), ("href", href.as_str())]),
  }
}

fn meta(name: &str, content: &str) -> TagDescriptor {
  tag("meta", &[("name", name), ("content", content)])
}

fn tag(tag_name: &str, attributes: &[(&str, &str)]) -> TagDescriptor {
  TagDescriptor::void(tag_name, attributes.iter().copied())
}

fn or_null(value: &Option<String>) -> &str {
  value.as_deref().unwrap_or(NULL_ATTRIBUTE)
}
