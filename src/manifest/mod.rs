//! Web app manifest construction and the output asset that carries it.

mod asset;
mod document;

pub use asset::{Asset, ManifestAsset, OutputAssets, RawAsset, build_manifest_asset};
pub use document::{build_manifest_document, default_manifest};
