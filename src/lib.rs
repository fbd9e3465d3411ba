#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod host;
pub mod manifest;
pub mod models;
pub mod plugin;
pub mod resolve;
pub mod tags;

pub use config::{IconPathOverrides, OptionsError, PwaOptions};
pub use host::{CompilationReport, StaticSite};
pub use models::{HeadTagData, HtmlData, IconPaths, ResolvedConfig, TagDescriptor};
pub use plugin::{CompilationHooks, HtmlPwaPlugin};
pub use resolve::resolve;
