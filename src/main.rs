use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use pwa_head::{HtmlPwaPlugin, PwaOptions, StaticSite};

/// Add PWA head tags and a web app manifest to a built site.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
  /// Build output directory containing the HTML entry point
  #[arg(short = 'd', long = "out-dir")]
  out_dir: PathBuf,

  /// HTML file to patch, relative to the output directory
  #[arg(long, default_value = "index.html")]
  index: PathBuf,

  /// URL prefix the output directory is served under
  #[arg(short = 'p', long = "public-path", default_value = "/")]
  public_path: String,

  /// Path to a JSON options file. Defaults to ./pwa.config.json when present
  #[arg(short = 'c', long = "config")]
  config_file: Option<PathBuf>,

  /// Print the resolved configuration as JSON and exit
  #[arg(long)]
  print_config: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .init();

  let options = match &cli.config_file {
    Some(path) => {
      info!("Loading options from {}", path.display());
      PwaOptions::from_path(path)?
    }
    None => {
      let cwd = std::env::current_dir().context("failed to determine current directory")?;
      PwaOptions::discover(&cwd)?
    }
  };

  let plugin = HtmlPwaPlugin::new(&options);
  if cli.print_config {
    println!("{}", serde_json::to_string_pretty(plugin.config())?);
    return Ok(());
  }

  let report = StaticSite::new(&cli.out_dir)
    .with_index_html(&cli.index)
    .with_public_path(cli.public_path)
    .compile(&plugin)?;

  for path in &report.written_assets {
    info!("Wrote {}", path.display());
  }
  Ok(())
}
