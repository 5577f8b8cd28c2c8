use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "sales-report-prep",
    version,
    about = "Validate sales report parameters and paths, create the directories, print the report file name",
    long_about = None
)]
pub struct Cli {
  /// JSON file with report parameters ("-" reads stdin)
  #[arg(long)]
  pub parameters: Option<PathBuf>,

  /// JSON file mapping logical path names to directories ("-" reads stdin)
  #[arg(long)]
  pub paths: Option<PathBuf>,

  /// Directory holding parameters_schema.json, paths_schema.json and filename_prefix.json
  /// (default: built-in documents)
  #[arg(long, env = "SALES_REPORT_CONFIG_DIR")]
  pub config_dir: Option<PathBuf>,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Debug)]
pub struct EffectiveConfig {
  pub parameters: serde_json::Value,
  pub paths: serde_json::Value,
  pub config_dir: Option<String>, // absolute path for stability
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let (parameters, paths) = match (&cli.parameters, &cli.paths) {
    (Some(p), Some(d)) => (p, d),
    _ => bail!("Provide both --parameters and --paths"),
  };

  let stdin = Path::new("-");
  if parameters.as_path() == stdin && paths.as_path() == stdin {
    bail!("Only one of --parameters / --paths may read stdin");
  }

  Ok(EffectiveConfig {
    parameters: util::read_json_source(parameters)?,
    paths: util::read_json_source(paths)?,
    config_dir: cli.config_dir.as_deref().map(util::canonicalize_lossy),
  })
}
