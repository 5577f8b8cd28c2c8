// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Error taxonomy for report preparation and configuration loading
// role: errors/types
// outputs: PrepareError, ConfigError, Violation
// invariants:
// - InvalidParameters carries violations only when raised by schema validation
// - Io wraps the filesystem error verbatim (transparent Display and source)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PARAMETERS_MESSAGE: &str = "Please enter all the required parameters. For help, please download the latest User Guide from the Sales and Trends module in iTunes Connect.";
pub const PATHS_MESSAGE: &str = "Please enter all the required path parameters.";

/// One schema violation, flattened from the validator's error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
  /// JSON pointer into the validated document ("" for the root).
  pub instance_path: String,
  /// JSON pointer into the schema keyword that rejected it.
  pub schema_path: String,
  pub message: String,
}

impl<'a> From<jsonschema::ValidationError<'a>> for Violation {
  fn from(err: jsonschema::ValidationError<'a>) -> Self {
    Violation {
      instance_path: err.instance_path.to_string(),
      schema_path: err.schema_path.to_string(),
      message: err.to_string(),
    }
  }
}

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("reading config document: {0}")]
  Io(#[from] std::io::Error),

  #[error("parsing config document: {0}")]
  Json(#[from] serde_json::Error),

  #[error("compiling schema {name}: {message}")]
  Schema { name: String, message: String },

  #[error("config document not found: {}", .0.display())]
  NotFound(PathBuf),
}

#[derive(Error, Debug)]
pub enum PrepareError {
  #[error("{message}")]
  InvalidParameters {
    message: &'static str,
    violations: Option<Vec<Violation>>,
  },

  #[error("{message}")]
  InvalidPaths {
    message: &'static str,
    violations: Vec<Violation>,
  },

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error("report payload for {} is empty", .0.display())]
  EmptyFile(PathBuf),

  #[error("fetching report failed: {0:#}")]
  Fetch(anyhow::Error),

  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl PrepareError {
  pub fn invalid_parameters(violations: Option<Vec<Violation>>) -> Self {
    PrepareError::InvalidParameters { message: PARAMETERS_MESSAGE, violations }
  }

  pub fn invalid_paths(violations: Vec<Violation>) -> Self {
    PrepareError::InvalidPaths { message: PATHS_MESSAGE, violations }
  }

  /// Schema violations attached to this error, if any.
  pub fn violations(&self) -> &[Violation] {
    match self {
      PrepareError::InvalidParameters { violations: Some(v), .. } => v,
      PrepareError::InvalidPaths { violations, .. } => violations,
      _ => &[],
    }
  }
}
