// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed values flowing between pipeline stages and out to the report fetcher
// role: model/types
// outputs: ReportPaths, PreparedReport, ReportFormat, Stage
// invariants: ReportPaths keeps logical names in sorted order; serialized shape is a flat name -> path object
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PrepareError;

/// Logical path name -> directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportPaths(BTreeMap<String, PathBuf>);

impl ReportPaths {
  /// Convert a validated paths document. Anything that is not an object of strings is rejected
  /// as invalid paths without violations (the schema in use allowed a shape we cannot use).
  pub fn from_value(value: &serde_json::Value) -> Result<Self, PrepareError> {
    let obj = value.as_object().ok_or_else(|| PrepareError::invalid_paths(Vec::new()))?;
    let mut map = BTreeMap::new();
    for (name, dir) in obj {
      let dir = dir.as_str().ok_or_else(|| PrepareError::invalid_paths(Vec::new()))?;
      map.insert(name.clone(), PathBuf::from(dir));
    }
    Ok(Self(map))
  }

  pub fn get(&self, name: &str) -> Option<&Path> {
    self.0.get(name).map(PathBuf::as_path)
  }

  pub fn dirs(&self) -> impl Iterator<Item = &Path> {
    self.0.values().map(PathBuf::as_path)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl<K: Into<String>, P: Into<PathBuf>> FromIterator<(K, P)> for ReportPaths {
  fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, p)| (k.into(), p.into())).collect())
  }
}

/// Output of a successful preparation: the file name plus directories known to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedReport {
  pub file_name: String,
  pub paths: ReportPaths,
}

impl PreparedReport {
  /// Where a payload of `format` belongs under the directory named `path_key`.
  pub fn target(&self, path_key: &str, format: ReportFormat) -> Option<PathBuf> {
    self
      .paths
      .get(path_key)
      .map(|dir| dir.join(format!("{}{}", self.file_name, format.extension())))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
  Text,
  Json,
}

impl ReportFormat {
  pub fn extension(self) -> &'static str {
    match self {
      ReportFormat::Text => ".txt",
      ReportFormat::Json => ".json",
    }
  }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Validating,
  EnsuringDirs,
  Naming,
  Done,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Stage::Validating => "validating",
      Stage::EnsuringDirs => "ensuring_dirs",
      Stage::Naming => "naming",
      Stage::Done => "done",
    };
    f.write_str(s)
  }
}
