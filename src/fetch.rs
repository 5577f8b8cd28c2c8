// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Seam between preparation and transfer: fetcher trait plus writing fetched payloads under confirmed directories
// role: persistence/report-file
// inputs: PreparedReport, path key, ReportFormat, payload bytes from a ReportFetcher
// outputs: Path of the written <file_name>.txt / <file_name>.json
// side_effects: Writes one file per call
// invariants:
// - empty payloads are never written
// - payloads only land in directories confirmed by prepare()
// errors: EmptyFile, InvalidPaths (unknown key), Fetch (fetcher failure), Io
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::PathBuf;

use tracing::debug;

use crate::config::Catalog;
use crate::error::PrepareError;
use crate::model::{PreparedReport, ReportFormat};
use crate::pipeline::prepare;

/// Performs the actual report transfer. Implemented outside this crate.
pub trait ReportFetcher {
  fn fetch(
    &self,
    parameters: &serde_json::Value,
    prepared: &PreparedReport,
    format: ReportFormat,
  ) -> anyhow::Result<Vec<u8>>;
}

pub fn save_report(
  prepared: &PreparedReport,
  path_key: &str,
  format: ReportFormat,
  payload: &[u8],
) -> Result<PathBuf, PrepareError> {
  let target = prepared
    .target(path_key, format)
    .ok_or_else(|| PrepareError::invalid_paths(Vec::new()))?;

  if payload.is_empty() {
    return Err(PrepareError::EmptyFile(target));
  }

  std::fs::write(&target, payload)?;
  debug!(path = %target.display(), bytes = payload.len(), "report written");
  Ok(target)
}

/// Prepare, hand off to `fetcher`, then save what it returned.
pub fn fetch_report<F: ReportFetcher + ?Sized>(
  catalog: &Catalog,
  parameters: &serde_json::Value,
  paths: &serde_json::Value,
  path_key: &str,
  format: ReportFormat,
  fetcher: &F,
) -> Result<PathBuf, PrepareError> {
  let prepared = prepare(catalog, parameters, paths)?;
  let payload = fetcher
    .fetch(parameters, &prepared, format)
    .map_err(PrepareError::Fetch)?;
  save_report(&prepared, path_key, format, &payload)
}
