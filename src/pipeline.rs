// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Run validation, directory creation and naming in order, stopping at the first failure
// role: processing/orchestrator
// inputs: Catalog (explicit or process-wide), parameters JSON, paths JSON
// outputs: PreparedReport (file name + confirmed directories) or a single PrepareError
// side_effects: Creates directories (stage 2 only)
// invariants:
// - stage order is Validating -> EnsuringDirs -> Naming -> Done
// - a failed stage prevents every later stage; created directories are kept
// errors: First failure is returned as-is; nothing is logged above debug
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::debug;

use crate::config::Catalog;
use crate::directories::ensure_directories;
use crate::error::PrepareError;
use crate::model::{PreparedReport, ReportPaths, Stage};
use crate::naming::generate_file_name;
use crate::validate::validate;

pub fn prepare(
  catalog: &Catalog,
  parameters: &serde_json::Value,
  paths: &serde_json::Value,
) -> Result<PreparedReport, PrepareError> {
  debug!(stage = %Stage::Validating);
  validate(catalog, parameters, paths)?;
  let paths = ReportPaths::from_value(paths)?;

  debug!(stage = %Stage::EnsuringDirs, count = paths.len());
  ensure_directories(&paths)?;

  debug!(stage = %Stage::Naming);
  let file_name = generate_file_name(catalog, parameters)?;

  debug!(stage = %Stage::Done, %file_name);
  Ok(PreparedReport { file_name, paths })
}

/// Validate, create directories and return the report file name, using the process-wide catalog.
///
/// No transfer happens here; the name and directories are handed to a
/// [`ReportFetcher`](crate::fetch::ReportFetcher).
pub fn download_report_in_paths_with_parameters(
  parameters: &serde_json::Value,
  paths: &serde_json::Value,
) -> Result<String, PrepareError> {
  let catalog = Catalog::global()?;
  prepare(catalog, parameters, paths).map(|prepared| prepared.file_name)
}
