// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Check parameters and paths documents against the catalog schemas
// role: validation
// inputs: Catalog, parameters JSON, paths JSON
// outputs: Ok(()) or InvalidParameters / InvalidPaths with every violation found in that document
// side_effects: None
// invariants:
// - parameters are checked first; when they fail, paths are never checked
// - violations are listed in validator order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::debug;

use crate::config::Catalog;
use crate::error::{PrepareError, Violation};

pub fn validate(
  catalog: &Catalog,
  parameters: &serde_json::Value,
  paths: &serde_json::Value,
) -> Result<(), PrepareError> {
  if let Some(violations) = violations_of(catalog.parameters_validator(), parameters) {
    debug!(count = violations.len(), "parameters rejected by schema");
    return Err(PrepareError::invalid_parameters(Some(violations)));
  }

  if let Some(violations) = violations_of(catalog.paths_validator(), paths) {
    debug!(count = violations.len(), "paths rejected by schema");
    return Err(PrepareError::invalid_paths(violations));
  }

  Ok(())
}

/// All violations of `instance`, or None when it is valid.
fn violations_of(validator: &jsonschema::Validator, instance: &serde_json::Value) -> Option<Vec<Violation>> {
  let violations: Vec<Violation> = validator.iter_errors(instance).map(Violation::from).collect();
  if violations.is_empty() {
    None
  } else {
    Some(violations)
  }
}
