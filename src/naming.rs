// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive the report file name from the prefix table and report descriptors
// role: naming
// inputs: Catalog prefix table, parameters JSON
// outputs: "<prefix>_<vendor_number>_<report_date>"
// side_effects: None
// invariants:
// - lookup key is report_type, report_subtype, date_type joined by '_' in that order
// - unknown key, empty prefix, or missing descriptor is InvalidParameters without violations
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use tracing::trace;

use crate::config::Catalog;
use crate::error::PrepareError;
use crate::ext::serde_json::FieldText;

const KEY_FIELDS: [&str; 3] = ["report_type", "report_subtype", "date_type"];

/// The prefix table key for `parameters`, if every descriptor is present.
pub fn prefix_key(parameters: &serde_json::Value) -> Option<String> {
  let parts = KEY_FIELDS
    .iter()
    .map(|field| parameters.field_text(field))
    .collect::<Option<Vec<String>>>()?;
  Some(parts.join("_"))
}

pub fn generate_file_name(catalog: &Catalog, parameters: &serde_json::Value) -> Result<String, PrepareError> {
  let key = prefix_key(parameters).ok_or_else(|| PrepareError::invalid_parameters(None))?;
  let prefix = catalog
    .prefix(&key)
    .filter(|p| !p.is_empty())
    .ok_or_else(|| PrepareError::invalid_parameters(None))?;
  trace!(%key, prefix, "resolved file name prefix");

  let vendor = parameters.field_text("vendor_number");
  let date = parameters.field_text("report_date");
  match (vendor, date) {
    (Some(vendor), Some(date)) => Ok(format!("{}_{}_{}", prefix, vendor, date)),
    _ => Err(PrepareError::invalid_parameters(None)),
  }
}
