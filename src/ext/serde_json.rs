// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Read flat descriptor fields out of loosely-typed JSON input as text without panicking
// role: extension/serde_json
// outputs: FieldText trait for serde_json::Value
// invariants: No panics; missing keys and non-objects yield None; only scalar values render as text
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

/// Textual access to top-level fields of a JSON object.
pub trait FieldText {
  /// Render the field `key` as text: strings verbatim, numbers and booleans via Display.
  /// Objects, arrays, null and missing keys yield None.
  fn field_text(&self, key: &str) -> Option<String>;
}

impl FieldText for serde_json::Value {
  fn field_text(&self, key: &str) -> Option<String> {
    match self.get(key)? {
      serde_json::Value::String(s) => Some(s.clone()),
      serde_json::Value::Number(n) => Some(n.to_string()),
      serde_json::Value::Bool(b) => Some(b.to_string()),
      _ => None,
    }
  }
}
