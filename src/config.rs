// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Load named config documents (schemas, file name prefixes) and compile them into an immutable Catalog
// role: config/loading
// inputs: Embedded config/*.json or a config directory (SALES_REPORT_CONFIG_DIR / --config-dir)
// outputs: Catalog with compiled parameter/path validators and the prefix table
// side_effects: Reads files when loading from a directory
// invariants:
// - a Catalog is never mutated after construction
// - Catalog::global initialises at most once per process
// errors: Missing documents, bad JSON and uncompilable schemas surface as ConfigError
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::ConfigError;

pub const PARAMETERS_SCHEMA: &str = "parameters_schema";
pub const PATHS_SCHEMA: &str = "paths_schema";
pub const FILENAME_PREFIX: &str = "filename_prefix";

/// Environment variable naming a directory that overrides the embedded documents.
pub const CONFIG_DIR_ENV: &str = "SALES_REPORT_CONFIG_DIR";

const EMBEDDED: &[(&str, &str)] = &[
  (PARAMETERS_SCHEMA, include_str!("../config/parameters_schema.json")),
  (PATHS_SCHEMA, include_str!("../config/paths_schema.json")),
  (FILENAME_PREFIX, include_str!("../config/filename_prefix.json")),
];

/// Resolves config documents by name.
#[derive(Debug, Clone, Default)]
pub struct Configurator {
  dir: Option<PathBuf>,
}

impl Configurator {
  pub fn embedded() -> Self {
    Self { dir: None }
  }

  pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
    Self { dir: Some(dir.as_ref().to_path_buf()) }
  }

  /// Load `<name>.json` from the configured directory, or the embedded copy.
  pub fn load_sync(&self, name: &str) -> Result<serde_json::Value, ConfigError> {
    match &self.dir {
      Some(dir) => {
        let path = dir.join(format!("{}.json", name));
        if !path.is_file() {
          return Err(ConfigError::NotFound(path));
        }
        debug!(path = %path.display(), "loading config document");
        let data = std::fs::read(&path)?;
        Ok(serde_json::from_slice(&data)?)
      }
      None => {
        let (_, text) = EMBEDDED
          .iter()
          .find(|(n, _)| *n == name)
          .ok_or_else(|| ConfigError::NotFound(PathBuf::from(name)))?;
        Ok(serde_json::from_str(text)?)
      }
    }
  }
}

/// Immutable lookup state shared by every preparation call.
pub struct Catalog {
  parameters: jsonschema::Validator,
  paths: jsonschema::Validator,
  prefixes: BTreeMap<String, String>,
}

static GLOBAL: OnceCell<Catalog> = OnceCell::new();

impl Catalog {
  pub fn load(configurator: &Configurator) -> Result<Self, ConfigError> {
    let parameters = configurator.load_sync(PARAMETERS_SCHEMA)?;
    let paths = configurator.load_sync(PATHS_SCHEMA)?;
    let prefixes: BTreeMap<String, String> = serde_json::from_value(configurator.load_sync(FILENAME_PREFIX)?)?;
    Self::from_documents(&parameters, &paths, prefixes)
  }

  pub fn from_documents(
    parameters_schema: &serde_json::Value,
    paths_schema: &serde_json::Value,
    prefixes: BTreeMap<String, String>,
  ) -> Result<Self, ConfigError> {
    Ok(Self {
      parameters: compile(PARAMETERS_SCHEMA, parameters_schema)?,
      paths: compile(PATHS_SCHEMA, paths_schema)?,
      prefixes,
    })
  }

  /// Process-wide catalog, built on first use from `SALES_REPORT_CONFIG_DIR` or the embedded documents.
  pub fn global() -> Result<&'static Catalog, ConfigError> {
    GLOBAL.get_or_try_init(|| {
      let configurator = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Configurator::from_dir(dir),
        _ => Configurator::embedded(),
      };
      Catalog::load(&configurator)
    })
  }

  pub fn parameters_validator(&self) -> &jsonschema::Validator {
    &self.parameters
  }

  pub fn paths_validator(&self) -> &jsonschema::Validator {
    &self.paths
  }

  pub fn prefix(&self, key: &str) -> Option<&str> {
    self.prefixes.get(key).map(String::as_str)
  }
}

fn compile(name: &str, schema: &serde_json::Value) -> Result<jsonschema::Validator, ConfigError> {
  jsonschema::validator_for(schema).map_err(|e| ConfigError::Schema {
    name: name.to_string(),
    message: e.to_string(),
  })
}
