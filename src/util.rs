// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, JSON document input, and man page rendering
// role: utilities/helpers
// inputs: Paths ("-" for stdin); clap CommandFactory
// outputs: Canonicalized paths, parsed JSON documents, man page text
// side_effects: read_json_source reads files or stdin
// errors: IO and parse errors bubble with the source path as context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::CommandFactory;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// Read a JSON document from a file, or from stdin when `source` is "-".
pub fn read_json_source(source: &Path) -> Result<serde_json::Value> {
  let data = if source == Path::new("-") {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf).context("reading JSON from stdin")?;
    buf
  } else {
    std::fs::read(source).with_context(|| format!("reading {}", source.display()))?
  };

  serde_json::from_slice(&data).with_context(|| format!("parsing JSON from {}", source.display()))
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
