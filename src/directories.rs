// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Ensure every directory named in ReportPaths exists (mkdir -p semantics)
// role: filesystem/side-effects
// inputs: ReportPaths
// outputs: Ok(()) once all directories exist
// side_effects: Creates directories; creations run in parallel on the rayon pool
// invariants:
// - idempotent: existing (or partially existing) trees are not an error
// - no rollback of directories created before a failure
// errors: The first std::io::Error observed is returned unchanged
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::model::ReportPaths;

pub fn ensure_directories(paths: &ReportPaths) -> std::io::Result<()> {
  let dirs: Vec<&Path> = paths.dirs().collect();

  dirs.par_iter().try_for_each(|dir| {
    debug!(dir = %dir.display(), "ensuring directory");
    std::fs::create_dir_all(dir)
  })
}
