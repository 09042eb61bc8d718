//! Locating runtime data files (currently just `text.toml`).

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::info;

/// Environment variable that overrides where runtime data files are looked up.
pub const DATA_DIR_ENV: &str = "CASTLE_DATA_DIR";

const ENGINE_DATA: &str = "castle_engine/data";

/// Data directory picked on first use.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let candidates = candidate_roots(env::var_os(DATA_DIR_ENV).map(PathBuf::from), exe_dir.as_deref());
    let root = candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(ENGINE_DATA));
    info!("data directory: {}", root.display());
    root
});

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Directories to try, best first: the override, the workspace layouts, then next to the binary.
fn candidate_roots(override_dir: Option<PathBuf>, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = override_dir.into_iter().collect();
    candidates.push(PathBuf::from(ENGINE_DATA));
    candidates.push(PathBuf::from("data"));

    if let Some(dir) = exe_dir {
        candidates.push(dir.join(ENGINE_DATA));
        candidates.push(dir.join("data"));
        // target/<profile>/castle -> look beside target/ as well
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join(ENGINE_DATA));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_comes_first() {
        let roots = candidate_roots(Some(PathBuf::from("/opt/castle")), None);
        assert_eq!(roots[0], PathBuf::from("/opt/castle"));
        assert_eq!(roots.len(), 3);
    }

    #[test]
    fn exe_relative_candidates_follow_workspace_ones() {
        let roots = candidate_roots(None, Some(Path::new("/build/target/debug")));
        assert_eq!(roots[0], PathBuf::from(ENGINE_DATA));
        assert!(roots.contains(&PathBuf::from("/build/target/debug/data")));
        assert!(roots.contains(&PathBuf::from("/build/target/castle_engine/data")));
    }
}
