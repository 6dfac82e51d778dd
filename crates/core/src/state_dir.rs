//! Where the CLI keeps its session file and logs

use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

const STORAGE_FILE: &str = "storage.json";

/// Per-user data directory, or an explicit root
pub struct StateDir {
    data_dir: PathBuf,
}

impl StateDir {
    /// Platform data directory, `./data` when the platform has none
    pub fn new() -> Self {
        let data_dir = ProjectDirs::from("com", "sayhi", "sayhi").map_or_else(
            || {
                warn!("Failed to determine platform data directory, using ./data");
                PathBuf::from("./data")
            },
            |dirs| dirs.data_dir().to_path_buf(),
        );
        Self { data_dir }
    }

    /// Everything lives under `root/data`
    pub fn with_override(root: impl AsRef<Path>) -> Self {
        Self {
            data_dir: root.as_ref().join("data"),
        }
    }

    pub fn resolve(root: Option<PathBuf>) -> Self {
        root.map_or_else(Self::new, Self::with_override)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Key/value file backing the persisted session
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn log_path(&self, component: &str) -> PathBuf {
        self.data_dir.join(format!("{component}.log"))
    }
}

impl Default for StateDir {
    fn default() -> Self {
        Self::new()
    }
}
