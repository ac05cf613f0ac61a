//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "loom", "loom-ui").ok_or(Error::ProjectDirs)
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the gallery's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/loom-ui/` or `$XDG_CONFIG_HOME/loom-ui/`
/// - **macOS**: `~/Library/Application Support/dev.loom.loom-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\loom\loom-ui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory (log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/loom-ui/`
/// - **macOS**: `~/Library/Application Support/dev.loom.loom-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\loom\loom-ui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let root = tempfile::tempdir().expect("temp dir");
        let nested = root.path().join("a").join("b");
        let created = ensure_dir(&nested).expect("created");
        assert_eq!(created, nested);
        assert!(nested.is_dir());
        // Existing directories are returned unchanged
        assert_eq!(ensure_dir(&nested).expect("exists"), nested);
    }
}
