//! Filesystem gateway used by the build pipeline.
//!
//! The pipeline only sees the [`FileSystem`] trait so tests can swap in
//! alternative implementations; [`OsFileSystem`] is the real one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::paths;

/// Checks and mutations the pipeline needs from the filesystem.
///
/// Checks never fail; they answer `false` when the path cannot be inspected.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_executable(&self, path: &Path) -> bool;

    /// Create a single directory level with the given mode.
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Set permission bits on an existing path.
    fn set_permissions(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Recursively list regular files under `root` whose name ends in
    /// `.<extension>`. An empty result is not an error.
    fn list_files_by_extension(&self, root: &Path, extension: &str) -> Vec<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs` and `walkdir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::metadata(path)
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[cfg(unix)]
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::DirBuilderExt;

        fs::DirBuilder::new().mode(mode).create(path)
    }

    #[cfg(not(unix))]
    fn create_dir(&self, path: &Path, _mode: u32) -> io::Result<()> {
        fs::DirBuilder::new().create(path)
    }

    #[cfg(unix)]
    fn set_permissions(&self, path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    fn set_permissions(&self, path: &Path, _mode: u32) -> io::Result<()> {
        fs::metadata(path).map(|_| ())
    }

    fn list_files_by_extension(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();
        // Sorting by name keeps the order stable from one run to the next.
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {e}", root.display());
                    continue;
                }
            };
            if entry.file_type().is_file() && paths::has_extension(entry.path(), extension) {
                files.push(entry.into_path());
            }
        }
        files
    }
}
