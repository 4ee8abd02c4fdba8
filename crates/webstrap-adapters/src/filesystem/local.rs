//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use webstrap_core::{
    application::ports::{DirEntryInfo, Filesystem, FoundFile},
    error::WebstrapResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> WebstrapResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WebstrapResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> WebstrapResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dir(&self, path: &Path) -> WebstrapResult<Vec<DirEntryInfo>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = entry
                .file_type()
                .map_err(|e| map_io_error(&entry.path(), e, "stat entry"))?;
            result.push(DirEntryInfo {
                path: entry.path(),
                file_name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        // read_dir order is platform-dependent; make the search order
        // deterministic.
        result.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(result)
    }

    fn remove_file(&self, path: &Path) -> WebstrapResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> WebstrapResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    /// Walkdir-backed override of the default recursive search: depth-
    /// first, pre-order, first match wins, entries visited in sorted order.
    fn find_file(&self, root: &Path, substring: &str) -> Option<FoundFile> {
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if file_name.contains(substring) {
                return Some(FoundFile {
                    path: entry.into_path(),
                    file_name,
                });
            }
        }
        None
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> webstrap_core::error::WebstrapError {
    use webstrap_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
