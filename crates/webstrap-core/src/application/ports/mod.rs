//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `webstrap-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::splice::Span;
use crate::error::WebstrapResult;

/// A file located by recursive search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `webstrap_adapters::filesystem::LocalFilesystem` (production)
/// - `webstrap_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WebstrapResult<()>;

    /// Write content to a file, overwriting without backup or merge.
    fn write_file(&self, path: &Path, content: &str) -> WebstrapResult<()>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> WebstrapResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// List a directory's immediate entries.
    fn list_dir(&self, path: &Path) -> WebstrapResult<Vec<DirEntryInfo>>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> WebstrapResult<()>;

    /// Move a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> WebstrapResult<()>;

    /// Recursively search for a file whose name contains `substring`.
    ///
    /// Depth-first, pre-order; the first match wins. Callers must ensure
    /// the substring is unambiguous within the searched subtree.
    fn find_file(&self, root: &Path, substring: &str) -> Option<FoundFile> {
        let entries = self.list_dir(root).ok()?;
        for entry in entries {
            if entry.is_dir {
                if let Some(found) = self.find_file(&entry.path, substring) {
                    return Some(found);
                }
            } else if entry.file_name.contains(substring) {
                return Some(FoundFile {
                    path: entry.path,
                    file_name: entry.file_name,
                });
            }
        }
        None
    }

    /// Whether `dir` directly contains a file whose name contains
    /// `substring` (non-recursive).
    fn file_exists_matching(&self, dir: &Path, substring: &str) -> bool {
        self.list_dir(dir)
            .map(|entries| {
                entries
                    .iter()
                    .any(|e| !e.is_dir && e.file_name.contains(substring))
            })
            .unwrap_or(false)
    }

    /// Delete the first file in `dir` whose name contains `substring`.
    /// A missing match is not an error.
    fn delete_matching(&self, dir: &Path, substring: &str) -> WebstrapResult<()> {
        let entries = self.list_dir(dir)?;
        if let Some(entry) = entries
            .iter()
            .find(|e| !e.is_dir && e.file_name.contains(substring))
        {
            self.remove_file(&entry.path)?;
        }
        Ok(())
    }
}

/// Port for subprocess execution.
///
/// The contract mirrors the pipeline's needs exactly: spawn with inherited
/// standard I/O so the user sees generator output live, resolve on exit
/// code zero, fail with a descriptive error otherwise. No two subprocesses
/// ever run concurrently.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String]) -> WebstrapResult<()>;
}

/// Port for structural anchor matching inside generated source text.
///
/// The production implementation is regex-based
/// (`webstrap_adapters::RegexAnchorMatcher`); isolating it behind this
/// trait keeps callers unaware of the matching strategy, so a real parser
/// could replace it.
pub trait AnchorMatcher: Send + Sync {
    /// Locate the first anchor occurrence for `tag`: either a self-closing
    /// `<Tag/>` or the shortest `<Tag ...>`…`</Tag>` span. Returns `None`
    /// when no (non-empty) match exists.
    fn find_anchor(&self, source: &str, tag: &str) -> Option<Span>;

    /// Wrap every anchor occurrence with `before`/`after`, treating the
    /// fragments as literal text. Returns `None` when nothing matched.
    fn wrap_all(&self, source: &str, tag: &str, before: &str, after: &str) -> Option<String>;

    /// Insert `fragment` immediately before the first `}` `)` closing pair
    ///, the tail of a `defineConfig({ ... })` call. Returns `None` when
    /// the source has no such tail.
    fn insert_before_config_tail(&self, source: &str, fragment: &str) -> Option<String>;
}
