//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use webstrap_core::{
    application::{ApplicationError, ports::{DirEntryInfo, Filesystem}},
    error::WebstrapResult,
};

/// In-memory filesystem for testing.
///
/// Backed by ordered maps so directory listings (and therefore recursive
/// searches) are deterministic.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_error(path: &Path) -> webstrap_core::error::WebstrapError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "memory filesystem lock poisoned".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> WebstrapResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> WebstrapResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> WebstrapResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn list_dir(&self, path: &Path) -> WebstrapResult<Vec<DirEntryInfo>> {
        let inner = self.inner.read().map_err(|_| lock_error(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such directory".into(),
            }
            .into());
        }

        let mut entries = Vec::new();
        for dir in &inner.directories {
            if dir.parent() == Some(path) {
                entries.push(DirEntryInfo {
                    path: dir.clone(),
                    file_name: dir
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    is_dir: true,
                });
            }
        }
        for file in inner.files.keys() {
            if file.parent() == Some(path) {
                entries.push(DirEntryInfo {
                    path: file.clone(),
                    file_name: file
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    is_dir: false,
                });
            }
        }
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> WebstrapResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        inner.files.remove(path).map(|_| ()).ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> WebstrapResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(from))?;

        if inner.directories.contains(from) {
            // Re-key the whole subtree.
            let moved_dirs: Vec<PathBuf> = inner
                .directories
                .iter()
                .filter(|d| d.starts_with(from))
                .cloned()
                .collect();
            for dir in moved_dirs {
                inner.directories.remove(&dir);
                let relocated = to.join(dir.strip_prefix(from).unwrap_or(&dir));
                inner.directories.insert(relocated);
            }

            let moved_files: Vec<PathBuf> = inner
                .files
                .keys()
                .filter(|f| f.starts_with(from))
                .cloned()
                .collect();
            for file in moved_files {
                if let Some(content) = inner.files.remove(&file) {
                    let relocated = to.join(file.strip_prefix(from).unwrap_or(&file));
                    inner.files.insert(relocated, content);
                }
            }
            return Ok(());
        }

        match inner.files.remove(from) {
            Some(content) => {
                inner.files.insert(to.to_path_buf(), content);
                Ok(())
            }
            None => Err(ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file or directory".into(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fs_with(paths: &[(&str, &str)]) -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        for (path, content) in paths {
            let path = Path::new(path);
            fs.create_dir_all(path.parent().unwrap()).unwrap();
            fs.write_file(path, content).unwrap();
        }
        fs
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(fs.write_file(Path::new("a/b.txt"), "x").is_ok());
    }

    #[test]
    fn find_file_is_preorder_first_match() {
        let fs = fs_with(&[
            ("proj/src/components/App.tsx", "component"),
            ("proj/src/main.tsx", "entry"),
        ]);
        let found = fs.find_file(Path::new("proj/src"), "App").unwrap();
        assert_eq!(found.file_name, "App.tsx");
    }

    #[test]
    fn file_exists_matching_is_not_recursive() {
        let fs = fs_with(&[("proj/src/vite.config.ts", "")]);
        assert!(!fs.file_exists_matching(Path::new("proj"), "vite.config"));
        assert!(fs.file_exists_matching(Path::new("proj/src"), "vite.config"));
    }

    #[test]
    fn rename_moves_directories_with_contents() {
        let fs = fs_with(&[("app/page.tsx", ""), ("app/nested/inner.tsx", "")]);
        fs.create_dir_all(Path::new("app/[lang]")).unwrap();
        fs.rename(Path::new("app/nested"), Path::new("app/[lang]/nested"))
            .unwrap();

        assert!(fs.read_file(Path::new("app/[lang]/nested/inner.tsx")).is_some());
        assert!(fs.read_file(Path::new("app/nested/inner.tsx")).is_none());
    }
}
