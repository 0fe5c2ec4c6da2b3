// src/fs/memory.rs

use super::{normalize_lexically, strip_bom, FileSystem};
use crate::errors::{
    io_error_with_path, read_error_with_path, write_error_with_path, Error, Result,
};
use glob::Pattern;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

/// In-memory [`FileSystem`] with deterministic (path-sorted) listing order.
///
/// Relative paths are resolved against a fixed working directory (`/` unless
/// set with [`MemoryFileSystem::with_current_dir`]). Clones share the same
/// underlying state, so a clone can be used to inspect what a run wrote.
///
/// # Examples
///
/// ```
/// use srccombine::fs::{FileSystem, MemoryFileSystem};
/// use std::io::Write;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fs = MemoryFileSystem::new();
/// fs.add_dir("/out");
///
/// let mut writer = fs.open_write_stream(Path::new("/out/all.txt"), 1024)?;
/// writer.write_all(b"hello")?;
/// drop(writer);
///
/// assert_eq!(fs.contents("/out/all.txt").as_deref(), Some("hello"));
/// assert_eq!(fs.file_size(Path::new("/out/all.txt"))?, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<MemoryState>>,
    current_dir: PathBuf,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::with_current_dir("/")
    }

    /// Creates an empty filesystem whose relative paths resolve against `dir`.
    pub fn with_current_dir<P: AsRef<Path>>(dir: P) -> Self {
        let fs = Self {
            state: Arc::new(Mutex::new(MemoryState::default())),
            current_dir: normalize_lexically(dir.as_ref()),
        };
        fs.add_dir(fs.current_dir.clone());
        fs
    }

    /// Adds (or replaces) a file, creating its parent directories.
    pub fn add_file<P: AsRef<Path>, C: Into<Vec<u8>>>(&self, path: P, content: C) {
        let path = self.resolve(path.as_ref());
        let mut state = self.state();
        if let Some(parent) = path.parent() {
            insert_dir_chain(&mut state.dirs, parent);
        }
        state.files.insert(path, content.into());
    }

    /// Adds a directory and all of its ancestors.
    pub fn add_dir<P: AsRef<Path>>(&self, path: P) {
        let path = self.resolve(path.as_ref());
        insert_dir_chain(&mut self.state().dirs, &path);
    }

    /// Makes every later read of `path` fail with a permission error.
    pub fn mark_unreadable<P: AsRef<Path>>(&self, path: P) {
        let path = self.resolve(path.as_ref());
        self.state().unreadable.insert(path);
    }

    /// Returns the content of a file as (lossy) UTF-8, if it exists.
    pub fn contents<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        let path = self.resolve(path.as_ref());
        self.state()
            .files
            .get(&path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = self.resolve(path.as_ref());
        let state = self.state();
        state.files.contains_key(&path) || state.dirs.contains(&path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        normalize_lexically(&self.current_dir.join(path))
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn insert_dir_chain(dirs: &mut BTreeSet<PathBuf>, dir: &Path) {
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() || !dirs.insert(ancestor.to_path_buf()) {
            break;
        }
    }
}

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "no such file or directory")
}

impl FileSystem for MemoryFileSystem {
    fn list_files(&self, root: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
        let matcher = Pattern::new(pattern)
            .map_err(|e| Error::Config(format!("Invalid file pattern '{}': {}", pattern, e)))?;
        let root = self.resolve(root);
        let state = self.state();
        if !state.dirs.contains(&root) {
            return Err(io_error_with_path(not_found(), &root));
        }

        Ok(state
            .files
            .keys()
            .filter(|path| {
                if recursive {
                    path.starts_with(&root)
                } else {
                    path.parent() == Some(root.as_path())
                }
            })
            .filter(|path| {
                path.file_name()
                    .is_some_and(|name| matcher.matches(&name.to_string_lossy()))
            })
            .cloned()
            .collect())
    }

    fn read_all_text(&self, path: &Path) -> Result<String> {
        let resolved = self.resolve(path);
        let state = self.state();
        if state.unreadable.contains(&resolved) {
            return Err(read_error_with_path(
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
                path,
            ));
        }
        let bytes = state
            .files
            .get(&resolved)
            .ok_or_else(|| read_error_with_path(not_found(), path))?;
        let mut text = String::from_utf8(bytes.clone()).map_err(|e| {
            read_error_with_path(io::Error::new(io::ErrorKind::InvalidData, e), path)
        })?;
        strip_bom(&mut text);
        Ok(text)
    }

    fn open_write_stream(&self, path: &Path, _buffer_size: usize) -> Result<Box<dyn Write + Send>> {
        let resolved = self.resolve(path);
        let mut state = self.state();
        let parent_exists = resolved
            .parent()
            .is_some_and(|parent| state.dirs.contains(parent));
        if !parent_exists {
            return Err(write_error_with_path(not_found(), path));
        }
        state.files.insert(resolved.clone(), Vec::new());
        Ok(Box::new(MemoryWriter {
            state: Arc::clone(&self.state),
            path: resolved,
        }))
    }

    fn delete_if_exists(&self, path: &Path) -> Result<()> {
        let resolved = self.resolve(path);
        self.state().files.remove(&resolved);
        Ok(())
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        let resolved = self.resolve(path);
        self.state()
            .files
            .get(&resolved)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| io_error_with_path(not_found(), path))
    }

    fn directory_exists(&self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        self.state().dirs.contains(&resolved)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        Ok(self.resolve(path))
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        Ok(self.resolve(path))
    }
}

/// Appends written bytes straight into the shared file map.
struct MemoryWriter {
    state: Arc<Mutex<MemoryState>>,
    path: PathBuf,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {}", e)))?;
        let file = state
            .files
            .get_mut(&self.path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file removed while open"))?;
        file.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
