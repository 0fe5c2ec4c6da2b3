//! Filesystem capability consumed by discovery and the combiner.
//!
//! All filesystem access of a combine run goes through the [`FileSystem`]
//! trait so that the pipeline can run against the real disk
//! ([`RealFileSystem`]) or an in-memory fake ([`MemoryFileSystem`]).

use crate::errors::Result;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

mod memory;
mod real;

pub use memory::MemoryFileSystem;
pub use real::RealFileSystem;

/// Abstract filesystem operations needed by a combine run.
///
/// # Examples
///
/// ```
/// use srccombine::fs::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// # fn main() -> srccombine::errors::Result<()> {
/// let fs = MemoryFileSystem::new();
/// fs.add_file("/work/src/App.cs", "class App {}");
///
/// let listed = fs.list_files(Path::new("/work"), "*.cs", true)?;
/// assert_eq!(listed.len(), 1);
/// assert_eq!(fs.read_all_text(&listed[0])?, "class App {}");
/// # Ok(())
/// # }
/// ```
pub trait FileSystem: Send + Sync {
    /// Lists files under `root` whose file name matches the glob `pattern`.
    fn list_files(&self, root: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>>;
    /// Reads a whole file as UTF-8 text.
    fn read_all_text(&self, path: &Path) -> Result<String>;
    /// Creates `path` for writing, truncating existing content.
    fn open_write_stream(&self, path: &Path, buffer_size: usize) -> Result<Box<dyn Write + Send>>;
    /// Removes `path`; succeeds when nothing is there.
    fn delete_if_exists(&self, path: &Path) -> Result<()>;
    /// Size of the file at `path` in bytes.
    fn file_size(&self, path: &Path) -> Result<u64>;
    fn directory_exists(&self, path: &Path) -> bool;
    /// Absolute form of `path` with symlinks resolved. The final component does
    /// not need to exist, so output files can be resolved before they are created.
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;
    /// Absolute form of `path` with `.` and `..` removed lexically. Symlinks are
    /// kept as they appear, so the result stays under the directory it was found in.
    fn absolute(&self, path: &Path) -> Result<PathBuf>;
}

/// Drops a leading UTF-8 byte-order mark; text reads never return one.
pub(crate) fn strip_bom(text: &mut String) {
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
}

/// Resolves `.` and `..` components without touching the filesystem.
///
/// A `..` at the root is dropped.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() && !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
