// src/fs/real.rs

use super::{normalize_lexically, strip_bom, FileSystem};
use crate::errors::{
    io_error_with_path, read_error_with_path, write_error_with_path, Error, Result,
};
use glob::Pattern;
use ignore::WalkBuilder;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn list_files(&self, root: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
        let matcher = Pattern::new(pattern)
            .map_err(|e| Error::Config(format!("Invalid file pattern '{}': {}", pattern, e)))?;

        if !root.is_dir() {
            return Err(io_error_with_path(
                io::Error::new(io::ErrorKind::NotFound, "directory not found"),
                root,
            ));
        }

        let mut walker_builder = WalkBuilder::new(root);
        // Every file is a candidate: no .gitignore, hidden-file or VCS filtering.
        walker_builder.standard_filters(false);
        // Linked files and directories are listed under their link path; the
        // walker reports link cycles as errors instead of descending forever.
        walker_builder.follow_links(true);
        if !recursive {
            walker_builder.max_depth(Some(1));
        }
        debug!(
            "Walking '{}' for '{}' (recursive: {})",
            root.display(),
            pattern,
            recursive
        );

        let mut files = Vec::new();
        for entry_result in walker_builder.build() {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    let message = e.to_string();
                    match e.into_io_error() {
                        // Dangling symlink.
                        Some(source) if source.kind() == io::ErrorKind::NotFound => {
                            warn!("Skipping unreachable entry: {}", message);
                            continue;
                        }
                        Some(source) => return Err(io_error_with_path(source, root)),
                        // Symlink loop.
                        None => {
                            warn!("Walker error: {}", message);
                            continue;
                        }
                    }
                }
            };

            let is_file = entry.file_type().is_some_and(|ft| {
                ft.is_file() || (ft.is_symlink() && entry.path().is_file())
            });
            if !is_file {
                continue;
            }
            if matcher.matches(&entry.file_name().to_string_lossy()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_all_text(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| read_error_with_path(e, path))?;
        let mut text = String::from_utf8(bytes).map_err(|e| {
            read_error_with_path(io::Error::new(io::ErrorKind::InvalidData, e), path)
        })?;
        strip_bom(&mut text);
        Ok(text)
    }

    fn open_write_stream(&self, path: &Path, buffer_size: usize) -> Result<Box<dyn Write + Send>> {
        let file = File::create(path).map_err(|e| write_error_with_path(e, path))?;
        Ok(Box::new(BufWriter::with_capacity(buffer_size, file)))
    }

    fn delete_if_exists(&self, path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Removed existing file '{}'", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(write_error_with_path(e, path)),
        }
    }

    fn file_size(&self, path: &Path) -> Result<u64> {
        fs::metadata(path)
            .map(|metadata| metadata.len())
            .map_err(|e| io_error_with_path(e, path))
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        if let Ok(canonical) = fs::canonicalize(path) {
            return Ok(canonical);
        }
        // The leaf may not exist yet (e.g. the output file): resolve its parent instead.
        let absolute = std::path::absolute(path).map_err(|e| io_error_with_path(e, path))?;
        let absolute = normalize_lexically(&absolute);
        if let (Some(parent), Some(name)) = (absolute.parent(), absolute.file_name()) {
            if let Ok(parent) = fs::canonicalize(parent) {
                return Ok(parent.join(name));
            }
        }
        Ok(absolute)
    }

    fn absolute(&self, path: &Path) -> Result<PathBuf> {
        let absolute = std::path::absolute(path).map_err(|e| io_error_with_path(e, path))?;
        Ok(normalize_lexically(&absolute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_files_recursive_and_flat() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let sub = temp.path().join("sub");
        fs::create_dir(&sub)?;
        fs::write(temp.path().join("a.cs"), "A")?;
        fs::write(temp.path().join("notes.txt"), "N")?;
        fs::write(sub.join("b.cs"), "B")?;
        fs::write(temp.path().join(".hidden.cs"), "H")?;

        let fs_impl = RealFileSystem::new();
        let mut all = fs_impl.list_files(temp.path(), "*.cs", true)?;
        all.sort();
        let names: Vec<_> = all
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![".hidden.cs", "a.cs", "b.cs"]);

        let flat = fs_impl.list_files(temp.path(), "*.cs", false)?;
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(|p| p.parent() == Some(temp.path())));
        Ok(())
    }

    #[test]
    fn test_read_all_text_strips_bom() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bom.cs");
        fs::write(&path, b"\xEF\xBB\xBFclass X {}")?;
        assert_eq!(RealFileSystem.read_all_text(&path)?, "class X {}");
        Ok(())
    }

    #[test]
    fn test_read_all_text_rejects_invalid_utf8() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("bad.cs");
        fs::write(&path, [0x66u8, 0x80, 0x81])?;
        let err = RealFileSystem.read_all_text(&path).unwrap_err();
        match err {
            Error::Read { source, .. } => assert_eq!(source.kind(), io::ErrorKind::InvalidData),
            other => panic!("Expected Error::Read, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_delete_if_exists_is_idempotent() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("out.txt");
        fs::write(&path, "stale")?;
        RealFileSystem.delete_if_exists(&path)?;
        assert!(!path.exists());
        RealFileSystem.delete_if_exists(&path)?;
        Ok(())
    }

    #[test]
    fn test_write_stream_truncates_and_reports_size() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("out.txt");
        fs::write(&path, "old content that is longer")?;

        let mut writer = RealFileSystem.open_write_stream(&path, 16)?;
        writer.write_all(b"new")?;
        writer.flush()?;
        drop(writer);

        assert_eq!(fs::read_to_string(&path)?, "new");
        assert_eq!(RealFileSystem.file_size(&path)?, 3);
        Ok(())
    }

    #[test]
    fn test_canonicalize_missing_leaf_uses_parent() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let canonical_dir = fs::canonicalize(temp.path())?;
        let resolved = RealFileSystem.canonicalize(&temp.path().join("not_yet.txt"))?;
        assert_eq!(resolved, canonical_dir.join("not_yet.txt"));
        Ok(())
    }

    #[test]
    fn test_directory_exists() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("f.cs");
        fs::write(&file, "")?;
        assert!(RealFileSystem.directory_exists(temp.path()));
        assert!(!RealFileSystem.directory_exists(&file));
        assert!(!RealFileSystem.directory_exists(&temp.path().join("missing")));
        Ok(())
    }

    #[test]
    fn test_list_files_missing_root_fails() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let result = RealFileSystem.list_files(&temp.path().join("missing"), "*.cs", true);
        assert!(matches!(result, Err(Error::Io { .. })));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_follows_symlinks() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let src = temp.path().join("src");
        let shared = temp.path().join("shared");
        fs::create_dir(&src)?;
        fs::create_dir(&shared)?;
        fs::write(src.join("a.cs"), "A")?;
        fs::write(shared.join("Lib.cs"), "L")?;
        symlink(shared.join("Lib.cs"), src.join("Lib.cs"))?;
        symlink(&shared, src.join("linked"))?;

        let mut listed = RealFileSystem.list_files(&src, "*.cs", true)?;
        listed.sort();
        assert_eq!(
            listed,
            vec![
                src.join("Lib.cs"),
                src.join("a.cs"),
                src.join("linked").join("Lib.cs"),
            ]
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_list_files_skips_cycles_and_dangling_links() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let src = temp.path().join("src");
        fs::create_dir(&src)?;
        fs::write(src.join("a.cs"), "A")?;
        symlink(&src, src.join("again"))?;
        symlink(temp.path().join("gone.cs"), src.join("dangling.cs"))?;

        let listed = RealFileSystem.list_files(&src, "*.cs", true)?;
        assert_eq!(listed, vec![src.join("a.cs")]);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_keeps_symlinks_canonicalize_resolves_them() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let shared = temp.path().join("shared");
        fs::create_dir(&shared)?;
        fs::write(shared.join("Lib.cs"), "L")?;
        let link = temp.path().join("linked");
        symlink(&shared, &link)?;

        let through_link = link.join(".").join("Lib.cs");
        assert_eq!(
            RealFileSystem.absolute(&through_link)?,
            temp.path().join("linked").join("Lib.cs")
        );
        assert_eq!(
            RealFileSystem.canonicalize(&through_link)?,
            fs::canonicalize(shared.join("Lib.cs"))?
        );
        Ok(())
    }
}
