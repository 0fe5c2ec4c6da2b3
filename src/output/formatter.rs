// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use std::path::{Path, MAIN_SEPARATOR_STR};

/// Formats `full_path` relative to `input_root` for a segment header.
///
/// Components are joined with the platform's native separator (`\` on
/// Windows, `/` elsewhere), whatever separator the paths were built with.
/// Both paths should be absolute and normalized the same way. Matching is per
/// component, so a root of `/work` never strips the front of `/workspace/a.cs`.
/// If `full_path` is not under `input_root` the full path is returned.
///
/// # Examples
/// ```
/// use srccombine::output::formatter::relative_display_path;
/// use std::path::{Path, MAIN_SEPARATOR};
///
/// let shown = relative_display_path(Path::new("/work/sub/b.cs"), Path::new("/work"));
/// assert_eq!(shown, format!("sub{}b.cs", MAIN_SEPARATOR));
/// ```
pub fn relative_display_path(full_path: &Path, input_root: &Path) -> String {
    let relative = match full_path.strip_prefix(input_root) {
        Ok(relative) => relative,
        Err(_) => {
            log::warn!(
                "'{}' is not under '{}', showing the full path",
                full_path.display(),
                input_root.display()
            );
            return full_path.to_string_lossy().into_owned();
        }
    };
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(MAIN_SEPARATOR_STR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_directly_under_root() {
        assert_eq!(
            relative_display_path(Path::new("/work/a.cs"), Path::new("/work")),
            "a.cs"
        );
    }

    #[test]
    fn test_nested_file_uses_native_separator() {
        let expected = ["deep", "er", "c.cs"].join(MAIN_SEPARATOR_STR);
        assert_eq!(
            relative_display_path(Path::new("/work/deep/er/c.cs"), Path::new("/work")),
            expected
        );
    }

    #[test]
    fn test_root_with_trailing_separator() {
        assert_eq!(
            relative_display_path(Path::new("/work/a.cs"), Path::new("/work/")),
            "a.cs"
        );
    }

    #[test]
    fn test_sibling_prefix_is_not_stripped() {
        let shown = relative_display_path(Path::new("/workspace/a.cs"), Path::new("/work"));
        assert_eq!(shown, Path::new("/workspace/a.cs").to_string_lossy());
    }
}
