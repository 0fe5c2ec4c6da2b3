// src/discovery/filter.rs

use glob::Pattern;
use std::path::Path;

/// Builds the file-name glob (`*<extension>`) for an extension.
///
/// Glob metacharacters inside the extension are escaped so they match literally.
pub fn file_pattern(extension: &str) -> String {
    format!("*{}", Pattern::escape(extension))
}

/// Returns `true` if `full_path` is the output file itself.
///
/// Both paths must already be canonical.
pub fn is_output_file(full_path: &Path, output_path: &Path) -> bool {
    full_path == output_path
}

/// Returns the first mask contained in `full_path`, if any.
///
/// This is a plain, case-sensitive substring test on the whole path, so the
/// mask `Debug` also drops `src/DebugHelpers.cs` and files under `bin/Debug/`.
///
/// # Examples
///
/// ```
/// use srccombine::discovery::matching_mask;
/// use std::path::Path;
///
/// let masks = vec!["Designer".to_string(), "obj".to_string()];
/// assert_eq!(
///     matching_mask(Path::new("/w/Form1.Designer.cs"), &masks),
///     Some("Designer")
/// );
/// assert_eq!(matching_mask(Path::new("/w/Form1.cs"), &masks), None);
/// assert_eq!(matching_mask(Path::new("/w/designer.cs"), &masks), None);
/// ```
pub fn matching_mask<'a>(full_path: &Path, masks: &'a [String]) -> Option<&'a str> {
    let path_str = full_path.to_string_lossy();
    masks
        .iter()
        .find(|mask| path_str.contains(mask.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_pattern_escapes_metacharacters() {
        assert_eq!(file_pattern(".cs"), "*.cs");
        let pattern = Pattern::new(&file_pattern(".[x]")).unwrap();
        assert!(pattern.matches("a.[x]"));
        assert!(!pattern.matches("a.x"));
    }

    #[test]
    fn test_mask_matches_directory_components_too() {
        let masks = vec!["Release".to_string()];
        assert_eq!(
            matching_mask(Path::new("/w/bin/Release/Gen.cs"), &masks),
            Some("Release")
        );
    }

    #[test]
    fn test_no_masks_never_matches() {
        assert_eq!(matching_mask(Path::new("/w/Debug/a.cs"), &[]), None);
    }

    #[test]
    fn test_is_output_file() {
        assert!(is_output_file(Path::new("/w/all.cs"), Path::new("/w/all.cs")));
        assert!(!is_output_file(Path::new("/w/sub/all.cs"), Path::new("/w/all.cs")));
    }
}
