// src/processing/counter.rs

/// Counts the lines of a text the way the combined-output statistics do.
///
/// An empty string has 0 lines. Any other string has one line plus one per
/// line terminator, where a terminator is `\n`, `\r\n` (counted once) or a
/// lone `\r`. A trailing terminator therefore still counts: `"a\n"` is 2 lines.
///
/// # Examples
///
/// ```
/// use srccombine::processing::count_lines;
///
/// assert_eq!(count_lines(""), 0);
/// assert_eq!(count_lines("a"), 1);
/// assert_eq!(count_lines("a\n"), 2);
/// assert_eq!(count_lines("a\r\nb"), 2);
/// assert_eq!(count_lines("a\rb"), 2);
/// ```
pub fn count_lines(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    let bytes = content.as_bytes();
    let mut lines = 1;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'\n' => lines += 1,
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => lines += 1,
            _ => {}
        }
    }
    lines
}
