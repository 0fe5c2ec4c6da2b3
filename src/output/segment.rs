use crate::constants::SEGMENT_HEADER_PREFIX;
use std::io::{self, Write};

/// Writes one segment: the `// File: <relative path>` header line followed by
/// the content verbatim.
///
/// A `\n` is appended only when the content does not already end with one,
/// so the next header always starts on its own line.
pub fn write_segment(writer: &mut dyn Write, relative_path: &str, content: &str) -> io::Result<()> {
    writer.write_all(SEGMENT_HEADER_PREFIX.as_bytes())?;
    writer.write_all(relative_path.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}
