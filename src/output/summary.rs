// src/output/summary.rs

use crate::core_types::CombineResult;
use byte_unit::{Byte, UnitType};
use log::debug;
use std::io::{self, Write};

/// Formats a byte count with the most appropriate binary unit (e.g. `1.50 KiB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.2}", adjusted)
}

/// Writes the human-readable report of a finished combine run.
pub fn write_report(writer: &mut dyn Write, result: &CombineResult) -> io::Result<()> {
    debug!("Writing report for {:?}", result);
    writeln!(
        writer,
        "Combined {} file(s) from {} director{}.",
        result.original_file_count,
        result.directories_processed,
        if result.directories_processed == 1 { "y" } else { "ies" }
    )?;
    writeln!(writer, "  Total lines:  {}", result.total_lines)?;
    writeln!(writer, "  Output file:  {}", result.output_path)?;
    writeln!(
        writer,
        "  Output size:  {} ({} bytes)",
        format_size(result.file_size),
        result.file_size
    )?;
    writeln!(
        writer,
        "  Elapsed:      {:.3}s",
        result.processing_time.as_secs_f64()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::time::Duration;

    #[test]
    fn test_format_size_small_values_in_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_uses_binary_units() {
        assert!(format_size(2048).contains("KiB"));
        assert!(format_size(5 * 1024 * 1024).contains("MiB"));
    }

    #[test]
    fn test_report_contents() -> io::Result<()> {
        let result = CombineResult {
            total_lines: 42,
            output_path: "/tmp/all.txt".to_string(),
            file_size: 512,
            original_file_count: 3,
            directories_processed: 1,
            processing_time: Duration::from_millis(1500),
        };
        let mut writer = Cursor::new(Vec::new());
        write_report(&mut writer, &result)?;
        let report = String::from_utf8(writer.into_inner()).unwrap();

        assert!(report.starts_with("Combined 3 file(s) from 1 directory.\n"));
        assert!(report.contains("  Total lines:  42\n"));
        assert!(report.contains("  Output file:  /tmp/all.txt\n"));
        assert!(report.contains("  Output size:  512 B (512 bytes)\n"));
        assert!(report.contains("  Elapsed:      1.500s\n"));
        Ok(())
    }
}
