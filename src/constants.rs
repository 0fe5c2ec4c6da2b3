// src/constants.rs

/// Prefix of the header line written before every segment.
pub const SEGMENT_HEADER_PREFIX: &str = "// File: ";

/// Exclusion masks used when none are configured.
pub const DEFAULT_EXCLUDE_MASKS: [&str; 4] = ["Designer", "AssemblyInfo", "Debug", "Release"];

/// Extension searched for when none is given.
pub const DEFAULT_EXTENSION: &str = ".cs";

/// Input folder used when none is given.
pub const DEFAULT_INPUT_FOLDER: &str = ".";

/// Output file used when none is given (relative to the working directory).
pub const DEFAULT_OUTPUT_FILE: &str = "combined_source.txt";

/// Buffer size of the output stream.
pub const WRITE_BUFFER_SIZE: usize = 64 * 1024;

/// Number of cells in the progress bar.
pub const PROGRESS_BAR_WIDTH: usize = 50;
