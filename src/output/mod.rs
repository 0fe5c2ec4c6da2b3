// src/output/mod.rs

//! Formatting of the combined file (segments and header paths) and of the
//! report shown after a run.

pub mod formatter;
pub mod segment;
pub mod summary;

pub use formatter::relative_display_path;
pub use segment::write_segment;
pub use summary::{format_size, write_report};
