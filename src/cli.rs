// src/cli.rs

use clap::{ArgAction, Parser};

/// Combines every source file of one extension under a folder into a single file.
///
/// srccombine walks the input folder recursively, skips files whose full path
/// contains any exclusion mask, and writes each remaining file into the output
/// preceded by a `// File: <relative path>` header line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Folder to scan (used when --input is not given).
    #[arg(value_name = "FOLDER")]
    pub folder: Option<String>,

    /// Folder to scan recursively [default: current directory].
    #[arg(short = 'i', long = "input", value_name = "FOLDER")]
    pub input: Option<String>,

    /// File to write the combined output to [default: combined_source.txt].
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Extension of the files to combine, with or without the dot [default: .cs].
    #[arg(short = 'e', long = "extension", value_name = "EXT")]
    pub extension: Option<String>,

    /// Comma-separated substrings; files whose full path contains one are skipped
    /// [default: Designer,AssemblyInfo,Debug,Release]. Pass "" to disable.
    #[arg(short = 'x', long = "exclude", value_name = "MASKS")]
    pub exclude: Option<String>,

    /// Sort files by path instead of using filesystem enumeration order.
    #[arg(short = 's', long, action = ArgAction::SetTrue)]
    pub sort: bool,

    /// Do not display the progress bar.
    #[arg(short = 'q', long, action = ArgAction::SetTrue)]
    pub quiet: bool,

    /// Print help.
    #[arg(short = '?', long = "help", short_alias = 'h', action = ArgAction::Help)]
    #[allow(dead_code)] // Consumed by clap, never read.
    help: Option<bool>,
}
