// src/main.rs

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use srccombine::cli::Cli;
use srccombine::config::ConfigBuilder;
use srccombine::fs::RealFileSystem;
use srccombine::output::write_report;
#[cfg(feature = "progress")]
use srccombine::progress::IndicatifProgress;
use srccombine::progress::ProgressReporter;
use srccombine::run;
use std::io::{self, Write};
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "srccombine=debug".parse()?
                } else {
                    "srccombine=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting srccombine v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            // Only the headline; clap appends usage and a --help hint.
            let rendered = e.to_string();
            let headline = rendered.lines().next().unwrap_or_default();
            fail(headline.trim_start_matches("error: "))
        }
    };

    // Show a progress bar only if stderr is a TTY and it was not silenced.
    let progress_reporter: Option<Arc<dyn ProgressReporter>> = {
        #[cfg(feature = "progress")]
        {
            if !cli.quiet && atty::is(atty::Stream::Stderr) {
                Some(Arc::new(IndicatifProgress::new()))
            } else {
                None
            }
        }
        #[cfg(not(feature = "progress"))]
        {
            None
        }
    };

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => fail(&e.to_string()),
    };
    log::debug!("Configuration built successfully.");

    match run(&config, &RealFileSystem, progress_reporter) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            write_report(&mut stdout, &result)?;
            stdout.flush()?;
            Ok(())
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Reports a fatal error on stdout and exits with status 1.
fn fail(message: &str) -> ! {
    println!("Error: {}", message);
    std::process::exit(1);
}
