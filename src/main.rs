//! lucidshark-sloc command line entry point

use clap::Parser;
use lucidshark_sloc::cli::Cli;
use lucidshark_sloc::core::process_files;
use lucidshark_sloc::discovery::discover_inputs;
use lucidshark_sloc::export::{create_exporter, get_output_writer};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // Progress callback for logging
    let quiet = config.quiet;
    let progress = move |msg: &str| {
        if !quiet {
            eprintln!("{}", msg);
        }
    };

    // === Phase 1: File Discovery ===
    let discovery = match discover_inputs(&config, &progress) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 2: Classify Files ===
    let analysis = match process_files(&discovery.files, &config, None, progress) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 3: Export Report ===
    let exporter = create_exporter(config.output_format);
    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = exporter.export(&analysis.report, &config, &mut *writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    // === Phase 4: Exit Code ===
    if analysis.failures.is_empty() && discovery.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1) // Some files could not be read
    }
}
