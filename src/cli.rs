//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat, DEFAULT_EXCLUDE_DIRS};
use crate::error::{Result, SlocError};
use clap::Parser;

/// Source line counter
#[derive(Parser, Debug)]
#[command(name = "lucidshark-sloc")]
#[command(author = "Voldeq GmbH")]
#[command(version)]
#[command(
    about = "Count blank, comment and code lines per file and per language",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to analyze (default: current directory)
    #[arg(value_name = "PATH")]
    pub inputs: Vec<String>,

    /// File containing a list of source files to analyze (one per line)
    /// Use "-" to read from stdin
    #[arg(short = 'l', long = "list", value_name = "FILE_LIST")]
    pub list: Option<String>,

    /// Analyze all files tracked by git in the current repository
    #[arg(long = "git")]
    pub git: bool,

    /// Directory name to skip while walking (repeatable, replaces the defaults)
    #[arg(short = 'x', long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,

    /// Analyze only the first N files
    #[arg(short = 'n', long = "num-files", value_name = "N")]
    pub num_files: Option<usize>,

    /// Number of threads for parallel processing
    #[arg(short = 'j', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Output file for results (use "-" for stdout)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Include a per-file breakdown
    #[arg(short = 'f', long = "by-file")]
    pub by_file: bool,

    /// Suppress progress messages
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,

    /// Output in XML format
    #[arg(long = "xml")]
    pub xml: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        // Check for conflicting output format options
        if self.json && self.xml {
            return Err(SlocError::OutputFormatConflict);
        }

        if self.threads == Some(0) {
            return Err(SlocError::InvalidConfig(
                "--threads must be at least 1".to_string(),
            ));
        }

        let output_format = if self.json {
            OutputFormat::Json
        } else if self.xml {
            OutputFormat::Xml
        } else {
            OutputFormat::Console
        };

        let inputs = if self.inputs.is_empty() && self.list.is_none() && !self.git {
            vec![".".to_string()]
        } else {
            self.inputs
        };

        let exclude_dirs = if self.exclude_dirs.is_empty() {
            DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect()
        } else {
            self.exclude_dirs
        };

        Ok(Config {
            inputs,
            list_filename: self.list,
            git_mode: self.git,
            exclude_dirs,
            files_to_check: self.num_files.unwrap_or(0),
            num_threads: self.threads.unwrap_or_else(num_cpus::get),
            output_format,
            output_filename: self.output,
            by_file: self.by_file,
            quiet: self.quiet,
        })
    }
}
