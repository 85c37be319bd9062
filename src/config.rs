//! Configuration types for lucidshark-sloc

/// Output format for the line count report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console table
    #[default]
    Console,
    /// JSON output with structured data
    Json,
    /// XML output for tool integration
    Xml,
}

/// Directories skipped while walking input folders
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// Configuration options for a counting run
#[derive(Debug, Clone)]
pub struct Config {
    /// Files or directories to analyze
    pub inputs: Vec<String>,

    /// Path to input file list (or "-" for stdin)
    pub list_filename: Option<String>,

    /// Use `git ls-files` to discover files
    pub git_mode: bool,

    /// Directory names skipped during directory walks
    pub exclude_dirs: Vec<String>,

    /// Maximum number of files to analyze (0 = all files)
    pub files_to_check: usize,

    /// Number of threads for parallel processing (default: num_cpus)
    pub num_threads: usize,

    /// Output format (console, json, or xml)
    pub output_format: OutputFormat,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,

    /// Include the per-file breakdown in the output
    pub by_file: bool,

    /// Suppress progress messages on stderr
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            list_filename: None,
            git_mode: false,
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
            files_to_check: 0,
            num_threads: num_cpus::get(),
            output_format: OutputFormat::Console,
            output_filename: String::from("-"),
            by_file: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Returns the effective number of files to check
    /// If files_to_check is 0, returns usize::MAX (all files)
    pub fn effective_files_to_check(&self) -> usize {
        if self.files_to_check == 0 {
            usize::MAX
        } else {
            self.files_to_check
        }
    }

    /// Whether a directory name is excluded from walking
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|d| d == name)
    }
}
