//! Error types for lucidshark-sloc
//!
//! Line classification itself never fails. Errors only come from the
//! collaborators around it: reading inputs, discovering files and writing
//! the report.

use thiserror::Error;

/// Result type alias for sloc operations
pub type Result<T> = std::result::Result<T, SlocError>;

/// Error types for sloc operations
#[derive(Error, Debug)]
pub enum SlocError {
    /// File could not be opened or read
    #[error("Cannot open file '{path}': {reason}")]
    FileNotFound { path: String, reason: String },

    /// File content is not valid UTF-8 text
    #[error("Cannot decode file '{path}' as UTF-8 text")]
    Decode { path: String },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Conflicting output format options
    #[error("Output format conflict: specify only one of --json or --xml")]
    OutputFormatConflict,

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Git operation failed
    #[error("Git error: {0}")]
    GitError(String),

    /// Not inside a git repository
    #[error("Not a git repository. The --git flag requires running inside a git repository.")]
    NotGitRepo,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}
