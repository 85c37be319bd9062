//! Input discovery: turning CLI inputs into an ordered list of file paths
//!
//! Files named explicitly (on the command line or in a file list) are always
//! analyzed. Directory walks and git discovery only pick up files whose
//! extension maps to a known language.

mod git;
mod walk;

use crate::config::Config;
use crate::core::UnitFailure;
use crate::error::{Result, SlocError};
use crate::language::{resolve, UNKNOWN_LANGUAGE};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Component, Path, PathBuf};

pub use git::{discover_git_files, get_repo_root, get_tracked_files, is_git_repo};
pub use walk::walk_directory;

/// Whether a discovered path has a recognized language
pub fn is_countable(path: &str) -> bool {
    resolve(path) != UNKNOWN_LANGUAGE
}

/// Load file list from path (or stdin if "-")
pub fn load_file_list(path: &str) -> Result<Vec<String>> {
    let lines = if path == "-" {
        let stdin = std::io::stdin();
        stdin.lock().lines().collect::<std::io::Result<Vec<_>>>()?
    } else {
        let file = File::open(path).map_err(|e| SlocError::FileNotFound {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?
    };

    Ok(parse_file_list(lines))
}

fn parse_file_list(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Files found by discovery, plus entries that could not be visited
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<String>,
    pub failures: Vec<UnitFailure>,
}

/// Key under which two spellings of the same file compare equal
fn dedup_key(path: &str) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        Path::new(path)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    })
}

/// Resolve every configured input source into one list of file paths
///
/// Order: git-tracked files, then the file list, then command line inputs
/// in the order given. Repeated paths are kept once, at their first
/// position. Directory entries that cannot be read are reported as
/// failures and skipped.
pub fn discover_inputs(config: &Config, progress: &impl Fn(&str)) -> Result<Discovery> {
    let mut discovery = Discovery::default();

    if config.git_mode {
        discovery.files.extend(discover_git_files(progress)?);
    }

    if let Some(list) = &config.list_filename {
        discovery.files.extend(load_file_list(list)?);
    }

    for input in &config.inputs {
        let path = Path::new(input);
        if path.is_dir() {
            progress(&format!("Scanning directory '{}'...", input));
            let walked = walk_directory(path, config);
            for failure in &walked.failures {
                progress(&format!("Warning: {}", failure.reason));
            }
            discovery.files.extend(walked.files);
            discovery.failures.extend(walked.failures);
        } else {
            // Missing files surface later as per-file failures
            discovery.files.push(input.clone());
        }
    }

    let mut seen = HashSet::new();
    discovery.files.retain(|f| seen.insert(dedup_key(f)));

    if discovery.files.is_empty() {
        return Err(SlocError::InvalidConfig(
            "No source files found in the given inputs".to_string(),
        ));
    }

    Ok(discovery)
}
