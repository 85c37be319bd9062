//! Git-tracked file discovery

use crate::discovery::is_countable;
use crate::error::{Result, SlocError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Check if the current directory is inside a git repository
pub fn is_git_repo() -> bool {
    Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Get the root directory of the git repository
pub fn get_repo_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| SlocError::GitError(format!("Failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(SlocError::NotGitRepo);
    }

    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(PathBuf::from(root))
}

/// Get all tracked files in the repository, relative to its root
pub fn get_tracked_files() -> Result<Vec<String>> {
    let output = Command::new("git")
        .args(["ls-files", "-z", "--full-name"])
        .output()
        .map_err(|e| SlocError::GitError(format!("Failed to run git ls-files: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SlocError::GitError(format!(
            "git ls-files failed: {}",
            stderr
        )));
    }

    Ok(parse_ls_files(&String::from_utf8_lossy(&output.stdout)))
}

/// Split NUL-separated `git ls-files -z` output; paths are not C-quoted
fn parse_ls_files(stdout: &str) -> Vec<String> {
    stdout
        .split('\0')
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

/// Absolute paths of tracked files with a recognized language
fn countable_paths(repo_root: &Path, tracked: Vec<String>) -> Vec<String> {
    tracked
        .into_iter()
        .filter(|f| is_countable(f))
        .map(|f| repo_root.join(&f).to_string_lossy().to_string())
        .collect()
}

/// List every tracked source file of the current repository
///
/// Tracked files deleted from the working tree are left out.
pub fn discover_git_files(progress: &impl Fn(&str)) -> Result<Vec<String>> {
    if !is_git_repo() {
        return Err(SlocError::NotGitRepo);
    }

    let repo_root = get_repo_root()?;

    progress("Finding git-tracked files...");
    let files: Vec<String> = countable_paths(&repo_root, get_tracked_files()?)
        .into_iter()
        .filter(|f| Path::new(f).exists())
        .collect();

    progress(&format!("Found {} source files", files.len()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ls_files() {
        let files = parse_ls_files("src/main.rs\0\0README.md\0");
        assert_eq!(files, vec!["src/main.rs", "README.md"]);
    }

    #[test]
    fn test_parse_ls_files_keeps_non_ascii_paths() {
        let files = parse_ls_files("docs/résumé.md\0src/数据.py\0");
        assert_eq!(files, vec!["docs/résumé.md", "src/数据.py"]);
    }

    #[test]
    fn test_countable_paths_filters_and_joins() {
        let root = Path::new("/repo");
        let tracked = vec![
            "src/main.rs".to_string(),
            "logo.png".to_string(),
            "Makefile".to_string(),
            "web/app.TSX".to_string(),
        ];
        let paths = countable_paths(root, tracked);
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("main.rs"));
        assert!(paths[1].ends_with("app.TSX"));
        assert!(paths.iter().all(|p| p.starts_with("/repo")));
    }
}
