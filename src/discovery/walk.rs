//! Recursive directory walking

use crate::config::Config;
use crate::core::UnitFailure;
use crate::discovery::{is_countable, Discovery};
use crate::error::SlocError;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_pruned(entry: &DirEntry, config: &Config) -> bool {
    if is_hidden(entry) {
        return true;
    }
    entry.file_type().is_dir()
        && entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded_dir(name))
}

/// Collect every countable file below `root`, sorted by path
///
/// Hidden entries and excluded directories are not descended into.
/// Entries that cannot be read are recorded as failures and the walk
/// carries on with the rest of the tree.
pub fn walk_directory(root: &Path, config: &Config) -> Discovery {
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                let reason = SlocError::FileNotFound {
                    path: path.clone(),
                    reason: e.to_string(),
                };
                discovery.failures.push(UnitFailure {
                    path,
                    reason: reason.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path().to_string_lossy().to_string();
        if is_countable(&path) {
            discovery.files.push(path);
        }
    }

    discovery
}
