//! Parallel classification of input units
//!
//! Every unit is classified independently on a rayon pool. Results come
//! back in input order and are folded into a [`Report`] by [`aggregate`]
//! once all units are done.

use crate::config::Config;
use crate::core::aggregator::aggregate;
use crate::core::classifier::classify;
use crate::core::report::Report;
use crate::core::stats::FileStats;
use crate::error::{Result, SlocError};
use crate::language::resolve;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

const UTF8_BOM: char = '\u{FEFF}';

/// One decoded input unit: a file name and its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub content: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Read a file from disk and decode it as UTF-8, dropping a leading BOM
    pub fn load(path: &str) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| SlocError::FileNotFound {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let content = String::from_utf8(bytes).map_err(|_| SlocError::Decode {
            path: path.to_string(),
        })?;

        match content.strip_prefix(UTF8_BOM) {
            Some(stripped) => Ok(Self::new(path, stripped)),
            None => Ok(Self::new(path, content)),
        }
    }
}

/// A unit that could not be read or decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub path: String,
    pub reason: String,
}

/// Result of processing a list of files from disk
#[derive(Debug)]
pub struct Analysis {
    /// Report built from every successfully classified unit
    pub report: Report,
    /// Units skipped because they could not be read
    pub failures: Vec<UnitFailure>,
    /// Set when processing stopped early on request
    pub cancelled: bool,
}

enum UnitOutcome {
    Classified(FileStats),
    Failed(UnitFailure),
    Skipped,
}

/// Detect the language of `name` and classify `content` with its grammar
pub fn resolve_and_classify(name: &str, content: &str) -> FileStats {
    let language = resolve(name);
    FileStats::new(name, language, classify(content, language))
}

fn build_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| SlocError::Other(format!("Failed to create thread pool: {}", e)))
}

/// Classify already-decoded units in parallel and aggregate them
pub fn analyze_units(units: &[SourceUnit], config: &Config) -> Result<Report> {
    let pool = build_pool(config.num_threads)?;

    let files: Vec<FileStats> = pool.install(|| {
        units
            .par_iter()
            .map(|unit| resolve_and_classify(&unit.name, &unit.content))
            .collect()
    });

    Ok(aggregate(&files))
}

/// Read, classify and aggregate a list of files
///
/// Unreadable or undecodable files are reported in [`Analysis::failures`]
/// and do not stop the others. When `cancel` is set, units that have not
/// started yet are skipped.
pub fn process_files(
    file_list: &[String],
    config: &Config,
    cancel: Option<&AtomicBool>,
    progress: impl Fn(&str) + Send + Sync,
) -> Result<Analysis> {
    let limit = config.effective_files_to_check().min(file_list.len());
    let file_list = &file_list[..limit];

    progress(&format!("Classifying {} files...", file_list.len()));

    let pool = build_pool(config.num_threads)?;
    let is_cancelled = || cancel.is_some_and(|flag| flag.load(Ordering::Relaxed));

    // collect() on an indexed parallel iterator keeps input order
    let outcomes: Vec<UnitOutcome> = pool.install(|| {
        file_list
            .par_iter()
            .map(|path| {
                if is_cancelled() {
                    return UnitOutcome::Skipped;
                }
                match SourceUnit::load(path) {
                    Ok(unit) => UnitOutcome::Classified(resolve_and_classify(
                        &unit.name,
                        &unit.content,
                    )),
                    Err(e) => UnitOutcome::Failed(UnitFailure {
                        path: path.clone(),
                        reason: e.to_string(),
                    }),
                }
            })
            .collect()
    });

    let mut files = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    let mut skipped = 0usize;

    for outcome in outcomes {
        match outcome {
            UnitOutcome::Classified(stats) => files.push(stats),
            UnitOutcome::Failed(failure) => {
                progress(&format!("Warning: {}", failure.reason));
                failures.push(failure);
            }
            UnitOutcome::Skipped => skipped += 1,
        }
    }

    let cancelled = skipped > 0;
    if cancelled {
        progress(&format!("Cancelled: {} files not classified", skipped));
    }

    let report = aggregate(&files);
    progress(&format!(
        "Classified {} files, {} total lines",
        report.files_analyzed(),
        report.total.lines.total_lines
    ));

    Ok(Analysis {
        report,
        failures,
        cancelled,
    })
}
