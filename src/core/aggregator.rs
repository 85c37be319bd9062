//! Folding per-file results into per-language and grand totals

use crate::core::report::Report;
use crate::core::stats::{FileStats, LanguageStats};
use std::collections::BTreeMap;

/// Group classified files by language and build the report
///
/// The grand total is the field-wise sum of the per-language entries, so it
/// does not depend on the order of `files`. `files` is copied into the
/// report in the order given.
pub fn aggregate(files: &[FileStats]) -> Report {
    let mut languages: BTreeMap<String, LanguageStats> = BTreeMap::new();

    for file in files {
        languages
            .entry(file.language.clone())
            .or_default()
            .add_file(file);
    }

    let total = languages
        .values()
        .fold(LanguageStats::default(), |acc, stats| acc + *stats);

    Report {
        languages,
        total,
        files: files.to_vec(),
    }
}
