//! Analysis report consumed by the exporters

use crate::core::stats::{FileStats, LanguageStats};
use serde::Serialize;
use std::collections::BTreeMap;

/// Full result of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Per-language totals, keyed by language label
    pub languages: BTreeMap<String, LanguageStats>,
    /// Sum over all languages
    pub total: LanguageStats,
    /// Per-file results in input order
    pub files: Vec<FileStats>,
}

impl Report {
    /// Number of files that contributed to the report
    #[inline]
    pub fn files_analyzed(&self) -> usize {
        self.total.file_count
    }

    /// Language rows ordered by code lines (descending), then label
    pub fn languages_by_code(&self) -> Vec<(&str, &LanguageStats)> {
        let mut rows: Vec<_> = self
            .languages
            .iter()
            .map(|(label, stats)| (label.as_str(), stats))
            .collect();

        rows.sort_by(|a, b| {
            b.1.lines
                .code_lines
                .cmp(&a.1.lines.code_lines)
                .then_with(|| a.0.cmp(b.0))
        });
        rows
    }

    /// Stats for one language label, if any file had it
    pub fn language(&self, label: &str) -> Option<&LanguageStats> {
        self.languages.get(label)
    }
}
