//! Line count statistics per file and per language

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Category assigned to a single source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Blank/comment/code counters
///
/// [`LineCounts::record`] and addition keep `total_lines` equal to the sum
/// of the other three. Code that sets the fields directly must keep it so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub total_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub code_lines: usize,
}

impl LineCounts {
    /// Count one more line of the given kind
    pub fn record(&mut self, kind: LineKind) {
        self.total_lines += 1;
        match kind {
            LineKind::Blank => self.blank_lines += 1,
            LineKind::Comment => self.comment_lines += 1,
            LineKind::Code => self.code_lines += 1,
        }
    }

    /// Share of blank lines, in percent of all lines
    pub fn blank_percent(&self) -> f64 {
        self.percent(self.blank_lines)
    }

    /// Share of comment lines, in percent of all lines
    pub fn comment_percent(&self) -> f64 {
        self.percent(self.comment_lines)
    }

    /// Share of code lines, in percent of all lines
    pub fn code_percent(&self) -> f64 {
        self.percent(self.code_lines)
    }

    fn percent(&self, part: usize) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (part as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl Add for LineCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total_lines: self.total_lines + other.total_lines,
            blank_lines: self.blank_lines + other.blank_lines,
            comment_lines: self.comment_lines + other.comment_lines,
            code_lines: self.code_lines + other.code_lines,
        }
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for LineCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}

/// Classification result for one input unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// File name or path as given by the caller
    pub name: String,
    /// Detected language label
    pub language: String,
    #[serde(flatten)]
    pub lines: LineCounts,
}

impl FileStats {
    pub fn new(name: impl Into<String>, language: impl Into<String>, lines: LineCounts) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            lines,
        }
    }
}

/// Accumulated counts for every file of one language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub file_count: usize,
    #[serde(flatten)]
    pub lines: LineCounts,
}

impl LanguageStats {
    /// Fold one classified file into these stats
    pub fn add_file(&mut self, file: &FileStats) {
        self.file_count += 1;
        self.lines += file.lines;
    }
}

impl Add for LanguageStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            lines: self.lines + other.lines,
        }
    }
}

impl AddAssign for LanguageStats {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn counts(blank: usize, comment: usize, code: usize) -> LineCounts {
        LineCounts {
            total_lines: blank + comment + code,
            blank_lines: blank,
            comment_lines: comment,
            code_lines: code,
        }
    }

    #[test]
    fn test_record_keeps_total_in_sync() {
        let mut c = LineCounts::default();
        c.record(LineKind::Blank);
        c.record(LineKind::Code);
        c.record(LineKind::Code);
        c.record(LineKind::Comment);
        assert_eq!(c, counts(1, 1, 2));
    }

    #[test]
    fn test_add_and_sum() {
        let a = counts(1, 2, 3);
        let b = counts(4, 0, 1);
        assert_eq!(a + b, counts(5, 2, 4));

        let total: LineCounts = vec![a, b, LineCounts::default()].into_iter().sum();
        assert_eq!(total, counts(5, 2, 4));
    }

    #[test]
    fn test_percentages() {
        let c = counts(1, 1, 2);
        assert_eq!(c.blank_percent(), 25.0);
        assert_eq!(c.comment_percent(), 25.0);
        assert_eq!(c.code_percent(), 50.0);
    }

    #[test]
    fn test_percentages_of_empty_counts() {
        let c = LineCounts::default();
        assert_eq!(c.code_percent(), 0.0);
        assert_eq!(c.blank_percent(), 0.0);
    }

    #[test]
    fn test_language_stats_add_file() {
        let mut stats = LanguageStats::default();
        stats.add_file(&FileStats::new("a.rs", "Rust", counts(1, 0, 2)));
        stats.add_file(&FileStats::new("b.rs", "Rust", counts(0, 3, 1)));
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.lines, counts(1, 3, 3));
    }

    #[test]
    fn test_file_stats_serializes_flat() {
        let file = FileStats::new("a.rs", "Rust", counts(1, 0, 2));
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["name"], "a.rs");
        assert_eq!(json["total_lines"], 3);
        assert_eq!(json["code_lines"], 2);
        assert!(json.get("lines").is_none());
    }
}
