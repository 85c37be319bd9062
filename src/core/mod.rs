//! Core line classification and aggregation

pub mod aggregator;
pub mod classifier;
pub mod processor;
pub mod report;
pub mod stats;

pub use aggregator::aggregate;
pub use classifier::{classify, classify_with_grammar, split_lines, LineClassifier};
pub use processor::{
    analyze_units, process_files, resolve_and_classify, Analysis, SourceUnit, UnitFailure,
};
pub use report::Report;
pub use stats::{FileStats, LanguageStats, LineCounts, LineKind};
