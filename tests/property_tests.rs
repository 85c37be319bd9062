//! Property tests for classification and aggregation

use lucidshark_sloc::core::classify;
use lucidshark_sloc::{aggregate, resolve_and_classify, FileStats, LineCounts};
use proptest::prelude::*;

const FILE_NAMES: [&str; 10] = [
    "main.rs", "app.js", "style.css", "page.html", "run.bat", "db.sql", "init.lua",
    "model.rb", "conf.yaml", "data.xyz",
];

/// Lines biased towards comment markers so the state machine gets exercised
fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("<!-- x -->".to_string()),
        Just("--[[".to_string()),
        Just("]]".to_string()),
        Just("=begin".to_string()),
        Just("=end".to_string()),
        Just("// note".to_string()),
        Just("# note".to_string()),
        Just("REM note".to_string()),
        Just("rem note".to_string()),
        "[ a-z=;(){}*/#<!>-]{0,12}",
    ]
}

fn source_text() -> impl Strategy<Value = String> {
    (prop::collection::vec(source_line(), 0..20), any::<bool>()).prop_map(|(lines, trailing)| {
        let mut text = lines.join("\n");
        if trailing {
            text.push('\n');
        }
        text
    })
}

fn file_stats() -> impl Strategy<Value = FileStats> {
    (prop::sample::select(FILE_NAMES.to_vec()), source_text())
        .prop_map(|(name, content)| resolve_and_classify(name, &content))
}

proptest! {
    #[test]
    fn line_kinds_sum_to_total(content in source_text(), name in prop::sample::select(FILE_NAMES.to_vec())) {
        let stats = resolve_and_classify(name, &content);
        let lines = stats.lines;
        prop_assert_eq!(lines.blank_lines + lines.comment_lines + lines.code_lines, lines.total_lines);
        prop_assert!(lines.total_lines >= 1);
    }

    #[test]
    fn classification_is_idempotent(content in source_text(), name in prop::sample::select(FILE_NAMES.to_vec())) {
        prop_assert_eq!(resolve_and_classify(name, &content), resolve_and_classify(name, &content));
    }

    #[test]
    fn arbitrary_text_never_panics(content in ".*") {
        let lines = classify(&content, "C++");
        prop_assert_eq!(lines.blank_lines + lines.comment_lines + lines.code_lines, lines.total_lines);
    }

    #[test]
    fn totals_match_languages_and_files(files in prop::collection::vec(file_stats(), 0..12)) {
        let report = aggregate(&files);

        let from_languages: LineCounts = report.languages.values().map(|s| s.lines).sum();
        let from_files: LineCounts = report.files.iter().map(|f| f.lines).sum();
        let file_count: usize = report.languages.values().map(|s| s.file_count).sum();

        prop_assert_eq!(report.total.lines, from_languages);
        prop_assert_eq!(report.total.lines, from_files);
        prop_assert_eq!(report.total.file_count, file_count);
        prop_assert_eq!(file_count, files.len());
    }

    #[test]
    fn aggregation_is_order_invariant(
        (files, shuffled) in prop::collection::vec(file_stats(), 0..12)
            .prop_flat_map(|files| {
                let shuffled = Just(files.clone()).prop_shuffle();
                (Just(files), shuffled)
            })
    ) {
        let original = aggregate(&files);
        let permuted = aggregate(&shuffled);
        prop_assert_eq!(original.languages, permuted.languages);
        prop_assert_eq!(original.total, permuted.total);
    }
}
