//! Single-pass blank/comment/code line classification
//!
//! Each file is scanned top to bottom with one piece of state: whether the
//! scan is currently inside a block comment. Block markers are matched as
//! plain substrings of the trimmed line; string literals are not masked and
//! block comments do not nest.

use crate::core::stats::{LineCounts, LineKind};
use crate::language::{grammar_for, CommentGrammar};

/// Marker that also matches case-insensitively when followed by a space
const BATCH_REMARK: &str = "REM";

/// Stateful per-line classifier for one file
#[derive(Debug, Clone)]
pub struct LineClassifier {
    grammar: CommentGrammar,
    in_block_comment: bool,
}

impl LineClassifier {
    pub fn new(grammar: CommentGrammar) -> Self {
        Self {
            grammar,
            in_block_comment: false,
        }
    }

    /// Whether the next line starts inside an open block comment
    #[inline]
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Classify the next line of the file, updating block comment state
    pub fn classify_line(&mut self, line: &str) -> LineKind {
        let trimmed = line.trim();

        // Blank wins even inside a block comment
        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if self.is_block_comment_line(trimmed) || self.is_single_line_comment(trimmed) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    fn is_block_comment_line(&mut self, trimmed: &str) -> bool {
        let Some((start, end)) = self.grammar.block_markers() else {
            return false;
        };

        if self.in_block_comment {
            // A closing line never reopens the block, even if it contains an opener
            if trimmed.contains(end) {
                self.in_block_comment = false;
            }
            true
        } else if trimmed.contains(start) {
            self.in_block_comment = !trimmed.contains(end);
            true
        } else {
            false
        }
    }

    fn is_single_line_comment(&self, trimmed: &str) -> bool {
        let Some(marker) = self.grammar.single_line else {
            return false;
        };

        if trimmed.starts_with(marker) {
            return true;
        }

        marker == BATCH_REMARK && trimmed.to_lowercase().starts_with("rem ")
    }
}

/// Split content into source lines
///
/// A trailing newline terminates the last line instead of opening a new
/// one. Empty content still yields a single (blank) line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .strip_suffix('\n')
        .unwrap_or(content)
        .split('\n')
}

/// Classify every line of `content` using the grammar of `language`
pub fn classify(content: &str, language: &str) -> LineCounts {
    classify_with_grammar(content, grammar_for(language))
}

/// Classify every line of `content` using an explicit grammar
pub fn classify_with_grammar(content: &str, grammar: CommentGrammar) -> LineCounts {
    let mut classifier = LineClassifier::new(grammar);
    let mut counts = LineCounts::default();

    for line in split_lines(content) {
        counts.record(classifier.classify_line(line));
    }

    counts
}
