//! Comment syntax per language

/// Comment markers for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentGrammar {
    /// Marker that turns a line into a comment when the trimmed line starts with it
    pub single_line: Option<&'static str>,
    /// Block comment opener, only used together with `block_end`
    pub block_start: Option<&'static str>,
    /// Block comment closer, only used together with `block_start`
    pub block_end: Option<&'static str>,
}

/// Grammar for any language without its own table entry
pub const DEFAULT_GRAMMAR: CommentGrammar = CommentGrammar::line("//");

const C_STYLE: CommentGrammar = CommentGrammar::full("//", "/*", "*/");
const HASH: CommentGrammar = CommentGrammar::line("#");
const MARKUP: CommentGrammar = CommentGrammar::block("<!--", "-->");

impl CommentGrammar {
    const fn line(marker: &'static str) -> Self {
        Self {
            single_line: Some(marker),
            block_start: None,
            block_end: None,
        }
    }

    const fn block(start: &'static str, end: &'static str) -> Self {
        Self {
            single_line: None,
            block_start: Some(start),
            block_end: Some(end),
        }
    }

    const fn full(marker: &'static str, start: &'static str, end: &'static str) -> Self {
        Self {
            single_line: Some(marker),
            block_start: Some(start),
            block_end: Some(end),
        }
    }

    const fn none() -> Self {
        Self {
            single_line: None,
            block_start: None,
            block_end: None,
        }
    }

    /// Block markers, only when both halves are defined
    pub fn block_markers(&self) -> Option<(&'static str, &'static str)> {
        match (self.block_start, self.block_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Look up the comment grammar for a language label
pub fn grammar_for(language: &str) -> CommentGrammar {
    match language {
        "Rust" | "JavaScript" | "JavaScript React" | "TypeScript" | "TypeScript React"
        | "Java" | "C" | "C++" | "C Header" | "C++ Header" | "C#" | "Go" | "PHP" | "Swift"
        | "Kotlin" | "Scala" | "Dart" | "SCSS" => C_STYLE,
        "CSS" => CommentGrammar::block("/*", "*/"),
        "HTML" | "XML" | "Vue" | "Markdown" => MARKUP,
        "Python" | "Shell" | "YAML" | "R" => HASH,
        "Ruby" => CommentGrammar::full("#", "=begin", "=end"),
        "SQL" => CommentGrammar::full("--", "/*", "*/"),
        "Lua" => CommentGrammar::full("--", "--[[", "]]"),
        "Batch" => CommentGrammar::line("REM"),
        "JSON" => CommentGrammar::none(),
        _ => DEFAULT_GRAMMAR,
    }
}
