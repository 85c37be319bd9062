//! Language detection and comment syntax lookup
//!
//! Both lookups are fixed, read-only tables:
//! - [`resolve`] maps a file name's extension to a language label
//! - [`grammar_for`] maps a language label to its comment markers
//!
//! Neither can fail. Unmapped extensions resolve to [`UNKNOWN_LANGUAGE`],
//! and unmapped labels get the default `//` grammar.

mod grammar;

pub use grammar::{grammar_for, CommentGrammar, DEFAULT_GRAMMAR};

/// Label used when a file's extension has no known mapping
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Resolve a file name (or path) to a language label
///
/// The extension is the text after the last `.` of the final path
/// component, lowercased. Files without a `.` have an empty extension.
pub fn resolve(file_name: &str) -> &'static str {
    label_for_extension(&extension_of(file_name))
}

/// Extract the lowercased extension from a file name or path
pub(crate) fn extension_of(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    match base.rfind('.') {
        Some(idx) => base[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

fn label_for_extension(extension: &str) -> &'static str {
    match extension {
        // Scripting
        "py" => "Python",
        "rb" => "Ruby",
        "php" => "PHP",
        "lua" => "Lua",
        "r" => "R",
        "sh" | "bash" => "Shell",
        "bat" | "cmd" => "Batch",
        // JavaScript family
        "js" => "JavaScript",
        "jsx" => "JavaScript React",
        "ts" => "TypeScript",
        "tsx" => "TypeScript React",
        "vue" => "Vue",
        // Systems and JVM
        "rs" => "Rust",
        "c" => "C",
        "h" => "C Header",
        "cpp" | "cc" | "cxx" => "C++",
        "hpp" => "C++ Header",
        "cs" => "C#",
        "go" => "Go",
        "java" => "Java",
        "kt" => "Kotlin",
        "scala" => "Scala",
        "swift" => "Swift",
        "dart" => "Dart",
        // Markup, styles and data
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "xml" => "XML",
        "md" => "Markdown",
        "json" => "JSON",
        "yml" | "yaml" => "YAML",
        "sql" => "SQL",
        _ => UNKNOWN_LANGUAGE,
    }
}
