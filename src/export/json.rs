//! JSON exporter

use crate::config::Config;
use crate::core::{FileStats, LanguageStats, Report};
use crate::error::{Result, SlocError};
use crate::export::Exporter;
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    languages: Vec<JsonLanguage<'a>>,
    total: &'a LanguageStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileStats]>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonLanguage<'a> {
    language: &'a str,
    #[serde(flatten)]
    stats: &'a LanguageStats,
}

#[derive(Serialize)]
struct JsonSummary {
    files_analyzed: usize,
    languages: usize,
    total_lines: usize,
    blank_percent: f64,
    comment_percent: f64,
    code_percent: f64,
}

impl Exporter for JsonExporter {
    fn export(&self, report: &Report, config: &Config, writer: &mut dyn Write) -> Result<()> {
        let languages = report
            .languages_by_code()
            .into_iter()
            .map(|(language, stats)| JsonLanguage { language, stats })
            .collect();

        let total = &report.total.lines;
        let output = JsonOutput {
            languages,
            total: &report.total,
            files: config.by_file.then_some(report.files.as_slice()),
            summary: JsonSummary {
                files_analyzed: report.files_analyzed(),
                languages: report.languages.len(),
                total_lines: total.total_lines,
                blank_percent: total.blank_percent(),
                comment_percent: total.comment_percent(),
                code_percent: total.code_percent(),
            },
        };

        let json =
            serde_json::to_string_pretty(&output).map_err(|e| SlocError::Other(e.to_string()))?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
