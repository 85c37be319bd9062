//! XML exporter

use crate::config::Config;
use crate::core::{LineCounts, Report};
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// XML output exporter
pub struct XmlExporter;

impl XmlExporter {
    /// Escape special XML characters
    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }

    fn line_attributes(lines: &LineCounts) -> String {
        format!(
            r#"BlankLines="{}" CommentLines="{}" CodeLines="{}" TotalLines="{}""#,
            lines.blank_lines, lines.comment_lines, lines.code_lines, lines.total_lines
        )
    }
}

impl Exporter for XmlExporter {
    fn export(&self, report: &Report, config: &Config, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(writer, "<sloc>")?;

        writeln!(writer, "  <languages>")?;
        for (label, stats) in report.languages_by_code() {
            writeln!(
                writer,
                r#"    <language Name="{}" FileCount="{}" {}/>"#,
                Self::escape_xml(label),
                stats.file_count,
                Self::line_attributes(&stats.lines)
            )?;
        }
        writeln!(writer, "  </languages>")?;

        if config.by_file {
            writeln!(writer, "  <files>")?;
            for file in &report.files {
                writeln!(
                    writer,
                    r#"    <file Name="{}" Language="{}" {}/>"#,
                    Self::escape_xml(&file.name),
                    Self::escape_xml(&file.language),
                    Self::line_attributes(&file.lines)
                )?;
            }
            writeln!(writer, "  </files>")?;
        }

        let total = &report.total.lines;
        writeln!(writer, "  <summary")?;
        writeln!(writer, r#"    FilesAnalyzed="{}""#, report.files_analyzed())?;
        writeln!(writer, r#"    Languages="{}""#, report.languages.len())?;
        writeln!(writer, "    {}", Self::line_attributes(total))?;
        writeln!(writer, r#"    BlankPercent="{:.1}""#, total.blank_percent())?;
        writeln!(writer, r#"    CommentPercent="{:.1}""#, total.comment_percent())?;
        writeln!(writer, r#"    CodePercent="{:.1}""#, total.code_percent())?;
        writeln!(writer, "  />")?;

        writeln!(writer, "</sloc>")?;

        Ok(())
    }
}
