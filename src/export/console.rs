//! Console (human-readable) exporter

use crate::config::Config;
use crate::core::{LineCounts, Report};
use crate::error::Result;
use crate::export::Exporter;
use std::io::Write;

/// Human-readable console output exporter
pub struct ConsoleExporter;

const NUM_WIDTH: usize = 10;

impl ConsoleExporter {
    fn write_rule(writer: &mut dyn Write, width: usize) -> Result<()> {
        writeln!(writer, "{}", "-".repeat(width))?;
        Ok(())
    }

    fn write_counts(writer: &mut dyn Write, lines: &LineCounts) -> Result<()> {
        writeln!(
            writer,
            " {:>w$} {:>w$} {:>w$} {:>w$}",
            lines.blank_lines,
            lines.comment_lines,
            lines.code_lines,
            lines.total_lines,
            w = NUM_WIDTH
        )?;
        Ok(())
    }

    fn write_language_table(report: &Report, writer: &mut dyn Write) -> Result<()> {
        let label_width = report
            .languages
            .keys()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max("Language".len());
        let width = label_width + 5 * (NUM_WIDTH + 1);

        writeln!(
            writer,
            "{:<lw$} {:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
            "Language",
            "Files",
            "Blank",
            "Comment",
            "Code",
            "Total",
            lw = label_width,
            w = NUM_WIDTH
        )?;
        Self::write_rule(writer, width)?;

        for (label, stats) in report.languages_by_code() {
            write!(
                writer,
                "{:<lw$} {:>w$}",
                label,
                stats.file_count,
                lw = label_width,
                w = NUM_WIDTH
            )?;
            Self::write_counts(writer, &stats.lines)?;
        }

        Self::write_rule(writer, width)?;
        write!(
            writer,
            "{:<lw$} {:>w$}",
            "Total",
            report.total.file_count,
            lw = label_width,
            w = NUM_WIDTH
        )?;
        Self::write_counts(writer, &report.total.lines)?;
        Ok(())
    }

    fn write_file_table(report: &Report, writer: &mut dyn Write) -> Result<()> {
        let name_width = report
            .files
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("File".len());
        let lang_width = report
            .files
            .iter()
            .map(|f| f.language.chars().count())
            .max()
            .unwrap_or(0)
            .max("Language".len());

        writeln!(
            writer,
            "{:<nw$} {:<lw$} {:>w$} {:>w$} {:>w$} {:>w$}",
            "File",
            "Language",
            "Blank",
            "Comment",
            "Code",
            "Total",
            nw = name_width,
            lw = lang_width,
            w = NUM_WIDTH
        )?;
        Self::write_rule(writer, name_width + lang_width + 1 + 4 * (NUM_WIDTH + 1))?;

        for file in &report.files {
            write!(
                writer,
                "{:<nw$} {:<lw$}",
                file.name,
                file.language,
                nw = name_width,
                lw = lang_width
            )?;
            Self::write_counts(writer, &file.lines)?;
        }
        Ok(())
    }
}

impl Exporter for ConsoleExporter {
    fn export(&self, report: &Report, config: &Config, writer: &mut dyn Write) -> Result<()> {
        Self::write_language_table(report, writer)?;
        writeln!(writer)?;

        if config.by_file {
            Self::write_file_table(report, writer)?;
            writeln!(writer)?;
        }

        let total = &report.total.lines;
        writeln!(writer, "Summary:")?;
        writeln!(writer, "  Files analyzed: {}", report.files_analyzed())?;
        writeln!(writer, "  Languages: {}", report.languages.len())?;
        writeln!(writer, "  Total lines: {}", total.total_lines)?;
        writeln!(
            writer,
            "  Blank lines: {} ({:.1}%)",
            total.blank_lines,
            total.blank_percent()
        )?;
        writeln!(
            writer,
            "  Comment lines: {} ({:.1}%)",
            total.comment_lines,
            total.comment_percent()
        )?;
        writeln!(
            writer,
            "  Code lines: {} ({:.1}%)",
            total.code_lines,
            total.code_percent()
        )?;

        Ok(())
    }
}
