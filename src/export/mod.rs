//! Export system for line count reports

mod console;
mod json;
mod xml;

use crate::config::{Config, OutputFormat};
use crate::core::Report;
use crate::error::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use console::ConsoleExporter;
pub use json::JsonExporter;
pub use xml::XmlExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the complete output for the given report
    fn export(&self, report: &Report, config: &Config, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
        OutputFormat::Xml => Box::new(XmlExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
