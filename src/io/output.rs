use crate::core::CountReport;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &CountReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CountReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &CountReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {} files under {}",
            "Counted".green().bold(),
            report.files.len(),
            report.root.display()
        )?;
        writeln!(self.writer, "  {} {}", "line_count".cyan(), report.total.line_count)?;
        writeln!(
            self.writer,
            "  {} {}",
            "character_count".cyan(),
            report.total.character_count
        )?;
        writeln!(
            self.writer,
            "  {} {}",
            "character_without_spaces_count".cyan(),
            report.total.character_without_spaces_count
        )?;
        writeln!(self.writer, "  {} {}", "word_count".cyan(), report.total.word_count)?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    })
}
