// Report persistence: CSV (the canonical output) and JSON behind one trait.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::ReportRow;

/// Report output format, selected by the `--format` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => anyhow::bail!("unknown report format '{other}' (expected 'csv' or 'json')"),
        }
    }
}

/// Serializes the final report table to persistent storage.
pub trait ReportWriter {
    fn write(&self, rows: &[ReportRow]) -> Result<()>;

    /// Human-readable destination, for the completion message.
    fn destination(&self) -> String;
}

/// Create the writer for the chosen format.
pub fn create_writer(format: ReportFormat, path: &Path) -> Box<dyn ReportWriter> {
    match format {
        ReportFormat::Csv => Box::new(CsvReportWriter::new(path)),
        ReportFormat::Json => Box::new(JsonReportWriter::new(path)),
    }
}

/// Writes the report as CSV with the column order fixed by [`ReportRow`]:
/// company_a_name, company_b_name, company_a_id, company_b_id, pair_counts.
/// Absent names become empty fields.
pub struct CsvReportWriter {
    path: PathBuf,
}

impl CsvReportWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportWriter for CsvReportWriter {
    fn write(&self, rows: &[ReportRow]) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("failed to create report file {}", self.path.display()))?;
        if rows.is_empty() {
            // serialize() only emits headers alongside the first record, so an
            // empty report needs them written explicitly.
            writer.write_record([
                "company_a_name",
                "company_b_name",
                "company_a_id",
                "company_b_id",
                "pair_counts",
            ])?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer
            .flush()
            .with_context(|| format!("failed to write report to {}", self.path.display()))?;
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the report as a pretty-printed JSON array; absent names serialize
/// as null.
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportWriter for JsonReportWriter {
    fn write(&self, rows: &[ReportRow]) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let file = File::create(&self.path)
            .with_context(|| format!("failed to create report file {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, rows)
            .with_context(|| format!("failed to write report to {}", self.path.display()))?;
        Ok(())
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
    }
    Ok(())
}
