//! Plan export as JSON, CSV, or a plain-text table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use serde::Deserialize;

use crate::plan::ProductionPlan;

/// CSV column header.
const HEADER: &str = "name,p";

/// Plan output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[{"name": ..., "p": ...}]`, the response shape of the HTTP API.
    #[default]
    Json,
    /// One `name,p` row per unit.
    Csv,
    /// Aligned table with cost and capacity columns.
    Table,
}

/// Writes a plan in the given format to any writer.
///
/// Output is deterministic for identical plans.
///
/// # Errors
///
/// Returns an `io::Error` if serialization or writing fails.
pub fn write_plan(plan: &ProductionPlan, format: OutputFormat, mut writer: impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, plan)?;
            writeln!(writer)
        }
        OutputFormat::Csv => write_csv(plan, writer),
        OutputFormat::Table => writeln!(writer, "{plan}"),
    }
}

/// Writes a plan as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(plan: &ProductionPlan, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for a in plan {
        let p = format!("{:.1}", a.p);
        wtr.write_record([a.name.as_str(), p.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a plan to a file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_plan(plan: &ProductionPlan, format: OutputFormat, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut buf = io::BufWriter::new(file);
    write_plan(plan, format, &mut buf)?;
    buf.flush()
}
