use std::io::Write;

use clap::ValueEnum;
use parkmeter_core::{model::MeterRecord, rate::ScheduleEntry, view::ViewRow};
use serde::{Deserialize, Serialize};

use crate::ParkmeterError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// aligned, human-readable columns
    #[default]
    Table,
    Json,
    Csv,
}

/// writes the derived view in the requested format.
pub fn write_rows<W: Write>(
    rows: &[ViewRow],
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), ParkmeterError> {
    match format {
        OutputFormat::Table => {
            writeln!(
                writer,
                "{:<10} {:<24} {:<28} {:>10} {:>10} {:<5}",
                "id", "meter", "area", "rate", "km", "card"
            )
            .map_err(output_error)?;
            for row in rows {
                let distance = row
                    .distance_km
                    .map(|d| format!("{d:.2}"))
                    .unwrap_or_else(|| String::from("-"));
                writeln!(
                    writer,
                    "{:<10} {:<24} {:<28} {:>10} {:>10} {:<5}",
                    row.id,
                    row.label,
                    row.area,
                    row.rate,
                    distance,
                    if row.accepts_card { "yes" } else { "no" }
                )
                .map_err(output_error)?;
            }
            writeln!(writer, "{} parking meters", rows.len()).map_err(output_error)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, rows)
                .map_err(|e| ParkmeterError::Output(e.to_string()))?;
            writeln!(writer).map_err(output_error)
        }
        OutputFormat::Csv => {
            // header written up front so an empty view still has a schema
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            csv_writer
                .write_record(ViewRow::COLUMNS)
                .map_err(|e| ParkmeterError::Output(e.to_string()))?;
            for row in rows {
                csv_writer
                    .serialize(row)
                    .map_err(|e| ParkmeterError::Output(e.to_string()))?;
            }
            csv_writer.flush().map_err(output_error)
        }
    }
}

/// writes a meter's weekly rate table. the active slot is marked with '*'.
pub fn write_schedule<W: Write>(
    record: &MeterRecord,
    schedule: &[ScheduleEntry],
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), ParkmeterError> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "id": record.id(),
                "label": record.label(),
                "area": record.area(),
                "operating_hours": record.operating_hours_text(),
                "rate_misc": record.rate_misc(),
                "time_misc": record.time_misc(),
                "accepts_card": record.accepts_card(),
                "schedule": schedule,
            });
            serde_json::to_writer_pretty(&mut *writer, &value)
                .map_err(|e| ParkmeterError::Output(e.to_string()))?;
            writeln!(writer).map_err(output_error)
        }
        OutputFormat::Table | OutputFormat::Csv => {
            writeln!(writer, "{} ({}) - {}", record.label(), record.id(), record.area())
                .map_err(output_error)?;
            if let Some(hours) = record.operating_hours_text() {
                writeln!(writer, "operating hours: {hours}").map_err(output_error)?;
            }
            for entry in schedule {
                writeln!(
                    writer,
                    "{} {:<9} {:<9} {:>8} {}",
                    if entry.is_active { "*" } else { " " },
                    entry.slot.day.to_string(),
                    entry.window,
                    entry.rate.to_string(),
                    entry.time_limit.as_deref().unwrap_or("-")
                )
                .map_err(output_error)?;
            }
            if let Some(misc) = record.rate_misc() {
                writeln!(writer, "rate note: {misc}").map_err(output_error)?;
            }
            if let Some(misc) = record.time_misc() {
                writeln!(writer, "time limit note: {misc}").map_err(output_error)?;
            }
            Ok(())
        }
    }
}

fn output_error(e: std::io::Error) -> ParkmeterError {
    ParkmeterError::Output(e.to_string())
}
