//! CSV export of projection tables

use std::io::Write;

use crate::error::Result;
use crate::projection::{AmortizationEntry, BankComparisonEntry, CalculationResult, SeriesPoint};

/// Write an amortization schedule, one row per period
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &[AmortizationEntry]) -> Result<()> {
    write_rows(writer, schedule)
}

/// Write a time series, one row per sampled step
pub fn write_series_csv<W: Write>(writer: W, series: &[SeriesPoint]) -> Result<()> {
    write_rows(writer, series)
}

/// Write a bank comparison table in input order
pub fn write_comparison_csv<W: Write>(writer: W, entries: &[BankComparisonEntry]) -> Result<()> {
    write_rows(writer, entries)
}

/// Write the most detailed table a result carries: the schedule for loans,
/// otherwise the time series
pub fn write_result_csv<W: Write>(writer: W, result: &CalculationResult) -> Result<()> {
    match &result.amortization_schedule {
        Some(schedule) => write_schedule_csv(writer, schedule),
        None => write_series_csv(writer, &result.time_series),
    }
}

fn write_rows<W: Write, T: serde::Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
