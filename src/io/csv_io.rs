use std::path::Path;

use crate::error::ForecastError;
use crate::models::{GrowthPhase, ProjectionParameters, ProjectionResult, YearRecord};

/// CSV row structure for one projected year.
#[derive(Debug, serde::Serialize)]
struct ProjectionRow {
    year: u32,
    phase: Option<u8>,
    rate_percent: f64,
    baseline_cost: i64,
    adjusted_cost: Option<i64>,
}

impl ProjectionRow {
    fn from_record(record: &YearRecord, params: &ProjectionParameters) -> Self {
        Self {
            year: record.year,
            phase: GrowthPhase::for_year(record.year).map(GrowthPhase::number),
            rate_percent: params.growth_rates.rate_for_year(record.year),
            baseline_cost: record.baseline_cost,
            adjusted_cost: record.adjusted_cost,
        }
    }
}

fn write_rows<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    result: &ProjectionResult,
    params: &ProjectionParameters,
) -> Result<(), ForecastError> {
    for record in &result.series {
        wtr.serialize(ProjectionRow::from_record(record, params))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a projected series to a CSV file, one row per year.
pub fn write_csv(
    result: &ProjectionResult,
    params: &ProjectionParameters,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    write_rows(&mut wtr, result, params)?;
    tracing::info!(path = %path.as_ref().display(), "wrote projection CSV");
    Ok(())
}

/// Serialize a projected series to CSV bytes.
pub fn result_to_csv_bytes(
    result: &ProjectionResult,
    params: &ProjectionParameters,
) -> Result<Vec<u8>, ForecastError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr, result, params)?;
    wtr.into_inner()
        .map_err(|e| ForecastError::Io(std::io::Error::other(e.to_string())))
}
