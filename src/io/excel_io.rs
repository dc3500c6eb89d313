use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::error::ForecastError;
use crate::models::{GrowthPhase, ProjectionParameters, ProjectionResult};

const PROJECTION_HEADERS: [&str; 5] = [
    "year",
    "phase",
    "rate_percent",
    "baseline_cost",
    "adjusted_cost",
];

fn write_projection_sheet(
    worksheet: &mut Worksheet,
    result: &ProjectionResult,
    params: &ProjectionParameters,
) -> Result<(), ForecastError> {
    let bold = Format::new().set_bold();
    for (col, header) in PROJECTION_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (idx, record) in result.series.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_number(row, 0, record.year as f64)?;
        if let Some(phase) = GrowthPhase::for_year(record.year) {
            worksheet.write_number(row, 1, phase.number() as f64)?;
        }
        worksheet.write_number(row, 2, params.growth_rates.rate_for_year(record.year))?;
        worksheet.write_number(row, 3, record.baseline_cost as f64)?;
        if let Some(adjusted) = record.adjusted_cost {
            worksheet.write_number(row, 4, adjusted as f64)?;
        }
    }
    Ok(())
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    result: &ProjectionResult,
    params: &ProjectionParameters,
) -> Result<(), ForecastError> {
    let numbers = [
        ("initial_cost", params.initial_cost),
        ("economic_limit", params.economic_limit),
        ("phase1_rate", params.growth_rates.phase1),
        ("phase2_rate", params.growth_rates.phase2),
        ("phase3_rate", params.growth_rates.phase3),
    ];
    let mut row: u32 = 0;
    for (label, value) in numbers {
        worksheet.write_string(row, 0, label)?;
        worksheet.write_number(row, 1, value)?;
        row += 1;
    }

    worksheet.write_string(row, 0, "intervention_enabled")?;
    worksheet.write_boolean(row, 1, params.intervention.enabled)?;
    row += 1;
    if params.intervention.enabled {
        worksheet.write_string(row, 0, "intervention_year")?;
        worksheet.write_number(row, 1, params.intervention.year as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "intervention_cost")?;
        worksheet.write_number(row, 1, params.intervention.cost)?;
        row += 1;
    }

    worksheet.write_string(row, 0, "baseline_inflexion")?;
    worksheet.write_string(row, 1, result.baseline_headline())?;
    row += 1;
    if params.intervention.enabled {
        worksheet.write_string(row, 0, "adjusted_inflexion")?;
        worksheet.write_string(row, 1, result.adjusted_headline())?;
    }
    Ok(())
}

/// Write a projection to an Excel workbook with a "Projection" and a "Summary" sheet.
pub fn write_excel(
    result: &ProjectionResult,
    params: &ProjectionParameters,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let mut workbook = Workbook::new();

    let projection = workbook.add_worksheet();
    projection.set_name("Projection")?;
    write_projection_sheet(projection, result, params)?;

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")?;
    write_summary_sheet(summary, result, params)?;

    workbook.save(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), "wrote projection workbook");
    Ok(())
}
