use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, ContentArrangement, Table,
};

use crate::analysis::SweepPoint;
use crate::models::{format_millions, GrowthPhase, ProjectionParameters, ProjectionResult};

const ABSENT: &str = "—";

fn cost_cell(value: i64, display: &str, over_limit: bool) -> Cell {
    let cell = Cell::new(format!("{display} ({value})"));
    if over_limit {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

/// Format the headline figures: inflexion years, limit and parameter summary.
pub fn format_headline(result: &ProjectionResult, params: &ProjectionParameters) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Forecast Summary".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!(
        "  Initial cost:        {}\n",
        format_millions(params.initial_cost.round() as i64)
    ));
    output.push_str(&format!(
        "  Economic limit:      {}\n",
        format_millions(params.economic_limit.round() as i64)
    ));
    let rates = params.growth_rates;
    output.push_str(&format!(
        "  Growth rates:        {:.1}% / {:.1}% / {:.1}%\n",
        rates.phase1, rates.phase2, rates.phase3
    ));

    let baseline = result.baseline_headline();
    let baseline = if result.baseline_inflexion_year.is_some() {
        baseline.red().bold()
    } else {
        baseline.green().bold()
    };
    output.push_str(&format!("  Baseline inflexion:  {baseline}\n"));

    if params.intervention.enabled {
        output.push_str(&format!(
            "  Re-forecast:         {} from year {}\n",
            format_millions(params.intervention.cost.round() as i64),
            params.intervention.year
        ));
        let adjusted = result.adjusted_headline();
        let adjusted = if result.adjusted_inflexion_year.is_some() {
            adjusted.red().bold()
        } else {
            adjusted.green().bold()
        };
        output.push_str(&format!("  Adjusted inflexion:  {adjusted}\n"));
    }

    output
}

/// Print the headline figures.
pub fn print_headline(result: &ProjectionResult, params: &ProjectionParameters) {
    print!("{}", format_headline(result, params));
}

/// Format the year-by-year projection table as a string.
pub fn format_projection_table(result: &ProjectionResult, params: &ProjectionParameters) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Cost Projection".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Year", "Phase", "Rate %", "Baseline", "Adjusted"]);

    for record in &result.series {
        let phase = GrowthPhase::for_year(record.year);
        let adjusted = match (record.adjusted_cost, &record.adjusted_display) {
            (Some(value), Some(display)) => {
                cost_cell(value, display, record.adjusted_over_limit)
            }
            _ => Cell::new(ABSENT),
        };
        table.add_row(vec![
            Cell::new(format!("{}", record.year)),
            Cell::new(phase.map_or_else(|| "Start".to_string(), |p| p.number().to_string())),
            Cell::new(format!(
                "{:.1}",
                params.growth_rates.rate_for_year(record.year)
            )),
            cost_cell(
                record.baseline_cost,
                &record.baseline_display,
                record.baseline_over_limit,
            ),
            adjusted,
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the projection table.
pub fn print_projection_table(result: &ProjectionResult, params: &ProjectionParameters) {
    print!("{}", format_projection_table(result, params));
}

/// Format intervention sweep results as a string.
pub fn format_sweep_table(points: &[SweepPoint]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Intervention Sweep".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Intervention Year",
            "Baseline at Year",
            "Baseline Inflexion",
            "Adjusted Inflexion",
            "Years Gained",
        ]);

    let year_or_safe = |y: Option<u32>| y.map_or_else(|| "Safe".to_string(), |y| format!("Year {y}"));

    for point in points {
        table.add_row(vec![
            Cell::new(point.intervention_year),
            Cell::new(
                point
                    .baseline_cost_at_year
                    .map_or_else(|| ABSENT.to_string(), format_millions),
            ),
            Cell::new(year_or_safe(point.baseline_inflexion_year)),
            Cell::new(year_or_safe(point.adjusted_inflexion_year)),
            Cell::new(
                point
                    .years_gained
                    .map_or_else(|| ABSENT.to_string(), |g| format!("{g:+}")),
            ),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print intervention sweep results.
pub fn print_sweep_table(points: &[SweepPoint]) {
    print!("{}", format_sweep_table(points));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{project, sweep_intervention_years};

    #[test]
    fn test_headline_baseline_only() {
        let params = ProjectionParameters::default();
        let output = format_headline(&project(&params), &params);
        assert!(output.contains("Forecast Summary"));
        assert!(output.contains("Year 6"));
        assert!(output.contains("6.50M"));
        assert!(!output.contains("Adjusted inflexion"));
    }

    #[test]
    fn test_headline_with_intervention() {
        let params = ProjectionParameters::default().with_intervention_at(5);
        let output = format_headline(&project(&params), &params);
        assert!(output.contains("Adjusted inflexion"));
        assert!(output.contains("4.00M from year 5"));
    }

    #[test]
    fn test_headline_safe() {
        let params = ProjectionParameters {
            economic_limit: 1e12,
            ..Default::default()
        };
        let output = format_headline(&project(&params), &params);
        assert!(output.contains("Safe"));
    }

    #[test]
    fn test_projection_table_headers() {
        let params = ProjectionParameters::default();
        let output = format_projection_table(&project(&params), &params);
        assert!(output.contains("Cost Projection"));
        assert!(output.contains("Year"));
        assert!(output.contains("Phase"));
        assert!(output.contains("Rate %"));
        assert!(output.contains("Baseline"));
        assert!(output.contains("Adjusted"));
    }

    #[test]
    fn test_projection_table_values() {
        let params = ProjectionParameters::default().with_intervention_at(3);
        let output = format_projection_table(&project(&params), &params);
        assert!(output.contains("2.50M"));
        assert!(output.contains("4.00M"));
        assert!(output.contains("Start"));
        assert!(output.contains(ABSENT));
    }

    #[test]
    fn test_sweep_table() {
        let params = ProjectionParameters::default();
        let points = sweep_intervention_years(&params, 1..=3);
        let output = format_sweep_table(&points);
        assert!(output.contains("Intervention Sweep"));
        assert!(output.contains("Years Gained"));
        assert!(output.contains("Year 6"));
    }

    #[test]
    fn test_sweep_table_empty() {
        let output = format_sweep_table(&[]);
        assert!(output.contains("Intervention Sweep"));
    }
}
