use colored::Colorize;

use crate::models::{format_millions, ProjectionParameters, ProjectionResult};

const BAR_WIDTH: usize = 50;
const LIMIT_MARK: char = '│';
const BASELINE_FILL: char = '█';
const ADJUSTED_FILL: char = '░';

fn scaled(value: f64, scale: f64) -> usize {
    if scale <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / scale) * BAR_WIDTH as f64)
        .round()
        .min(BAR_WIDTH as f64) as usize
}

fn bar(value: i64, scale: f64, limit_pos: usize, fill: char) -> String {
    let len = scaled(value as f64, scale);
    (0..=BAR_WIDTH)
        .map(|i| {
            if i == limit_pos {
                LIMIT_MARK
            } else if i < len {
                fill
            } else {
                ' '
            }
        })
        .collect()
}

/// Format a text chart of both trajectories with the economic limit drawn as
/// a vertical rule and the intervention point marked with `◆`.
pub fn format_cost_chart(result: &ProjectionResult, params: &ProjectionParameters) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Cost Trajectories".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(BAR_WIDTH + 24)));

    if result.series.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let scale = (result.peak_cost() as f64).max(params.economic_limit);
    let limit_pos = scaled(params.economic_limit, scale);
    let intervention_year = params
        .intervention
        .enabled
        .then_some(i64::from(params.intervention.year));

    for record in &result.series {
        let marker = if intervention_year == Some(i64::from(record.year)) {
            '◆'
        } else {
            ' '
        };
        let line = bar(record.baseline_cost, scale, limit_pos, BASELINE_FILL);
        let line = if record.baseline_over_limit {
            line.red()
        } else {
            line.green()
        };
        output.push_str(&format!(
            "{marker} {:>4}  {:>9}  {line}\n",
            record.year, record.baseline_display
        ));

        if let (Some(adjusted), Some(display)) = (record.adjusted_cost, &record.adjusted_display) {
            let line = bar(adjusted, scale, limit_pos, ADJUSTED_FILL);
            output.push_str(&format!("        {:>9}  {}\n", display, line.cyan()));
        }
    }

    output.push_str(&format!(
        "\n  {BASELINE_FILL} baseline  {ADJUSTED_FILL} adjusted  {LIMIT_MARK} limit {}",
        format_millions(params.economic_limit.round() as i64)
    ));
    if params.intervention.enabled {
        output.push_str(&format!(
            "  ◆ re-forecast {} at year {}",
            format_millions(params.intervention.cost.round() as i64),
            params.intervention.year
        ));
    }
    output.push('\n');
    output
}

/// Print the trajectory chart.
pub fn print_cost_chart(result: &ProjectionResult, params: &ProjectionParameters) {
    print!("{}", format_cost_chart(result, params));
}
