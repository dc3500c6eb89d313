//! Re-forecast example: compare the baseline with a spliced trajectory and
//! sweep candidate intervention years.
//!
//! Run from the project root:
//!   cargo run --example reforecast

use maintenance_forecast::analysis::Forecaster;
use maintenance_forecast::models::{Intervention, ProjectionParameters};
use maintenance_forecast::visualization::{
    print_cost_chart, print_headline, print_projection_table, print_sweep_table,
};

fn main() {
    let params = ProjectionParameters {
        intervention: Intervention::enabled_at(4, 3_000_000.0),
        ..Default::default()
    };

    let forecaster = match Forecaster::checked(&params) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Invalid parameters: {e}");
            return;
        }
    };

    println!("\n=== Baseline vs Re-forecast ===");
    let result = forecaster.project();
    print_headline(&result, &params);
    print_projection_table(&result, &params);
    print_cost_chart(&result, &params);

    println!("\n=== Intervention Sweep ===");
    print_sweep_table(&forecaster.sweep(1..=24));
}
