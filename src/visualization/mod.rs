mod charts;
mod tables;

pub use charts::{format_cost_chart, print_cost_chart};
pub use tables::{
    format_headline, format_projection_table, format_sweep_table, print_headline,
    print_projection_table, print_sweep_table,
};
