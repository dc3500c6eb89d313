//! Export example: load a parameter file and write the projection in every
//! supported format.
//!
//! Run from the project root:
//!   cargo run --example export_projection -- forecast.toml

use std::path::Path;

use maintenance_forecast::io::{self, CsvFormat, ExcelFormat, JsonFormat, ResultWriter};
use maintenance_forecast::models::ProjectionParameters;
use maintenance_forecast::project;

fn main() {
    let params = match std::env::args().nth(1) {
        Some(path) => io::read_parameters(&path).expect("Failed to read parameter file"),
        None => ProjectionParameters::default(),
    };
    let result = project(&params);

    let writers: [(&str, Box<dyn ResultWriter>); 3] = [
        ("projection.csv", Box::new(CsvFormat)),
        ("projection.json", Box::new(JsonFormat { pretty: true })),
        ("projection.xlsx", Box::new(ExcelFormat)),
    ];

    for (name, writer) in &writers {
        match writer.write(&result, &params, Path::new(name)) {
            Ok(()) => println!("Wrote {name}"),
            Err(e) => eprintln!("Failed to write {name}: {e}"),
        }
    }
}
