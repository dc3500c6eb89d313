mod config_io;
mod csv_io;
mod excel_io;
mod json_io;

use std::path::Path;

use crate::error::ForecastError;
use crate::models::{ProjectionParameters, ProjectionResult};

pub use config_io::{read_parameters_json, read_toml, write_parameters_json, write_toml};
pub use csv_io::{result_to_csv_bytes, write_csv};
pub use excel_io::write_excel;
pub use json_io::{read_json, write_json};

/// Trait for reading projection parameters from a file.
pub trait ParameterReader {
    fn read(&self, path: &Path) -> Result<ProjectionParameters, ForecastError>;
}

/// Trait for writing a projection result to a file.
pub trait ResultWriter {
    fn write(
        &self,
        result: &ProjectionResult,
        params: &ProjectionParameters,
        path: &Path,
    ) -> Result<(), ForecastError>;
}

/// TOML parameter file format.
pub struct TomlFormat;

impl ParameterReader for TomlFormat {
    fn read(&self, path: &Path) -> Result<ProjectionParameters, ForecastError> {
        read_toml(path)
    }
}

/// CSV result format.
pub struct CsvFormat;

impl ResultWriter for CsvFormat {
    fn write(
        &self,
        result: &ProjectionResult,
        params: &ProjectionParameters,
        path: &Path,
    ) -> Result<(), ForecastError> {
        write_csv(result, params, path)
    }
}

/// JSON format, for parameters and results.
#[derive(Default)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl ParameterReader for JsonFormat {
    fn read(&self, path: &Path) -> Result<ProjectionParameters, ForecastError> {
        read_parameters_json(path)
    }
}

impl ResultWriter for JsonFormat {
    fn write(
        &self,
        result: &ProjectionResult,
        _params: &ProjectionParameters,
        path: &Path,
    ) -> Result<(), ForecastError> {
        write_json(result, path, self.pretty)
    }
}

/// Excel (.xlsx) result format.
pub struct ExcelFormat;

impl ResultWriter for ExcelFormat {
    fn write(
        &self,
        result: &ProjectionResult,
        params: &ProjectionParameters,
        path: &Path,
    ) -> Result<(), ForecastError> {
        write_excel(result, params, path)
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Pick a parameter reader from the file extension (`.toml` or `.json`).
pub fn parameter_reader_for(path: &Path) -> Result<Box<dyn ParameterReader>, ForecastError> {
    match extension(path).as_str() {
        "toml" => Ok(Box::new(TomlFormat)),
        "json" => Ok(Box::new(JsonFormat::default())),
        ext => Err(ForecastError::ParseError(format!(
            "Unsupported parameter file format: .{ext}. Use .toml or .json"
        ))),
    }
}

/// Pick a result writer from the file extension (`.csv`, `.json` or `.xlsx`).
pub fn result_writer_for(
    path: &Path,
    pretty: bool,
) -> Result<Box<dyn ResultWriter>, ForecastError> {
    match extension(path).as_str() {
        "csv" => Ok(Box::new(CsvFormat)),
        "json" => Ok(Box::new(JsonFormat { pretty })),
        "xlsx" => Ok(Box::new(ExcelFormat)),
        ext => Err(ForecastError::ParseError(format!(
            "Unsupported output format: .{ext}. Use .csv, .json, or .xlsx"
        ))),
    }
}

/// Read parameters from a `.toml` or `.json` file.
pub fn read_parameters(path: impl AsRef<Path>) -> Result<ProjectionParameters, ForecastError> {
    let path = path.as_ref();
    parameter_reader_for(path)?.read(path)
}

/// Write parameters to a `.toml` or `.json` file.
pub fn write_parameters(
    params: &ProjectionParameters,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let path = path.as_ref();
    match extension(path).as_str() {
        "toml" => write_toml(params, path),
        "json" => write_parameters_json(params, path),
        ext => Err(ForecastError::ParseError(format!(
            "Unsupported parameter file format: .{ext}. Use .toml or .json"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::project;

    #[test]
    fn test_parameters_by_extension() {
        let params = ProjectionParameters::default().with_intervention_at(7);
        let dir = tempfile::tempdir().unwrap();
        for name in ["p.toml", "p.json"] {
            let path = dir.path().join(name);
            write_parameters(&params, &path).unwrap();
            assert_eq!(read_parameters(&path).unwrap(), params);
        }
    }

    #[test]
    fn test_unsupported_parameter_extension() {
        let err = read_parameters("params.yaml").unwrap_err();
        assert!(err.to_string().contains(".yaml"));
        assert!(write_parameters(&ProjectionParameters::default(), "p.ini").is_err());
    }

    #[test]
    fn test_result_writer_trait() {
        let params = ProjectionParameters::default();
        let result = project(&params);
        let dir = tempfile::tempdir().unwrap();

        for name in ["out.csv", "out.json", "out.xlsx"] {
            let path = dir.path().join(name);
            let writer = result_writer_for(&path, true).unwrap();
            writer.write(&result, &params, &path).unwrap();
            assert!(path.exists(), "{name} not written");
        }
    }

    #[test]
    fn test_result_writer_unknown_extension() {
        assert!(result_writer_for(Path::new("out.txt"), false).is_err());
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert!(result_writer_for(Path::new("OUT.CSV"), false).is_ok());
    }

    #[test]
    fn test_json_format_default() {
        let fmt = JsonFormat::default();
        assert!(!fmt.pretty);
    }
}
