use thiserror::Error;

/// Errors raised by the host layers around the projection engine.
///
/// The engine itself is total and never returns one of these; they come from
/// parameter files, validation at the host boundary and result export.
#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ForecastError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ForecastError::Excel(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ForecastError::from(io_err);
        let msg = err.to_string();
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_excel_error_display() {
        let err = ForecastError::Excel("bad sheet".to_string());
        assert_eq!(err.to_string(), "Excel error: bad sheet");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ForecastError::ParseError("rates need three values".to_string());
        assert_eq!(err.to_string(), "Parse error: rates need three values");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ForecastError::ValidationError("initial cost must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: initial cost must be positive"
        );
    }

    #[test]
    fn test_json_error_from_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("not valid json{{{");
        let json_err = result.unwrap_err();
        let err: ForecastError = json_err.into();
        assert!(matches!(err, ForecastError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_toml_error_from_conversion() {
        let result: Result<toml::Value, _> = toml::from_str("initial_cost = = 3");
        let toml_err = result.unwrap_err();
        let err: ForecastError = toml_err.into();
        assert!(matches!(err, ForecastError::Toml(_)));
        assert!(err.to_string().starts_with("TOML error"));
    }

    #[test]
    fn test_error_is_debug() {
        let err = ForecastError::ParseError("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("ParseError"));
    }
}
