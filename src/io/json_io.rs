use std::path::Path;

use crate::error::ForecastError;
use crate::models::ProjectionResult;

/// Write a projection result to a JSON file.
pub fn write_json(
    result: &ProjectionResult,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ForecastError> {
    let content = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    std::fs::write(path.as_ref(), content)?;
    tracing::info!(path = %path.as_ref().display(), "wrote projection JSON");
    Ok(())
}

/// Read a previously exported projection result.
pub fn read_json(path: impl AsRef<Path>) -> Result<ProjectionResult, ForecastError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let result: ProjectionResult = serde_json::from_str(&content)?;
    Ok(result)
}
