use std::path::Path;

use crate::error::ForecastError;
use crate::models::ProjectionParameters;

/// Read projection parameters from a TOML file. Missing fields take their defaults.
pub fn read_toml(path: impl AsRef<Path>) -> Result<ProjectionParameters, ForecastError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let params: ProjectionParameters = toml::from_str(&content)?;
    tracing::info!(path = %path.as_ref().display(), "loaded parameters from TOML");
    Ok(params)
}

/// Write projection parameters to a TOML file.
pub fn write_toml(
    params: &ProjectionParameters,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    let content = toml::to_string_pretty(params)?;
    std::fs::write(path.as_ref(), content)?;
    Ok(())
}

/// Read projection parameters from a JSON file.
pub fn read_parameters_json(
    path: impl AsRef<Path>,
) -> Result<ProjectionParameters, ForecastError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let params: ProjectionParameters = serde_json::from_str(&content)?;
    tracing::info!(path = %path.as_ref().display(), "loaded parameters from JSON");
    Ok(params)
}

/// Write projection parameters to a pretty-printed JSON file.
pub fn write_parameters_json(
    params: &ProjectionParameters,
    path: impl AsRef<Path>,
) -> Result<(), ForecastError> {
    std::fs::write(path.as_ref(), serde_json::to_string_pretty(params)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GrowthRates, Intervention};

    #[test]
    fn test_toml_roundtrip() {
        let params = ProjectionParameters {
            initial_cost: 1_800_000.0,
            growth_rates: GrowthRates::new(12.0, -1.0, 0.0),
            intervention: Intervention::enabled_at(9, 2_000_000.0),
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        write_toml(&params, &path).unwrap();
        assert_eq!(read_toml(&path).unwrap(), params);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(
            &path,
            "economic_limit = 5000000.0\n\n[intervention]\nenabled = true\nyear = 6\n",
        )
        .unwrap();
        let params = read_toml(&path).unwrap();
        assert_eq!(params.economic_limit, 5_000_000.0);
        assert_eq!(params.initial_cost, 2_500_000.0);
        assert!(params.intervention.enabled);
        assert_eq!(params.intervention.year, 6);
        assert_eq!(params.intervention.cost, 4_000_000.0);
    }

    #[test]
    fn test_partial_growth_rates_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial_rates.toml");
        std::fs::write(&path, "[growth_rates]\nphase1 = 12.0\n").unwrap();
        let params = read_toml(&path).unwrap();
        assert_eq!(params.growth_rates.as_array(), [12.0, 3.5, 0.7]);
    }

    #[test]
    fn test_toml_growth_rates_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rates.toml");
        std::fs::write(
            &path,
            "[growth_rates]\nphase1 = 5.0\nphase2 = 4.0\nphase3 = 3.0\n",
        )
        .unwrap();
        let params = read_toml(&path).unwrap();
        assert_eq!(params.growth_rates.as_array(), [5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "initial_cost = \"lots\"").unwrap();
        assert!(matches!(read_toml(&path), Err(ForecastError::Toml(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_toml("/nonexistent/params.toml");
        assert!(matches!(result, Err(ForecastError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let params = ProjectionParameters::default().with_intervention_at(12);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        write_parameters_json(&params, &path).unwrap();
        assert_eq!(read_parameters_json(&path).unwrap(), params);
    }
}
