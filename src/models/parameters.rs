use serde::{Deserialize, Serialize};

use super::phase::GrowthRates;
use crate::error::ForecastError;

/// Optional re-forecast: the adjusted trajectory restarts at `cost` in `year`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intervention {
    pub enabled: bool,
    /// Absolute year of the splice. Conventionally 1-24 but applied literally.
    pub year: i32,
    /// Value the adjusted trajectory is reset to at `year`.
    pub cost: f64,
}

impl Intervention {
    pub fn enabled_at(year: i32, cost: f64) -> Self {
        Self {
            enabled: true,
            year,
            cost,
        }
    }
}

impl Default for Intervention {
    fn default() -> Self {
        Self {
            enabled: false,
            year: 3,
            cost: 4_000_000.0,
        }
    }
}

/// Inputs of a single projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParameters {
    /// Annual maintenance cost at year 0
    pub initial_cost: f64,
    /// Ceiling both trajectories are tested against
    pub economic_limit: f64,
    /// Annual growth rates in percent for years 1-6, 7-12 and 13+
    pub growth_rates: GrowthRates,
    pub intervention: Intervention,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            initial_cost: 2_500_000.0,
            economic_limit: 6_500_000.0,
            growth_rates: GrowthRates::default(),
            intervention: Intervention::default(),
        }
    }
}

impl ProjectionParameters {
    /// Check the ranges a host should enforce before projecting.
    ///
    /// The projection itself accepts anything numeric; this is the boundary
    /// check used by the CLI and the web service.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if !self.initial_cost.is_finite() || self.initial_cost <= 0.0 {
            return Err(ForecastError::ValidationError(format!(
                "initial_cost must be positive, got {}",
                self.initial_cost
            )));
        }
        if !self.economic_limit.is_finite() || self.economic_limit <= 0.0 {
            return Err(ForecastError::ValidationError(format!(
                "economic_limit must be positive, got {}",
                self.economic_limit
            )));
        }
        for (idx, rate) in self.growth_rates.as_array().iter().enumerate() {
            if !rate.is_finite() {
                return Err(ForecastError::ValidationError(format!(
                    "growth rate for phase {} must be finite, got {}",
                    idx + 1,
                    rate
                )));
            }
        }
        if self.intervention.enabled {
            if !self.intervention.cost.is_finite() || self.intervention.cost <= 0.0 {
                return Err(ForecastError::ValidationError(format!(
                    "intervention cost must be positive, got {}",
                    self.intervention.cost
                )));
            }
            if !(1..=24).contains(&self.intervention.year) {
                return Err(ForecastError::ValidationError(format!(
                    "intervention year must be in 1..=24, got {}",
                    self.intervention.year
                )));
            }
        }
        Ok(())
    }

    /// Same parameters with the intervention switched on at `year`.
    pub fn with_intervention_at(&self, year: i32) -> Self {
        Self {
            intervention: Intervention {
                enabled: true,
                year,
                ..self.intervention
            },
            ..*self
        }
    }
}
