use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::projection::project;
use crate::error::ForecastError;
use crate::models::ProjectionParameters;

/// Intervention years a host accepts for a sweep.
pub const SWEEP_YEARS: RangeInclusive<i32> = 1..=24;

/// Outcome of re-forecasting at one candidate intervention year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub intervention_year: i32,
    /// Rounded baseline cost in the intervention year, if it lies in the horizon
    pub baseline_cost_at_year: Option<i64>,
    pub baseline_inflexion_year: Option<u32>,
    pub adjusted_inflexion_year: Option<u32>,
    /// Adjusted minus baseline inflexion year, when both trajectories cross
    pub years_gained: Option<i64>,
}

/// Run the projection once per intervention year, keeping the rest of
/// `params` (intervention cost included) fixed.
pub fn sweep_intervention_years(
    params: &ProjectionParameters,
    years: impl IntoIterator<Item = i32>,
) -> Vec<SweepPoint> {
    years
        .into_iter()
        .map(|year| {
            let result = project(&params.with_intervention_at(year));
            let baseline_cost_at_year = u32::try_from(year)
                .ok()
                .and_then(|y| result.record(y))
                .map(|r| r.baseline_cost);
            let years_gained = match (result.baseline_inflexion_year, result.adjusted_inflexion_year)
            {
                (Some(b), Some(a)) => Some(i64::from(a) - i64::from(b)),
                _ => None,
            };
            tracing::debug!(
                year,
                adjusted = ?result.adjusted_inflexion_year,
                "sweep point"
            );
            SweepPoint {
                intervention_year: year,
                baseline_cost_at_year,
                baseline_inflexion_year: result.baseline_inflexion_year,
                adjusted_inflexion_year: result.adjusted_inflexion_year,
                years_gained,
            }
        })
        .collect()
}

/// Check a sweep request at the host boundary.
///
/// The range must be non-empty and lie within [`SWEEP_YEARS`]. Every point of
/// the sweep runs with the intervention switched on, so the parameters are
/// validated in that form even when the caller sent it disabled.
pub fn validate_sweep(
    params: &ProjectionParameters,
    years: &RangeInclusive<i32>,
) -> Result<(), ForecastError> {
    let (from, to) = (*years.start(), *years.end());
    if from > to || !SWEEP_YEARS.contains(&from) || !SWEEP_YEARS.contains(&to) {
        return Err(ForecastError::ValidationError(format!(
            "Invalid sweep range {from}..={to}: must lie within {}..={}",
            SWEEP_YEARS.start(),
            SWEEP_YEARS.end()
        )));
    }
    params.with_intervention_at(from).validate()
}
