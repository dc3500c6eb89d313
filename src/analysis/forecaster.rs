use std::ops::RangeInclusive;

use crate::analysis::{project, sweep_intervention_years, validate_sweep, SweepPoint};
use crate::error::ForecastError;
use crate::models::{GrowthPhase, ProjectionParameters, ProjectionResult};

/// Unified forecasting API over one parameter set.
pub struct Forecaster<'a> {
    params: &'a ProjectionParameters,
}

impl<'a> Forecaster<'a> {
    /// Create a new Forecaster for the given parameters.
    pub fn new(params: &'a ProjectionParameters) -> Self {
        Self { params }
    }

    /// Create a Forecaster after checking the parameters at the host boundary.
    pub fn checked(params: &'a ProjectionParameters) -> Result<Self, ForecastError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ProjectionParameters {
        self.params
    }

    /// Project both trajectories over the 25 year horizon.
    pub fn project(&self) -> ProjectionResult {
        project(self.params)
    }

    /// Re-forecast at every intervention year in `years`.
    pub fn sweep(&self, years: RangeInclusive<i32>) -> Vec<SweepPoint> {
        sweep_intervention_years(self.params, years)
    }

    /// Sweep after checking the range and the re-forecast it runs at each year.
    pub fn checked_sweep(
        &self,
        years: RangeInclusive<i32>,
    ) -> Result<Vec<SweepPoint>, ForecastError> {
        validate_sweep(self.params, &years)?;
        Ok(self.sweep(years))
    }

    /// Growth phase and rate in percent applied in `year`.
    pub fn phase_for_year(&self, year: u32) -> Option<(GrowthPhase, f64)> {
        GrowthPhase::for_year(year).map(|phase| (phase, self.params.growth_rates.rate(phase)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intervention;

    #[test]
    fn test_project_matches_standalone() {
        let params = ProjectionParameters::default().with_intervention_at(4);
        let forecaster = Forecaster::new(&params);
        assert_eq!(forecaster.project(), project(&params));
    }

    #[test]
    fn test_sweep_matches_standalone() {
        let params = ProjectionParameters::default();
        let forecaster = Forecaster::new(&params);
        assert_eq!(
            forecaster.sweep(1..=24),
            sweep_intervention_years(&params, 1..=24)
        );
    }

    #[test]
    fn test_checked_rejects_invalid() {
        let params = ProjectionParameters {
            economic_limit: 0.0,
            ..Default::default()
        };
        assert!(Forecaster::checked(&params).is_err());
        assert!(Forecaster::checked(&ProjectionParameters::default()).is_ok());
    }

    #[test]
    fn test_checked_sweep() {
        let params = ProjectionParameters {
            intervention: Intervention {
                cost: -5_000_000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let forecaster = Forecaster::checked(&params).unwrap();
        assert!(forecaster.checked_sweep(1..=2).is_err());

        let params = ProjectionParameters::default();
        let forecaster = Forecaster::new(&params);
        assert_eq!(forecaster.checked_sweep(1..=24).unwrap().len(), 24);
        assert!(forecaster.checked_sweep(0..=3).is_err());
    }

    #[test]
    fn test_phase_for_year() {
        let params = ProjectionParameters::default();
        let forecaster = Forecaster::new(&params);
        assert_eq!(forecaster.phase_for_year(0), None);
        assert_eq!(
            forecaster.phase_for_year(8),
            Some((GrowthPhase::Middle, 3.5))
        );
    }
}
