mod forecaster;
mod projection;
mod sweep;

pub use forecaster::Forecaster;
pub use projection::project;
pub use sweep::{sweep_intervention_years, validate_sweep, SweepPoint, SWEEP_YEARS};
