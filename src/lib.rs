pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

#[cfg(feature = "web")]
pub mod web;

pub use analysis::{project, Forecaster};
pub use error::ForecastError;
pub use io::{ParameterReader, ResultWriter};
pub use models::{
    GrowthPhase, GrowthRates, Intervention, ProjectionParameters, ProjectionResult, YearRecord,
};
