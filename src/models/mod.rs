mod parameters;
mod phase;
mod result;

pub use parameters::{Intervention, ProjectionParameters};
pub use phase::{GrowthPhase, GrowthRates, HORIZON_YEARS, SERIES_LEN};
pub use result::{format_millions, ProjectionResult, YearRecord};
