use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Last year of the projection horizon. The series covers years `0..=HORIZON_YEARS`.
pub const HORIZON_YEARS: u32 = 25;

/// Number of records in every projected series.
pub const SERIES_LEN: usize = HORIZON_YEARS as usize + 1;

/// A contiguous range of years sharing one growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthPhase {
    /// Years 1-6
    Early,
    /// Years 7-12
    Middle,
    /// Years 13 onwards
    Late,
}

impl GrowthPhase {
    /// Phase governing the growth step into `year`. Year 0 is the starting
    /// point and has no phase.
    pub fn for_year(year: u32) -> Option<Self> {
        match year {
            0 => None,
            1..=6 => Some(GrowthPhase::Early),
            7..=12 => Some(GrowthPhase::Middle),
            _ => Some(GrowthPhase::Late),
        }
    }

    /// One-based phase number.
    pub fn number(self) -> u8 {
        match self {
            GrowthPhase::Early => 1,
            GrowthPhase::Middle => 2,
            GrowthPhase::Late => 3,
        }
    }

    /// First year of the phase.
    pub fn first_year(self) -> u32 {
        match self {
            GrowthPhase::Early => 1,
            GrowthPhase::Middle => 7,
            GrowthPhase::Late => 13,
        }
    }
}

impl std::fmt::Display for GrowthPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Phase {}", self.number())
    }
}

/// Annual growth rates in percent, one per phase. Negative values model decline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthRates {
    pub phase1: f64,
    pub phase2: f64,
    pub phase3: f64,
}

impl GrowthRates {
    pub fn new(phase1: f64, phase2: f64, phase3: f64) -> Self {
        Self {
            phase1,
            phase2,
            phase3,
        }
    }

    /// Rate in percent for the given phase.
    pub fn rate(&self, phase: GrowthPhase) -> f64 {
        match phase {
            GrowthPhase::Early => self.phase1,
            GrowthPhase::Middle => self.phase2,
            GrowthPhase::Late => self.phase3,
        }
    }

    /// Rate in percent applied when stepping into `year` (0.0 for year 0).
    pub fn rate_for_year(&self, year: u32) -> f64 {
        GrowthPhase::for_year(year).map_or(0.0, |phase| self.rate(phase))
    }

    /// Compound multiplier `1 + rate/100` for `year`; exactly 1.0 for year 0.
    pub fn multiplier_for_year(&self, year: u32) -> f64 {
        match GrowthPhase::for_year(year) {
            Some(phase) => 1.0 + self.rate(phase) / 100.0,
            None => 1.0,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.phase1, self.phase2, self.phase3]
    }
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self::new(17.6, 3.5, 0.7)
    }
}

impl From<[f64; 3]> for GrowthRates {
    fn from(rates: [f64; 3]) -> Self {
        Self::new(rates[0], rates[1], rates[2])
    }
}

/// Parses a comma separated triple such as `17.6,3.5,0.7`.
impl std::str::FromStr for GrowthRates {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|e| ForecastError::ParseError(format!("Invalid rate '{part}': {e}")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match values.as_slice() {
            [p1, p2, p3] => Ok(Self::new(*p1, *p2, *p3)),
            _ => Err(ForecastError::ParseError(format!(
                "Expected three comma separated rates, got {}",
                values.len()
            ))),
        }
    }
}
