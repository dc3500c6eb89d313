use serde::{Deserialize, Serialize};

/// Format a whole-unit cost in millions with two decimals, e.g. `2.50M`.
pub fn format_millions(value: i64) -> String {
    format!("{:.2}M", value as f64 / 1_000_000.0)
}

/// Round a full-precision accumulator value to the nearest whole unit.
pub(crate) fn round_cost(value: f64) -> i64 {
    value.round() as i64
}

/// One year of a projected series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u32,
    /// Baseline cost rounded to the nearest whole unit
    pub baseline_cost: i64,
    /// Adjusted cost, present only from the intervention year onwards
    pub adjusted_cost: Option<i64>,
    pub baseline_display: String,
    pub adjusted_display: Option<String>,
    /// Unrounded baseline is above the economic limit
    #[serde(default)]
    pub baseline_over_limit: bool,
    /// Unrounded adjusted value is above the economic limit; false when absent
    #[serde(default)]
    pub adjusted_over_limit: bool,
}

impl YearRecord {
    /// Build a record from unrounded trajectory values, testing them against
    /// `limit` before rounding.
    pub fn new(year: u32, baseline: f64, adjusted: Option<f64>, limit: f64) -> Self {
        let baseline_cost = round_cost(baseline);
        let adjusted_cost = adjusted.map(round_cost);
        Self {
            year,
            baseline_cost,
            adjusted_cost,
            baseline_display: format_millions(baseline_cost),
            adjusted_display: adjusted_cost.map(format_millions),
            baseline_over_limit: baseline > limit,
            adjusted_over_limit: adjusted.is_some_and(|value| value > limit),
        }
    }
}

/// Output of a projection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Years 0 through 25, index equals year
    pub series: Vec<YearRecord>,
    /// First year the baseline exceeds the economic limit
    pub baseline_inflexion_year: Option<u32>,
    /// First year the adjusted trajectory exceeds the economic limit
    pub adjusted_inflexion_year: Option<u32>,
}

impl ProjectionResult {
    pub fn record(&self, year: u32) -> Option<&YearRecord> {
        self.series.get(year as usize)
    }

    /// `Year N`, or `Safe` when the baseline never crosses the limit.
    pub fn baseline_headline(&self) -> String {
        headline(self.baseline_inflexion_year)
    }

    pub fn adjusted_headline(&self) -> String {
        headline(self.adjusted_inflexion_year)
    }

    /// Whether any year carries an adjusted value.
    pub fn has_adjusted(&self) -> bool {
        self.series.iter().any(|r| r.adjusted_cost.is_some())
    }

    /// Largest rounded value over both trajectories.
    pub fn peak_cost(&self) -> i64 {
        self.series
            .iter()
            .flat_map(|r| std::iter::once(r.baseline_cost).chain(r.adjusted_cost))
            .max()
            .unwrap_or(0)
    }
}

fn headline(year: Option<u32>) -> String {
    match year {
        Some(y) => format!("Year {y}"),
        None => "Safe".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(2_500_000), "2.50M");
        assert_eq!(format_millions(6_612_780), "6.61M");
        assert_eq!(format_millions(0), "0.00M");
        assert_eq!(format_millions(-1_250_000), "-1.25M");
    }

    #[test]
    fn test_round_cost() {
        assert_eq!(round_cost(4_704_000.4), 4_704_000);
        assert_eq!(round_cost(4_704_000.6), 4_704_001);
        assert_eq!(round_cost(-10.6), -11);
    }

    #[test]
    fn test_year_record_without_adjusted() {
        let rec = YearRecord::new(4, 1_234_567.89, None, 1e9);
        assert_eq!(rec.baseline_cost, 1_234_568);
        assert_eq!(rec.baseline_display, "1.23M");
        assert!(rec.adjusted_cost.is_none());
        assert!(rec.adjusted_display.is_none());
    }

    #[test]
    fn test_year_record_with_adjusted() {
        let rec = YearRecord::new(3, 3_000_000.0, Some(4_000_000.0), 1e9);
        assert_eq!(rec.adjusted_cost, Some(4_000_000));
        assert_eq!(rec.adjusted_display.as_deref(), Some("4.00M"));
    }

    #[test]
    fn test_over_limit_uses_unrounded_value() {
        let rec = YearRecord::new(0, 1_000_000.4, Some(999_999.6), 1_000_000.0);
        assert_eq!(rec.baseline_cost, 1_000_000);
        assert!(rec.baseline_over_limit);
        assert_eq!(rec.adjusted_cost, Some(1_000_000));
        assert!(!rec.adjusted_over_limit);

        let rec = YearRecord::new(0, 1_000_000.0, None, 1_000_000.0);
        assert!(!rec.baseline_over_limit);
        assert!(!rec.adjusted_over_limit);
    }

    #[test]
    fn test_zero_adjusted_cost_is_present() {
        let rec = YearRecord::new(3, 1.0, Some(0.0), 1e9);
        assert_eq!(rec.adjusted_cost, Some(0));
    }

    #[test]
    fn test_headlines() {
        let result = ProjectionResult {
            series: vec![YearRecord::new(0, 1.0, None, 1e9)],
            baseline_inflexion_year: Some(6),
            adjusted_inflexion_year: None,
        };
        assert_eq!(result.baseline_headline(), "Year 6");
        assert_eq!(result.adjusted_headline(), "Safe");
        assert!(!result.has_adjusted());
    }

    #[test]
    fn test_peak_cost_includes_adjusted() {
        let result = ProjectionResult {
            series: vec![
                YearRecord::new(0, 100.0, None, 1e9),
                YearRecord::new(1, 120.0, Some(500.0), 1e9),
            ],
            baseline_inflexion_year: None,
            adjusted_inflexion_year: None,
        };
        assert_eq!(result.peak_cost(), 500);
        assert_eq!(result.record(1).map(|r| r.year), Some(1));
        assert!(result.record(2).is_none());
    }

    #[test]
    fn test_absent_adjusted_serializes_as_null() {
        let rec = YearRecord::new(0, 10.0, None, 1e9);
        let json = serde_json::to_value(&rec).unwrap();
        assert!(json["adjusted_cost"].is_null());
        assert_eq!(json["baseline_cost"], 10);
    }
}
