use crate::models::{ProjectionParameters, ProjectionResult, YearRecord, HORIZON_YEARS, SERIES_LEN};

/// Project the baseline and adjusted cost trajectories over years 0..=25.
///
/// Both trajectories compound with the rate of the phase the absolute year
/// falls in. The adjusted trajectory exists only when the intervention is
/// enabled; it starts at the intervention year, where it is reset to the
/// intervention cost, and is absent before it. Inflexion years latch on the
/// first year the unrounded value exceeds the economic limit.
///
/// No validation or clamping is applied: an intervention year at or below
/// zero yields adjusted values for every year, one beyond the horizon yields
/// none.
pub fn project(params: &ProjectionParameters) -> ProjectionResult {
    let intervention = params
        .intervention
        .enabled
        .then_some(&params.intervention);

    let mut baseline = params.initial_cost;
    let mut adjusted: Option<f64> = None;
    let mut baseline_inflexion_year = None;
    let mut adjusted_inflexion_year = None;
    let mut series = Vec::with_capacity(SERIES_LEN);

    for year in 0..=HORIZON_YEARS {
        let multiplier = params.growth_rates.multiplier_for_year(year);
        if year > 0 {
            baseline *= multiplier;
        }
        if baseline_inflexion_year.is_none() && baseline > params.economic_limit {
            baseline_inflexion_year = Some(year);
        }

        let adjusted_value = match intervention {
            Some(iv) if i64::from(year) >= i64::from(iv.year) => {
                let value = if i64::from(year) == i64::from(iv.year) {
                    iv.cost
                } else {
                    // A splice before year 0 seeds the accumulator with the
                    // intervention cost.
                    adjusted.unwrap_or(iv.cost) * multiplier
                };
                adjusted = Some(value);
                if adjusted_inflexion_year.is_none() && value > params.economic_limit {
                    adjusted_inflexion_year = Some(year);
                }
                Some(value)
            }
            _ => None,
        };

        series.push(YearRecord::new(
            year,
            baseline,
            adjusted_value,
            params.economic_limit,
        ));
    }

    ProjectionResult {
        series,
        baseline_inflexion_year,
        adjusted_inflexion_year,
    }
}
