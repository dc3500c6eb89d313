#![no_main]
use libfuzzer_sys::fuzz_target;
use maintenance_forecast::{project, ProjectionParameters};
use std::str::from_utf8;

// Any parameter file that parses must project to a full series.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = from_utf8(data) {
        if let Ok(params) = toml::from_str::<ProjectionParameters>(s) {
            let result = project(&params);
            assert_eq!(result.series.len(), 26);
            for (i, rec) in result.series.iter().enumerate() {
                assert_eq!(rec.year as usize, i);
            }
            if let Some(year) = result.adjusted_inflexion_year {
                assert!(params.intervention.enabled);
                assert!(i64::from(year) >= i64::from(params.intervention.year));
            }
        }
    }
});
