#![no_main]
use libfuzzer_sys::fuzz_target;
use maintenance_forecast::GrowthRates;
use std::str::from_utf8;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = from_utf8(data) {
        if let Ok(rates) = s.parse::<GrowthRates>() {
            let [p1, p2, p3] = rates.as_array();
            let round = format!("{p1},{p2},{p3}")
                .parse::<GrowthRates>()
                .expect("roundtrip");
            if rates.as_array().iter().all(|r| !r.is_nan()) {
                assert_eq!(rates, round);
            }
        }
    }
});
