//! Shared fixtures for the cross-crate tests.

use vecta_data::{CaseTable, PayloadWeather};
use vecta_scan::DetectionCounts;

pub const CASES_CSV: &str = include_str!("../fixtures/dengue_cases.csv");
pub const OWM_CURRENT: &str = include_str!("../fixtures/owm_current.json");
pub const OWM_GEOCODE: &str = include_str!("../fixtures/owm_geocode.json");
pub const SCAN_DETECTIONS: &str = include_str!("../fixtures/scan_detections.json");

pub fn case_table() -> CaseTable {
    CaseTable::from_reader(CASES_CSV.as_bytes()).expect("case fixture parses")
}

pub fn observed_weather() -> PayloadWeather {
    PayloadWeather::new(OWM_CURRENT)
}

pub fn scan_detections() -> DetectionCounts {
    serde_json::from_str(SCAN_DETECTIONS).expect("detection fixture parses")
}
