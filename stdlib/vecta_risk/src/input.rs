use serde::{Deserialize, Serialize};

/// Environmental and epidemiological readings for one area, as resolved by the caller.
///
/// Values are taken as-is. Range checks belong to whoever collected them, so a
/// negative humidity or an impossible temperature is still a valid input here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub construction_present: bool,
    pub humidity_pct: f64,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub historical_cases: u32,
    pub active_clusters: u32,
}

impl RiskInput {
    pub fn new(
        construction_present: bool,
        humidity_pct: f64,
        temperature_c: f64,
        rainfall_mm: f64,
        historical_cases: u32,
        active_clusters: u32,
    ) -> Self {
        Self {
            construction_present,
            humidity_pct,
            temperature_c,
            rainfall_mm,
            historical_cases,
            active_clusters,
        }
    }
}
