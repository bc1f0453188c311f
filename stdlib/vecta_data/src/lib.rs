//! Inputs around the scoring cores: weather readings, case counts per area
//! and hotspot locations, plus the scan log and newsletter archive. This is
//! also where raw values are range-checked before they reach `vecta_risk`.

pub mod cases;
pub mod error;
pub mod hotspot;
pub mod newsletter;
pub mod scan_log;
pub mod weather;

pub use cases::{check_cases, check_clusters, CaseCounts, CaseSource, CaseTable};
pub use error::{DataError, Result};
pub use hotspot::{Hotspot, HotspotTable};
pub use newsletter::Newsletter;
pub use scan_log::{ScanLog, ScanRecord};
pub use weather::{
    check_humidity, check_rainfall, check_temperature, parse_current_weather, parse_geocode,
    Coordinates, ManualWeather, PayloadWeather, WeatherReading, WeatherSource,
};
