//! Weather readings and the OpenWeatherMap payload shapes they come from.
//!
//! No HTTP happens here. Callers fetch the geocoding and current-weather
//! responses however they like and hand the bodies to the parsers below.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, DataError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub humidity_pct: f64,
    pub temperature_c: f64,
    pub rainfall_mm: f64,
}

impl WeatherReading {
    pub fn new(humidity_pct: f64, temperature_c: f64, rainfall_mm: f64) -> Self {
        Self {
            humidity_pct,
            temperature_c,
            rainfall_mm,
        }
    }

    /// Enforce the manual-entry ranges.
    pub fn validate(&self) -> Result<()> {
        check_humidity(self.humidity_pct)?;
        check_temperature(self.temperature_c)?;
        check_rainfall(self.rainfall_mm)?;
        Ok(())
    }
}

pub fn check_humidity(pct: f64) -> Result<()> {
    check_range("humidity", pct, 0.0, 100.0)
}

pub fn check_temperature(c: f64) -> Result<()> {
    check_range("temperature", c, 15.0, 45.0)
}

pub fn check_rainfall(mm: f64) -> Result<()> {
    check_range("rainfall", mm, 0.0, 100.0)
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self::new(70.0, 30.0, 0.0)
    }
}

pub trait WeatherSource {
    fn reading(&self, area: &str) -> Result<WeatherReading>;
}

/// A reading typed in by hand. Same answer for every area.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualWeather {
    reading: WeatherReading,
}

impl ManualWeather {
    pub fn new(reading: WeatherReading) -> Self {
        Self { reading }
    }
}

impl WeatherSource for ManualWeather {
    fn reading(&self, _area: &str) -> Result<WeatherReading> {
        Ok(self.reading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// First match of a direct-geocoding response.
pub fn parse_geocode(area: &str, body: &str) -> Result<Coordinates> {
    let matches: Vec<Coordinates> = serde_json::from_str(body)?;
    matches
        .into_iter()
        .next()
        .ok_or_else(|| DataError::LocationNotFound(area.to_string()))
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: f64,
}

/// Reading from a current-weather response requested with `units=metric`.
///
/// The endpoint carries no usable recent-rainfall figure, so rainfall is 0.
pub fn parse_current_weather(body: &str) -> Result<WeatherReading> {
    let w: CurrentWeather = serde_json::from_str(body)
        .map_err(|e| DataError::MalformedPayload(format!("current weather: {e}")))?;
    log::debug!(
        "current weather: {}% humidity, {}C",
        w.main.humidity,
        w.main.temp
    );
    Ok(WeatherReading::new(w.main.humidity, w.main.temp, 0.0))
}

/// Reads a saved current-weather response body for every area.
#[derive(Debug, Clone)]
pub struct PayloadWeather {
    body: String,
}

impl PayloadWeather {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl WeatherSource for PayloadWeather {
    fn reading(&self, _area: &str) -> Result<WeatherReading> {
        parse_current_weather(&self.body)
    }
}
