use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vecta_data::{CaseCounts, WeatherReading};

use crate::error::CliError;

pub const CONFIG_FILE: &str = "vecta.toml";

/// Dashboard defaults. Every key is optional in `vecta.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub area: String,
    pub construction: bool,
    pub hotspots_csv: PathBuf,
    pub scan_log: PathBuf,
    pub newsletter: PathBuf,
    pub weather: WeatherDefaults,
    pub cases: CaseDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WeatherDefaults {
    pub humidity: f64,
    pub temperature: f64,
    pub rainfall: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CaseDefaults {
    pub historical: u32,
    pub clusters: u32,
    pub csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            area: "Woodlands".to_string(),
            construction: true,
            hotspots_csv: PathBuf::from("dengue_hotspots.csv"),
            scan_log: PathBuf::from("environment_scans.csv"),
            newsletter: PathBuf::from("newsletter.txt"),
            weather: WeatherDefaults::default(),
            cases: CaseDefaults::default(),
        }
    }
}

impl Default for WeatherDefaults {
    fn default() -> Self {
        let r = WeatherReading::default();
        Self {
            humidity: r.humidity_pct,
            temperature: r.temperature_c,
            rainfall: r.rainfall_mm,
        }
    }
}

impl Default for CaseDefaults {
    fn default() -> Self {
        let c = CaseCounts::default();
        Self {
            historical: c.historical_cases,
            clusters: c.active_clusters,
            csv: PathBuf::from("dengue_cases.csv"),
        }
    }
}

impl WeatherDefaults {
    pub fn reading(&self) -> WeatherReading {
        WeatherReading::new(self.humidity, self.temperature, self.rainfall)
    }
}

impl CaseDefaults {
    pub fn counts(&self) -> CaseCounts {
        CaseCounts::new(self.historical, self.clusters)
    }
}

impl Config {
    /// Load `path`, or the defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let cfg = parse_config(&text)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(text)
}

pub fn generate_template() -> String {
    let d = Config::default();
    let mut out = String::new();
    out.push_str("# Default area for `vecta assess`\n");
    out.push_str(&format!("area = \"{}\"\n", d.area));
    out.push_str(&format!("construction = {}\n", d.construction));
    out.push_str("\n# Data files, relative to the working directory\n");
    out.push_str(&format!("hotspots_csv = \"{}\"\n", d.hotspots_csv.display()));
    out.push_str(&format!("scan_log = \"{}\"\n", d.scan_log.display()));
    out.push_str(&format!("newsletter = \"{}\"\n", d.newsletter.display()));
    out.push_str("\n# Manual weather entry\n");
    out.push_str("[weather]\n");
    out.push_str("humidity = 70.0\n");
    out.push_str("temperature = 30.0\n");
    out.push_str("rainfall = 0.0\n");
    out.push_str("\n# Used when the area is not found in the case CSV\n");
    out.push_str("[cases]\n");
    out.push_str(&format!("historical = {}\n", d.cases.historical));
    out.push_str(&format!("clusters = {}\n", d.cases.clusters));
    out.push_str(&format!("csv = \"{}\"\n", d.cases.csv.display()));
    out
}
