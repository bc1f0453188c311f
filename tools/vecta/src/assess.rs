use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use vecta_data::{
    check_cases, check_clusters, check_humidity, check_rainfall, check_temperature, CaseCounts,
    CaseSource, CaseTable, ManualWeather, PayloadWeather, WeatherReading, WeatherSource,
};
use vecta_risk::{AssessmentReport, RiskInput, RiskScorer};

use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Args, Clone, Default)]
pub struct AssessArgs {
    /// Area name, e.g. "Ang Mo Kio"
    #[arg(long)]
    pub area: Option<String>,

    /// Construction sites are present in the area
    #[arg(long, conflicts_with = "no_construction")]
    pub construction: bool,

    /// No construction sites in the area
    #[arg(long)]
    pub no_construction: bool,

    /// Relative humidity in percent (0-100)
    #[arg(long, value_name = "PCT")]
    pub humidity: Option<f64>,

    /// Temperature in degrees Celsius (15-45)
    #[arg(long, value_name = "C")]
    pub temperature: Option<f64>,

    /// Recent rainfall in millimetres (0-100)
    #[arg(long, value_name = "MM")]
    pub rainfall: Option<f64>,

    /// Dengue cases reported last week (0-1000)
    #[arg(long, value_name = "N")]
    pub cases: Option<u32>,

    /// Active dengue clusters (0-50)
    #[arg(long, value_name = "N")]
    pub clusters: Option<u32>,

    /// CSV of case counts per area (area,cases[,clusters])
    #[arg(long, value_name = "FILE")]
    pub cases_csv: Option<PathBuf>,

    /// Saved OpenWeatherMap current-weather response to read weather from
    #[arg(long, value_name = "FILE")]
    pub weather_json: Option<PathBuf>,

    /// Show how much each factor contributed to the score
    #[arg(long)]
    pub explain: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Area name plus validated scoring input, merged from config, data files and flags.
pub fn resolve_input(args: &AssessArgs, config: &Config) -> Result<(String, RiskInput), CliError> {
    let area = args.area.clone().unwrap_or_else(|| config.area.clone());
    let construction_present = if args.construction {
        true
    } else if args.no_construction {
        false
    } else {
        config.construction
    };

    let source: Box<dyn WeatherSource> = match &args.weather_json {
        Some(path) => Box::new(PayloadWeather::new(fs::read_to_string(path)?)),
        None => Box::new(ManualWeather::new(config.weather.reading())),
    };
    // Fetched readings are taken as reported; only typed-in values are range-checked.
    let fetched = args.weather_json.is_some();
    let base = source.reading(&area)?;
    let weather = WeatherReading::new(
        typed_in(args.humidity, base.humidity_pct, fetched, check_humidity)?,
        typed_in(args.temperature, base.temperature_c, fetched, check_temperature)?,
        typed_in(args.rainfall, base.rainfall_mm, fetched, check_rainfall)?,
    );

    let csv_path = args
        .cases_csv
        .clone()
        .unwrap_or_else(|| config.cases.csv.clone());
    let looked_up = lookup_cases(&csv_path, &area);
    let from_csv = looked_up.is_some();
    let base = looked_up.unwrap_or_else(|| config.cases.counts());
    let cases = CaseCounts::new(
        typed_in(args.cases, base.historical_cases, from_csv, check_cases)?,
        typed_in(args.clusters, base.active_clusters, from_csv, check_clusters)?,
    );

    let input = RiskInput::new(
        construction_present,
        weather.humidity_pct,
        weather.temperature_c,
        weather.rainfall_mm,
        cases.historical_cases,
        cases.active_clusters,
    );
    Ok((area, input))
}

/// A flag wins over the base value. The flag is always checked; the base
/// only when it was typed in too (config), not read from a data source.
fn typed_in<T: Copy>(
    flag: Option<T>,
    base: T,
    base_from_data: bool,
    check: fn(T) -> vecta_data::Result<()>,
) -> Result<T, CliError> {
    match flag {
        Some(v) => {
            check(v)?;
            Ok(v)
        }
        None => {
            if !base_from_data {
                check(base)?;
            }
            Ok(base)
        }
    }
}

/// A missing or unreadable case file falls back to manual entry.
fn lookup_cases(path: &Path, area: &str) -> Option<CaseCounts> {
    if !path.exists() {
        log::info!("{} not found, using manual case entry", path.display());
        return None;
    }
    let table = match CaseTable::from_path(path) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("could not load {}: {e}", path.display());
            return None;
        }
    };
    let found = table.lookup(area);
    match found {
        Some(c) => log::info!("loaded {} cases for {area}", c.historical_cases),
        None => log::info!("{area} not listed in {}", path.display()),
    }
    found
}

pub fn run_assess(args: &AssessArgs, config: &Config) -> Result<String, CliError> {
    let (area, input) = resolve_input(args, config)?;
    let scorer = RiskScorer::new();
    let report = AssessmentReport::new(area, input, scorer.evaluate(&input));

    if args.json {
        let mut value = serde_json::to_value(&report)?;
        if args.explain {
            value["breakdown"] = serde_json::to_value(scorer.breakdown(&input))?;
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = report.to_string();
    if args.explain {
        let b = scorer.breakdown(&input);
        out.push_str("\nScore Breakdown:\n");
        for c in &b.contributions {
            out.push_str(&format!("  {:<18}+{:.2}\n", format!("{:?}", c.factor), c.contribution));
        }
        out.push_str(&format!("  {:<18}{:.2} -> {}\n", "Total", b.raw_total, b.score));
    }
    Ok(out)
}
