use std::fs;
use std::path::PathBuf;

use clap::Args;
use vecta_data::{ScanLog, ScanRecord};
use vecta_scan::{DetectionCounts, DetectionRiskAggregator, ScanReport};

use crate::config::Config;
use crate::error::CliError;

#[derive(Debug, Args, Clone, Default)]
pub struct ScanArgs {
    /// JSON object of detector class to count, e.g. {"Tire": 2, "Bottle": 1}
    #[arg(long, value_name = "FILE")]
    pub detections: Option<PathBuf>,

    /// Add detections of one class (repeatable), e.g. --count Tire=2
    #[arg(long = "count", value_name = "CLASS=N", value_parser = parse_count_arg)]
    pub counts: Vec<(String, u32)>,

    /// Append the scan to the scan log (configured path when no file is given)
    #[arg(long, value_name = "FILE")]
    pub log: Option<Option<PathBuf>>,

    /// Id of the user who sent the photo, stored in the log
    #[arg(long, default_value_t = 0)]
    pub user_id: i64,

    /// Name of the user who sent the photo, stored in the log
    #[arg(long)]
    pub username: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_count_arg(raw: &str) -> Result<(String, u32), String> {
    let (class, n) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CLASS=N, got {raw:?}"))?;
    if class.is_empty() {
        return Err(format!("missing class name in {raw:?}"));
    }
    let n = n
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("bad count in {raw:?}: {e}"))?;
    Ok((class.to_string(), n))
}

pub fn collect_counts(args: &ScanArgs) -> Result<DetectionCounts, CliError> {
    let mut counts = match &args.detections {
        Some(path) => serde_json::from_str::<DetectionCounts>(&fs::read_to_string(path)?)?,
        None => DetectionCounts::new(),
    };
    for (class, n) in &args.counts {
        counts.add(class, *n);
    }
    Ok(counts)
}

pub fn run_scan(args: &ScanArgs, config: &Config) -> Result<String, CliError> {
    let counts = collect_counts(args)?;
    let result = DetectionRiskAggregator::new().evaluate(&counts);

    if let Some(path) = &args.log {
        let path = path.clone().unwrap_or_else(|| config.scan_log.clone());
        let record = ScanRecord::now(args.user_id, args.username.as_deref(), &counts, &result);
        ScanLog::new(&path).append(&record)?;
        log::info!("scan logged to {}", path.display());
    }

    let report = ScanReport::new(counts, result);
    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}
