use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use vecta_scan::{DetectionCounts, DetectionRiskResult};

use crate::error::Result;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the scan log, as read back by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub timestamp: String,
    pub user_id: i64,
    pub username: String,
    pub detections: String,
    pub risk_score: f64,
    pub risk_level: String,
}

impl ScanRecord {
    pub fn new(
        at: NaiveDateTime,
        user_id: i64,
        username: Option<&str>,
        detections: &DetectionCounts,
        result: &DetectionRiskResult,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            user_id,
            username: username.unwrap_or("unknown").to_string(),
            detections: detections.to_string(),
            risk_score: result.score,
            risk_level: result.level.label().to_string(),
        }
    }

    pub fn now(
        user_id: i64,
        username: Option<&str>,
        detections: &DetectionCounts,
        result: &DetectionRiskResult,
    ) -> Self {
        Self::new(
            Local::now().naive_local(),
            user_id,
            username,
            detections,
            result,
        )
    }
}

/// Append-only CSV log of scans.
#[derive(Debug, Clone)]
pub struct ScanLog {
    path: PathBuf,
}

impl ScanLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a row, writing the header first if the file is new or empty.
    pub fn append(&self, record: &ScanRecord) -> Result<()> {
        let fresh = std::fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(fresh)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;
        log::debug!("appended scan by {} to {}", record.username, self.path.display());
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<ScanRecord>> {
        let mut rdr = csv::Reader::from_reader(File::open(&self.path)?);
        let mut out = Vec::new();
        for row in rdr.deserialize() {
            let record: ScanRecord = row?;
            out.push(record);
        }
        Ok(out)
    }
}
