use serde::{Deserialize, Serialize};

use crate::counts::DetectionCounts;
use crate::level::ScanRiskLevel;
use crate::site::{weight, BreedingSite};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DetectionRiskResult {
    /// Weighted detection total. Not clamped.
    pub score: f64,
    pub level: ScanRiskLevel,
}

/// Weighs detected breeding sites into a scan risk level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionRiskAggregator;

impl DetectionRiskAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, counts: &DetectionCounts) -> DetectionRiskResult {
        let mut score = 0.0;
        for (class, n) in counts.iter() {
            if n == 0 {
                log::warn!("detection row {class:?} has a zero count");
            } else if BreedingSite::from_label(class).is_none() {
                log::warn!("unrecognized detection class {class:?} weighted as default");
            }
            score += weight(class) * f64::from(n);
        }

        let level = ScanRiskLevel::from_score(score);
        log::debug!(
            "scan of {} detections scored {score:.2} ({level})",
            counts.total()
        );
        DetectionRiskResult { score, level }
    }
}
