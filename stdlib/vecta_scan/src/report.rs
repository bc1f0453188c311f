use std::fmt;

use serde::{Deserialize, Serialize};

use crate::aggregate::DetectionRiskResult;
use crate::counts::DetectionCounts;
use crate::site::BreedingSite;

/// One line per known class with a positive count, in input order.
pub fn recommendation_lines(counts: &DetectionCounts) -> Vec<&'static str> {
    counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .filter_map(|(class, _)| BreedingSite::from_label(class))
        .map(|site| site.recommendation())
        .collect()
}

/// Result message sent back for a scanned photo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanReport {
    pub detections: DetectionCounts,
    pub result: DetectionRiskResult,
    pub recommendations: Vec<String>,
}

impl ScanReport {
    pub fn new(detections: DetectionCounts, result: DetectionRiskResult) -> Self {
        let recommendations = recommendation_lines(&detections)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            detections,
            result,
            recommendations,
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.detections.has_detections() {
            writeln!(f, "No breeding sites detected!")?;
            writeln!(f)?;
            return writeln!(f, "Your environment appears safe. Keep it clean!");
        }

        writeln!(f, "DENGUE RISK SCAN RESULTS")?;
        writeln!(f)?;
        writeln!(f, "Risk Level: {}", self.result.level)?;
        writeln!(f, "Risk Score: {:.1}", self.result.score)?;
        writeln!(f)?;
        writeln!(f, "Detected Items:")?;
        for (class, n) in self.detections.iter() {
            writeln!(f, "  - {class}: {n}")?;
        }
        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        for line in &self.recommendations {
            writeln!(f, "  - {line}")?;
        }
        Ok(())
    }
}
