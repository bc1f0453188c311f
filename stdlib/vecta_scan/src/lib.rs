//! Breeding-site scan risk.
//!
//! Turns per-class counts from an external object detector into a weighted
//! score and a [`ScanRiskLevel`], plus the clean-up advice shown to whoever
//! sent the photo.

pub mod aggregate;
pub mod counts;
pub mod level;
pub mod report;
pub mod site;

pub use aggregate::{DetectionRiskAggregator, DetectionRiskResult};
pub use counts::DetectionCounts;
pub use level::ScanRiskLevel;
pub use report::{recommendation_lines, ScanReport};
pub use site::{weight, BreedingSite, DEFAULT_WEIGHT};

pub fn evaluate_detection_risk(detection_counts: &DetectionCounts) -> DetectionRiskResult {
    DetectionRiskAggregator::new().evaluate(detection_counts)
}
