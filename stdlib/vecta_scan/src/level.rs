use std::fmt;

use serde::{Deserialize, Serialize};

/// Scan risk bands, independent of the area danger scale. Thresholds are 2
/// and 5 on an unbounded score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanRiskLevel {
    Low,
    Medium,
    High,
}

pub const HIGH_THRESHOLD: f64 = 5.0;
pub const MEDIUM_THRESHOLD: f64 = 2.0;

impl ScanRiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            ScanRiskLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            ScanRiskLevel::Medium
        } else {
            ScanRiskLevel::Low
        }
    }

    /// Label used in scan messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ScanRiskLevel::Low => "LOW RISK",
            ScanRiskLevel::Medium => "MEDIUM RISK",
            ScanRiskLevel::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for ScanRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(ScanRiskLevel::from_score(0.0), ScanRiskLevel::Low);
        assert_eq!(ScanRiskLevel::from_score(1.5), ScanRiskLevel::Low);
        assert_eq!(ScanRiskLevel::from_score(2.0), ScanRiskLevel::Medium);
        assert_eq!(ScanRiskLevel::from_score(4.99), ScanRiskLevel::Medium);
        assert_eq!(ScanRiskLevel::from_score(5.0), ScanRiskLevel::High);
        assert_eq!(ScanRiskLevel::from_score(250.0), ScanRiskLevel::High);
    }
}
