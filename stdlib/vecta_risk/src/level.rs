use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-level danger classification of a finalized risk score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DangerLevel {
    Low,
    Medium,
    High,
}

pub const HIGH_THRESHOLD: u8 = 6;
pub const MEDIUM_THRESHOLD: u8 = 3;

impl DangerLevel {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_THRESHOLD {
            DangerLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            DangerLevel::Medium
        } else {
            DangerLevel::Low
        }
    }

    /// Action level shown alongside the score. Depends only on the level.
    /// The texts carry no trailing period, as on the dashboard.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            DangerLevel::High => "Immediate — Enhanced surveillance, fogging where appropriate, community alerts, and intensive source reduction",
            DangerLevel::Medium => "Targeted inspections, community outreach, larvicide in hotspots, weekly monitoring",
            DangerLevel::Low => "Routine monitoring and public education; update weekly",
        }
    }

    /// Fill colour of the dashboard danger indicator.
    pub fn indicator_color(&self) -> &'static str {
        match self {
            DangerLevel::High => "#FF6B6B",
            DangerLevel::Medium => "#FFD93D",
            DangerLevel::Low => "#6BCB77",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DangerLevel::Low => "Low",
            DangerLevel::Medium => "Medium",
            DangerLevel::High => "High",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
