use serde::{Deserialize, Serialize};

use crate::level::DangerLevel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskResult {
    /// Finalized score in `0..=10`.
    pub score: u8,
    pub level: DangerLevel,
    pub recommended_action: String,
    pub suggestions: Vec<String>,
}
