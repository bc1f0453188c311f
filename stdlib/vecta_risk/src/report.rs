use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::RiskInput;
use crate::result::RiskResult;
use crate::scorer::MAX_SCORE;

/// An evaluated area: what went in and what came out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentReport {
    pub area: String,
    pub input: RiskInput,
    pub result: RiskResult,
}

impl AssessmentReport {
    pub fn new(area: impl Into<String>, input: RiskInput, result: RiskResult) -> Self {
        Self {
            area: area.into(),
            input,
            result,
        }
    }

    /// Parameter/value rows of the input summary table.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let i = &self.input;
        vec![
            ("Area", self.area.clone()),
            (
                "Construction Sites",
                (if i.construction_present { "Yes" } else { "No" }).to_string(),
            ),
            ("Humidity (%)", i.humidity_pct.to_string()),
            ("Temperature (C)", i.temperature_c.to_string()),
            ("Recent Rainfall (mm)", i.rainfall_mm.to_string()),
            ("Cases (Last Week)", i.historical_cases.to_string()),
            ("Active Clusters", i.active_clusters.to_string()),
        ]
    }
}

impl fmt::Display for AssessmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;
        writeln!(f, "Dengue risk for {}", self.area)?;
        writeln!(f, "Risk Score: {}/{MAX_SCORE}", r.score)?;
        writeln!(f, "Danger Level: {}", r.level)?;
        writeln!(f, "Active Clusters: {}", self.input.active_clusters)?;
        writeln!(f)?;
        writeln!(f, "Recommended Action Level:")?;
        writeln!(f, "  {}", r.recommended_action)?;
        writeln!(f)?;
        writeln!(f, "Tailored Mitigation Suggestions:")?;
        for (n, s) in r.suggestions.iter().enumerate() {
            writeln!(f, "  {}. {s}", n + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "Input Summary:")?;
        for (param, value) in self.summary_rows() {
            writeln!(f, "  {param:<22}{value}")?;
        }
        Ok(())
    }
}
