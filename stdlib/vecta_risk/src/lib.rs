//! Dengue danger scoring.
//!
//! Maps construction activity, weather and case counts for an area to a
//! score in `0..=10`, a [`DangerLevel`], an action level and a list of
//! mitigation suggestions. Everything here is pure and allocation-light;
//! fetching and validating the readings is the caller's job.

pub mod input;
pub mod level;
pub mod report;
pub mod result;
pub mod scorer;
pub mod suggest;

pub use input::RiskInput;
pub use level::DangerLevel;
pub use report::AssessmentReport;
pub use result::RiskResult;
pub use scorer::{finalize_score, RiskFactor, RiskScorer, ScoreBreakdown, MAX_SCORE};
pub use suggest::{suggestions_for, DEFAULT_SUGGESTION};

/// Score one area from its raw readings.
pub fn evaluate_risk(
    construction_present: bool,
    humidity_pct: f64,
    temperature_c: f64,
    rainfall_mm: f64,
    historical_cases: u32,
    active_clusters: u32,
) -> RiskResult {
    let input = RiskInput::new(
        construction_present,
        humidity_pct,
        temperature_c,
        rainfall_mm,
        historical_cases,
        active_clusters,
    );
    RiskScorer::new().evaluate(&input)
}
