use serde::{Deserialize, Serialize};

use crate::input::RiskInput;
use crate::level::DangerLevel;
use crate::result::RiskResult;
use crate::suggest::suggestions_for;

pub const MAX_SCORE: u8 = 10;

/// Inputs that can raise the score, in the order they are accumulated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskFactor {
    Construction,
    Humidity,
    Temperature,
    Rainfall,
    HistoricalCases,
    ActiveClusters,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::Construction,
        RiskFactor::Humidity,
        RiskFactor::Temperature,
        RiskFactor::Rainfall,
        RiskFactor::HistoricalCases,
        RiskFactor::ActiveClusters,
    ];

    /// Points this factor adds for the given input. Never negative.
    pub fn contribution(&self, input: &RiskInput) -> f64 {
        match self {
            RiskFactor::Construction => {
                if input.construction_present {
                    2.0
                } else {
                    0.0
                }
            }
            // Linear ramp from 60% (+0) to 75% (+2).
            RiskFactor::Humidity => {
                if input.humidity_pct > 60.0 {
                    ((input.humidity_pct - 60.0) / 7.5).clamp(0.0, 2.0)
                } else {
                    0.0
                }
            }
            RiskFactor::Temperature => {
                if input.temperature_c >= 30.0 {
                    1.5
                } else if input.temperature_c >= 26.0 {
                    0.8
                } else {
                    0.0
                }
            }
            RiskFactor::Rainfall => {
                if input.rainfall_mm >= 50.0 {
                    2.0
                } else if input.rainfall_mm >= 20.0 {
                    1.0
                } else {
                    0.0
                }
            }
            RiskFactor::HistoricalCases => {
                if input.historical_cases >= 20 {
                    3.0
                } else if input.historical_cases >= 5 {
                    1.0
                } else {
                    0.0
                }
            }
            RiskFactor::ActiveClusters => {
                if input.active_clusters >= 3 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorContribution {
    pub factor: RiskFactor,
    pub contribution: f64,
}

/// Per-factor view of a score, before and after finalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub contributions: Vec<FactorContribution>,
    pub raw_total: f64,
    pub score: u8,
}

/// Clamp to [`MAX_SCORE`] first, then round half to even.
///
/// A raw total of 2.5 finalizes to 2, 3.5 to 4.
pub fn finalize_score(raw_total: f64) -> u8 {
    let clamped = raw_total.min(f64::from(MAX_SCORE));
    clamped.round_ties_even().max(0.0) as u8
}

/// Stateless dengue danger scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskScorer;

impl RiskScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn breakdown(&self, input: &RiskInput) -> ScoreBreakdown {
        let mut contributions = Vec::with_capacity(RiskFactor::ALL.len());
        let mut raw_total = 0.0;

        for factor in RiskFactor::ALL {
            let c = factor.contribution(input);
            log::debug!("risk factor {factor:?} contributes {c:.3}");
            contributions.push(FactorContribution {
                factor,
                contribution: c,
            });
            raw_total += c;
        }

        let score = finalize_score(raw_total);
        log::debug!("raw risk total {raw_total:.3} finalized to {score}");

        ScoreBreakdown {
            contributions,
            raw_total,
            score,
        }
    }

    pub fn evaluate(&self, input: &RiskInput) -> RiskResult {
        let breakdown = self.breakdown(input);
        let level = DangerLevel::from_score(breakdown.score);
        log::debug!("score {} classified as {level}", breakdown.score);

        RiskResult {
            score: breakdown.score,
            level,
            recommended_action: level.recommended_action().to_string(),
            suggestions: suggestions_for(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input() -> RiskInput {
        RiskInput::new(false, 0.0, 15.0, 0.0, 0, 0)
    }

    #[test]
    fn humidity_ramp_is_linear_and_capped() {
        let at = |h: f64| {
            RiskFactor::Humidity.contribution(&RiskInput {
                humidity_pct: h,
                ..input()
            })
        };
        assert_abs_diff_eq!(at(60.0), 0.0);
        assert_abs_diff_eq!(at(67.5), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(at(75.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(at(100.0), 2.0);
        assert_abs_diff_eq!(at(-20.0), 0.0);
    }

    #[test]
    fn temperature_bands_do_not_stack() {
        let at = |t: f64| {
            RiskFactor::Temperature.contribution(&RiskInput {
                temperature_c: t,
                ..input()
            })
        };
        assert_abs_diff_eq!(at(25.9), 0.0);
        assert_abs_diff_eq!(at(26.0), 0.8);
        assert_abs_diff_eq!(at(29.9), 0.8);
        assert_abs_diff_eq!(at(30.0), 1.5);
        assert_abs_diff_eq!(at(45.0), 1.5);
    }

    #[test]
    fn nan_readings_contribute_nothing() {
        let nan = RiskInput {
            humidity_pct: f64::NAN,
            temperature_c: f64::NAN,
            rainfall_mm: f64::NAN,
            ..input()
        };
        let b = RiskScorer::new().breakdown(&nan);
        assert_abs_diff_eq!(b.raw_total, 0.0);
        assert_eq!(b.score, 0);
    }

    #[test]
    fn finalize_clamps_before_rounding() {
        assert_eq!(finalize_score(11.5), 10);
        assert_eq!(finalize_score(10.0), 10);
        assert_eq!(finalize_score(9.5), 10);
        assert_eq!(finalize_score(8.5), 8);
        assert_eq!(finalize_score(2.5), 2);
        assert_eq!(finalize_score(3.5), 4);
        assert_eq!(finalize_score(0.0), 0);
    }

    #[test]
    fn breakdown_lists_every_factor_in_order() {
        let b = RiskScorer::new().breakdown(&RiskInput::new(true, 70.0, 30.0, 0.0, 39, 5));
        let factors: Vec<RiskFactor> = b.contributions.iter().map(|c| c.factor).collect();
        assert_eq!(factors, RiskFactor::ALL.to_vec());
        let sum: f64 = b.contributions.iter().map(|c| c.contribution).sum();
        assert_abs_diff_eq!(sum, b.raw_total);
        assert_eq!(b.score, 9);
    }
}
