use crate::input::RiskInput;

pub const DEFAULT_SUGGESTION: &str = "Maintain routine monitoring and public education";

struct SuggestionRule {
    applies: fn(&RiskInput) -> bool,
    text: &'static str,
}

// Thresholds differ from the scoring thresholds in scorer.rs.
const RULES: [SuggestionRule; 6] = [
    SuggestionRule {
        applies: |i| i.construction_present,
        text: "Inspect construction sites and drains; enforce water management",
    },
    SuggestionRule {
        applies: |i| i.humidity_pct >= 75.0,
        text: "Increase stagnant water checks (humid conditions favor mosquitoes)",
    },
    SuggestionRule {
        applies: |i| i.temperature_c >= 30.0,
        text: "Focus on outdoor breeding spots; adult mosquitoes more active",
    },
    SuggestionRule {
        applies: |i| i.rainfall_mm >= 50.0,
        text: "Clear rainwater from containers and debris",
    },
    SuggestionRule {
        applies: |i| i.historical_cases >= 5,
        text: "Conduct targeted house-to-house inspections in clusters",
    },
    SuggestionRule {
        applies: |i| i.active_clusters >= 3,
        text: "Set up temporary cluster response teams",
    },
];

/// Mitigation suggestions for the raw input, in rule order.
///
/// Falls back to [`DEFAULT_SUGGESTION`] when no rule fires.
pub fn suggestions_for(input: &RiskInput) -> Vec<String> {
    let out: Vec<String> = RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.text.to_string())
        .collect();

    if out.is_empty() {
        vec![DEFAULT_SUGGESTION.to_string()]
    } else {
        out
    }
}
