//! End of run summary construction.

use serde::{Deserialize, Serialize};

use crate::constants::{
    RENEWABLE_SEVERITY_LOW, RENEWABLE_SEVERITY_MEDIUM, SCORE_SEVERITY_LOW, SCORE_SEVERITY_MEDIUM,
    TEMPERATURE_SEVERITY_CRITICAL, TEMPERATURE_SEVERITY_HIGH,
};
use crate::outcome::Outcome;
use crate::regions::RiskLevel;
use crate::score::{ScoreBreakdown, calculate_overall_score, score_breakdown};
use crate::state::{GameState, Indicators};
use crate::story::generate_story;

/// Severity band for the final warming level.
#[must_use]
pub fn temperature_severity(temperature: f64) -> RiskLevel {
    if temperature > TEMPERATURE_SEVERITY_CRITICAL {
        RiskLevel::Critical
    } else if temperature > TEMPERATURE_SEVERITY_HIGH {
        RiskLevel::High
    } else {
        RiskLevel::Medium
    }
}

/// Severity band for the final renewable share. High shares read as low risk.
#[must_use]
pub fn renewable_severity(percent: f64) -> RiskLevel {
    if percent > RENEWABLE_SEVERITY_LOW {
        RiskLevel::Low
    } else if percent > RENEWABLE_SEVERITY_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Severity band for the composite score.
#[must_use]
pub const fn score_severity(score: i32) -> RiskLevel {
    if score > SCORE_SEVERITY_LOW {
        RiskLevel::Low
    } else if score > SCORE_SEVERITY_MEDIUM {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Complete summary of a run for display or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub final_year: i32,
    pub indicators: Indicators,
    pub decisions_applied: usize,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    pub outcome: Outcome,
    pub outcome_message: String,
    pub story: String,
    pub temperature_risk: RiskLevel,
    pub renewable_risk: RiskLevel,
    pub score_risk: RiskLevel,
}

/// Build the completion-screen summary for a state.
#[must_use]
pub fn run_summary(state: &GameState) -> RunSummary {
    let score = calculate_overall_score(state);
    let outcome = Outcome::from_score(score);
    RunSummary {
        final_year: state.year,
        indicators: state.indicators,
        decisions_applied: state.decisions.len(),
        score,
        breakdown: score_breakdown(state),
        outcome,
        outcome_message: outcome.message().to_string(),
        story: generate_story(state),
        temperature_risk: temperature_severity(state.indicators.global_temperature),
        renewable_risk: renewable_severity(state.indicators.renewable_percent),
        score_risk: score_severity(score),
    }
}
