//! Composite scoring over a run state.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CO2_SCORE_BASELINE, CO2_SCORE_SLOPE, TEMPERATURE_SCORE_BASELINE, TEMPERATURE_SCORE_SLOPE,
    WEIGHT_CO2, WEIGHT_ENVIRONMENT, WEIGHT_RENEWABLE, WEIGHT_TEMPERATURE,
};
use crate::numbers::round_f64_to_i32;
use crate::state::GameState;

/// Component scores feeding the weighted composite.
///
/// Components are floored at zero but carry no upper clamp; temperature or
/// CO2 readings below their score baselines push a component past 100, and
/// the composite with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub temperature_score: f64,
    pub co2_score: f64,
    pub renewable_score: f64,
    pub environment_score: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the four components, unrounded.
    #[must_use]
    pub fn composite(&self) -> f64 {
        self.temperature_score * WEIGHT_TEMPERATURE
            + self.co2_score * WEIGHT_CO2
            + self.renewable_score * WEIGHT_RENEWABLE
            + self.environment_score * WEIGHT_ENVIRONMENT
    }
}

/// Compute the weighted score components for a state.
#[must_use]
pub fn score_breakdown(state: &GameState) -> ScoreBreakdown {
    let indicators = &state.indicators;
    let temperature_score = (100.0
        - (indicators.global_temperature - TEMPERATURE_SCORE_BASELINE) * TEMPERATURE_SCORE_SLOPE)
        .max(0.0);
    let co2_score =
        (100.0 - (indicators.co2_concentration - CO2_SCORE_BASELINE) * CO2_SCORE_SLOPE).max(0.0);

    ScoreBreakdown {
        temperature_score,
        co2_score,
        renewable_score: indicators.renewable_percent,
        environment_score: indicators.environment_score,
    }
}

/// Composite score for a state, rounded to the nearest integer.
#[must_use]
pub fn calculate_overall_score(state: &GameState) -> i32 {
    round_f64_to_i32(score_breakdown(state).composite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Indicators;

    fn state_with(indicators: Indicators) -> GameState {
        GameState {
            indicators,
            ..GameState::default()
        }
    }

    #[test]
    fn initial_world_scores_as_expected() {
        let state = GameState::default();
        let breakdown = score_breakdown(&state);

        // temp 1.2 -> 94, co2 420 -> 72, renewable 28, environment 40
        assert!((breakdown.temperature_score - 94.0).abs() < 1e-9);
        assert!((breakdown.co2_score - 72.0).abs() < 1e-9);
        assert!((breakdown.renewable_score - 28.0).abs() < 1e-9);
        assert!((breakdown.environment_score - 40.0).abs() < 1e-9);
        // 94*0.3 + 72*0.3 + 28*0.2 + 40*0.2 = 63.4 -> 63
        assert_eq!(calculate_overall_score(&state), 63);
    }

    #[test]
    fn components_floor_at_zero() {
        let state = state_with(Indicators {
            global_temperature: 4.0,
            co2_concentration: 600.0,
            renewable_percent: 0.0,
            economic_score: 0.0,
            environment_score: 0.0,
            social_score: 0.0,
        });
        let breakdown = score_breakdown(&state);

        assert!(breakdown.temperature_score.abs() < f64::EPSILON);
        assert!(breakdown.co2_score.abs() < f64::EPSILON);
        assert_eq!(calculate_overall_score(&state), 0);
    }

    #[test]
    fn composite_may_exceed_one_hundred() {
        let state = state_with(Indicators {
            global_temperature: 0.8,
            co2_concentration: 350.0,
            renewable_percent: 100.0,
            economic_score: 85.0,
            environment_score: 100.0,
            social_score: 88.0,
        });
        let breakdown = score_breakdown(&state);

        // temp 0.8 scores 106: floors apply, ceilings do not.
        assert!((breakdown.temperature_score - 106.0).abs() < 1e-9);
        assert_eq!(calculate_overall_score(&state), 102);
    }

    #[test]
    fn scoring_is_pure() {
        let state = GameState::default();
        let before = state.clone();

        let first = calculate_overall_score(&state);
        let second = calculate_overall_score(&state);

        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}
