use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_YEAR, CO2_MAX, CO2_MIN, INITIAL_CO2, INITIAL_ECONOMY, INITIAL_ENVIRONMENT,
    INITIAL_RENEWABLE, INITIAL_SOCIAL, INITIAL_TEMPERATURE, SHARE_MAX, SHARE_MIN, TEMPERATURE_MAX,
    TEMPERATURE_MIN, YEAR_STEP,
};
use crate::data::Decision;

/// Bounded global indicators tracked by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Warming above pre-industrial levels, degrees Celsius
    pub global_temperature: f64,
    /// Atmospheric CO2, parts per million
    pub co2_concentration: f64,
    /// Renewable share of the global energy mix, percent
    pub renewable_percent: f64,
    pub economic_score: f64,
    pub environment_score: f64,
    pub social_score: f64,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            global_temperature: INITIAL_TEMPERATURE,
            co2_concentration: INITIAL_CO2,
            renewable_percent: INITIAL_RENEWABLE,
            economic_score: INITIAL_ECONOMY,
            environment_score: INITIAL_ENVIRONMENT,
            social_score: INITIAL_SOCIAL,
        }
    }
}

impl Indicators {
    pub fn clamp(&mut self) {
        self.global_temperature = self.global_temperature.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX);
        self.co2_concentration = self.co2_concentration.clamp(CO2_MIN, CO2_MAX);
        self.renewable_percent = self.renewable_percent.clamp(SHARE_MIN, SHARE_MAX);
        self.economic_score = self.economic_score.clamp(SHARE_MIN, SHARE_MAX);
        self.environment_score = self.environment_score.clamp(SHARE_MIN, SHARE_MAX);
        self.social_score = self.social_score.clamp(SHARE_MIN, SHARE_MAX);
    }

    /// Whether every indicator currently sits inside its declared interval.
    #[must_use]
    pub fn in_bounds(&self) -> bool {
        let mut probe = *self;
        probe.clamp();
        probe == *self
    }
}

/// Complete snapshot of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub year: i32,
    #[serde(default)]
    pub indicators: Indicators,
    /// Applied decisions, insertion order = application order
    #[serde(default)]
    pub decisions: Vec<Decision>,
    /// Append-only message keys describing the run so far
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            year: BASE_YEAR,
            indicators: Indicators::default(),
            decisions: Vec::new(),
            logs: Vec::new(),
        }
    }
}

impl GameState {
    /// Number of decisions applied since the run began.
    #[must_use]
    pub fn decisions_applied(&self) -> usize {
        self.decisions.len()
    }

    /// The year this run should report after its applied decisions.
    #[must_use]
    pub fn expected_year(&self) -> i32 {
        let applied = i32::try_from(self.decisions.len()).unwrap_or(i32::MAX);
        BASE_YEAR.saturating_add(YEAR_STEP.saturating_mul(applied))
    }

    /// Discard the run and return to the initial world.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_world_matches_baseline() {
        let state = GameState::default();
        assert_eq!(state.year, 2024);
        assert!((state.indicators.global_temperature - 1.2).abs() < f64::EPSILON);
        assert!((state.indicators.co2_concentration - 420.0).abs() < f64::EPSILON);
        assert!((state.indicators.renewable_percent - 28.0).abs() < f64::EPSILON);
        assert!((state.indicators.economic_score - 50.0).abs() < f64::EPSILON);
        assert!((state.indicators.environment_score - 40.0).abs() < f64::EPSILON);
        assert!((state.indicators.social_score - 55.0).abs() < f64::EPSILON);
        assert!(state.decisions.is_empty());
        assert!(state.logs.is_empty());
    }

    #[test]
    fn clamp_pins_every_indicator_to_its_interval() {
        let mut indicators = Indicators {
            global_temperature: 11.0,
            co2_concentration: 120.0,
            renewable_percent: 140.0,
            economic_score: -3.0,
            environment_score: 250.0,
            social_score: -40.0,
        };
        assert!(!indicators.in_bounds());

        indicators.clamp();

        assert!((indicators.global_temperature - 4.0).abs() < f64::EPSILON);
        assert!((indicators.co2_concentration - 350.0).abs() < f64::EPSILON);
        assert!((indicators.renewable_percent - 100.0).abs() < f64::EPSILON);
        assert!(indicators.economic_score.abs() < f64::EPSILON);
        assert!((indicators.environment_score - 100.0).abs() < f64::EPSILON);
        assert!(indicators.social_score.abs() < f64::EPSILON);
        assert!(indicators.in_bounds());
    }

    #[test]
    fn state_serde_roundtrip_is_lossless() {
        let mut state = GameState::default();
        state.logs.push("log.decision.carbon-tax.high-tax".to_string());
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn reset_restores_the_initial_world() {
        let mut state = GameState::default();
        state.year = 2030;
        state.indicators.renewable_percent = 90.0;
        state.logs.push("log.decision.x.y".to_string());

        state.reset();

        assert_eq!(state, GameState::default());
    }
}
