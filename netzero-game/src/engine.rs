//! Decision application engine.

use thiserror::Error;

use crate::constants::{LOG_DECISION_PREFIX, RENEWABLE_ENVIRONMENT_COUPLING, SHARE_MAX, SHARE_MIN, YEAR_STEP};
use crate::data::{Decision, DecisionOption};
use crate::state::GameState;

/// Error raised when a decision/option pairing is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The chosen option does not belong to the decision it was paired with.
    #[error("option '{option_id}' does not belong to decision '{decision_id}'")]
    InvalidOption {
        decision_id: String,
        option_id: String,
    },
}

/// Apply a chosen option to the state, returning the successor state.
///
/// The input state is never modified; on error callers keep their previous
/// snapshot untouched. Identical inputs always produce identical outputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidOption`] if `option` is not one of
/// `decision.options`.
pub fn apply_decision(
    state: &GameState,
    decision: &Decision,
    option: &DecisionOption,
) -> Result<GameState, EngineError> {
    if decision.option_by_id(&option.id).is_none() {
        return Err(EngineError::InvalidOption {
            decision_id: decision.id.clone(),
            option_id: option.id.clone(),
        });
    }

    let impact = option.impact;
    let mut next = state.clone();

    next.indicators.global_temperature += impact.temperature;
    next.indicators.co2_concentration += impact.co2;
    next.indicators.economic_score += impact.economy;
    next.indicators.environment_score += impact.environment;
    next.indicators.social_score += impact.social;

    // Renewable share tracks the environment delta from the pre-update
    // share, not the post-update environment score.
    next.indicators.renewable_percent = (state.indicators.renewable_percent
        + impact.environment * RENEWABLE_ENVIRONMENT_COUPLING)
        .clamp(SHARE_MIN, SHARE_MAX);

    next.year += YEAR_STEP;
    next.decisions.push(decision.clone());
    next.logs
        .push(format!("{LOG_DECISION_PREFIX}{}.{}", decision.id, option.id));
    next.indicators.clamp();

    Ok(next)
}
