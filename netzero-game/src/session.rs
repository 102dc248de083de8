use thiserror::Error;

use crate::data::{Decision, DecisionData};
use crate::engine::{EngineError, apply_decision};
use crate::result::{RunSummary, run_summary};
use crate::score::calculate_overall_score;
use crate::state::GameState;

/// Error raised while driving a session through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Every catalog decision has already been resolved.
    #[error("the decision catalog is exhausted")]
    CatalogExhausted,
}

/// Result of resolving one decision step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub decision_id: String,
    pub option_id: String,
    pub year: i32,
    pub score: i32,
    pub completed: bool,
}

/// High-level session walking an injected catalog in order.
///
/// The engine itself is order-agnostic; the session adds the interactive
/// sequencing the catalog implies and nothing more.
#[derive(Debug, Clone)]
pub struct QuestSession {
    catalog: DecisionData,
    state: GameState,
    cursor: usize,
}

impl QuestSession {
    /// Start a fresh session over a catalog.
    #[must_use]
    pub fn new(catalog: DecisionData) -> Self {
        Self {
            catalog,
            state: GameState::default(),
            cursor: 0,
        }
    }

    /// Resume a session from an existing state, continuing after its history.
    #[must_use]
    pub fn from_state(catalog: DecisionData, state: GameState) -> Self {
        let cursor = state.decisions.len().min(catalog.decisions.len());
        Self {
            catalog,
            state,
            cursor,
        }
    }

    /// The decision awaiting a choice, if the catalog is not exhausted.
    #[must_use]
    pub fn current_decision(&self) -> Option<&Decision> {
        self.catalog.decisions.get(self.cursor)
    }

    /// Whether every catalog decision has been applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.catalog.decisions.len()
    }

    /// Decisions still awaiting a choice.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.catalog.decisions.len() - self.cursor
    }

    /// Resolve `option_id` against the current decision and advance.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CatalogExhausted`] once the catalog is
    /// complete, or [`EngineError::InvalidOption`] when the id does not name
    /// an option of the current decision. The session is unchanged on error.
    pub fn choose(&mut self, option_id: &str) -> Result<StepOutcome, SessionError> {
        let Some(decision) = self.catalog.decisions.get(self.cursor) else {
            return Err(SessionError::CatalogExhausted);
        };
        let option =
            decision
                .option_by_id(option_id)
                .ok_or_else(|| EngineError::InvalidOption {
                    decision_id: decision.id.clone(),
                    option_id: option_id.to_string(),
                })?;

        self.state = apply_decision(&self.state, decision, option)?;
        self.cursor += 1;

        Ok(StepOutcome {
            decision_id: decision.id.clone(),
            option_id: option_id.to_string(),
            year: self.state.year,
            score: calculate_overall_score(&self.state),
            completed: self.is_complete(),
        })
    }

    /// Borrow the underlying game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Borrow the injected catalog.
    #[must_use]
    pub const fn catalog(&self) -> &DecisionData {
        &self.catalog
    }

    /// Completion-screen summary of the session so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        run_summary(&self.state)
    }

    /// Restart the run from the initial world, keeping the catalog.
    pub fn reset(&mut self) {
        self.state.reset();
        self.cursor = 0;
    }

    /// Consume the session, returning the underlying game state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
