//! Four-tier outcome classification for finished runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{OUTCOME_MIXED_MIN, OUTCOME_NET_ZERO_MIN, OUTCOME_ON_TRACK_MIN};
use crate::score::calculate_overall_score;
use crate::state::GameState;

/// Classification of a run by its composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Composite score of 80 or above
    NetZero,
    /// Composite score in 60..=79
    OnTrack,
    /// Composite score in 40..=59
    Mixed,
    /// Composite score below 40
    Crisis,
}

impl Outcome {
    /// Classify a composite score. Thresholds are inclusive lower bounds.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score >= OUTCOME_NET_ZERO_MIN {
            Self::NetZero
        } else if score >= OUTCOME_ON_TRACK_MIN {
            Self::OnTrack
        } else if score >= OUTCOME_MIXED_MIN {
            Self::Mixed
        } else {
            Self::Crisis
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetZero => "net_zero",
            Self::OnTrack => "on_track",
            Self::Mixed => "mixed",
            Self::Crisis => "crisis",
        }
    }

    /// Fixed completion-screen message for this tier.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NetZero => {
                "🌟 Net Zero Achieved! You've successfully guided humanity to a sustainable future. Clean energy powers the world, forests are thriving, and communities are resilient."
            }
            Self::OnTrack => {
                "🌱 On Track for Success! Significant progress has been made toward sustainability. With continued effort, net zero is within reach."
            }
            Self::Mixed => {
                "⚠️ Mixed Results. Some positive changes have been implemented, but more aggressive action is needed to prevent dangerous climate change."
            }
            Self::Crisis => {
                "🔥 Climate Crisis Continues. Current policies are insufficient to prevent catastrophic warming. Urgent action is required."
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification text for a state, keyed off its composite score.
#[must_use]
pub fn scenario_outcome(state: &GameState) -> &'static str {
    Outcome::from_score(calculate_overall_score(state)).message()
}
