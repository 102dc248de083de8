//! Narrative generation for finished runs.
//!
//! The narrative itself is deterministic: one fixed template per tier,
//! parameterized only by a projected year. Title selection is the single
//! randomized touch and takes an injected generator so replays with the
//! same stream reproduce the same title.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{OUTCOME_MIXED_MIN, OUTCOME_NET_ZERO_MIN, STORY_PROJECTION_YEARS};
use crate::score::calculate_overall_score;
use crate::state::GameState;

const FLOURISHING_TITLES: [&str; 4] = [
    "Gardens of Tomorrow",
    "The Green Renaissance",
    "Harmony Restored",
    "Earth's New Dawn",
];

const ADAPTIVE_TITLES: [&str; 4] = [
    "The Turning Tide",
    "Bridges to Tomorrow",
    "Rising Above",
    "The Resilient Generation",
];

const HARDSHIP_TITLES: [&str; 4] = [
    "Against All Odds",
    "The Last Innovation",
    "Phoenix Rising",
    "Humanity's Edge",
];

/// Narrative band for a run, a three-tier collapse of the outcome tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryTier {
    /// Composite score of 80 or above
    Flourishing,
    /// Composite score in 40..=79
    Adaptive,
    /// Composite score below 40
    Hardship,
}

impl StoryTier {
    /// Band a composite score.
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        if score >= OUTCOME_NET_ZERO_MIN {
            Self::Flourishing
        } else if score >= OUTCOME_MIXED_MIN {
            Self::Adaptive
        } else {
            Self::Hardship
        }
    }

    /// Title candidates for this band.
    #[must_use]
    pub const fn titles(self) -> &'static [&'static str] {
        match self {
            Self::Flourishing => &FLOURISHING_TITLES,
            Self::Adaptive => &ADAPTIVE_TITLES,
            Self::Hardship => &HARDSHIP_TITLES,
        }
    }
}

/// Render the narrative for a state, projected a generation past the run.
#[must_use]
pub fn generate_story(state: &GameState) -> String {
    let year = state.year + STORY_PROJECTION_YEARS;
    match StoryTier::from_score(calculate_overall_score(state)) {
        StoryTier::Flourishing => format!(
            "In {year}, Sarah walks through the vertical gardens of Neo-Singapore, where buildings breathe with living walls and the air tastes clean. Solar collectors glisten like jewels on every surface, while underground, the old subway tunnels have been converted into mushroom farms. The last coal plant was decommissioned a decade ago, now serving as a museum where children learn about the \"dark age\" of fossil fuels. Ocean thermal energy converters provide endless power, and the Great Barrier Reef, brought back from the brink, hosts virtual reality tours for millions of students worldwide. This is the world your decisions helped create."
        ),
        StoryTier::Adaptive => format!(
            "The year {year} finds Marcus adjusting his climate suit as he steps outside. The morning air is thick but manageable, filtered by the massive atmospheric processors that ring the city. Half the world runs on fusion power now, but the transition came almost too late. The old coastlines are gone, protected by towering sea walls that double as vertical farms. In the distance, rewilding drones plant climate-adapted trees in the expanding desert. It's not the future anyone wanted, but human ingenuity has found a way to adapt. Your choices helped shape this resilient, if challenging, world."
        ),
        StoryTier::Hardship => format!(
            "Elena checks her water rations as she prepares for another day in {year}. The great migrations have stabilized somewhat, with floating cities housing millions of climate refugees. Underground cities thrive where the surface has become too hostile, connected by hyperloop networks that run on geothermal energy. The wild forests are gone, replaced by carefully managed carbon farms, but somehow nature has found a way to adapt. Even in this harsh future, communities have learned to live together, sharing resources and knowledge. The choices made in the 2020s set humanity on a difficult path, but the human spirit endures."
        ),
    }
}

/// Pick a story title for a band from its candidate pool.
pub fn story_title<R: Rng + ?Sized>(tier: StoryTier, rng: &mut R) -> &'static str {
    let pool = tier.titles();
    pool[rng.gen_range(0..pool.len())]
}
