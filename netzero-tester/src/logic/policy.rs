use std::fmt;

use netzero_game::{Decision, GameState, apply_decision, calculate_overall_score};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Decision returned by a [`PlayerPolicy`]
#[derive(Debug, Clone)]
pub struct PolicyDecision {
    pub option_index: usize,
    pub rationale: Option<String>,
}

impl PolicyDecision {
    #[must_use]
    pub fn new(option_index: usize, rationale: Option<String>) -> Self {
        Self {
            option_index,
            rationale,
        }
    }
}

/// Policy interface for automated play strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Select an option for the pending decision.
    fn pick_option(&mut self, state: &GameState, decision: &Decision) -> PolicyDecision;
}

/// Built-in strategies for automated sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Ambitious,
    Pragmatic,
    Balanced,
    Random,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::Ambitious, Self::Pragmatic, Self::Balanced, Self::Random];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ambitious => "Ambitious",
            Self::Pragmatic => "Pragmatic",
            Self::Balanced => "Balanced",
            Self::Random => "Random",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Self::Ambitious => "always takes the largest environment gain",
            Self::Pragmatic => "protects economic and social scores first",
            Self::Balanced => "one-step lookahead on the projected composite score",
            Self::Random => "uniform choice from a seeded generator",
        }
    }

    /// Parse a CSV token such as `ambitious` or `Random`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "ambitious" => Some(Self::Ambitious),
            "pragmatic" => Some(Self::Pragmatic),
            "balanced" => Some(Self::Balanced),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy + Send> {
        match self {
            Self::Ambitious => Box::new(AmbitiousPolicy),
            Self::Pragmatic => Box::new(PragmaticPolicy),
            Self::Balanced => Box::new(BalancedPolicy),
            Self::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct AmbitiousPolicy;
struct PragmaticPolicy;
struct BalancedPolicy;

struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerPolicy for AmbitiousPolicy {
    fn name(&self) -> &'static str {
        "Ambitious"
    }

    fn pick_option(&mut self, _state: &GameState, decision: &Decision) -> PolicyDecision {
        let (idx, gain) = decision
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| (idx, option.impact.environment))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        PolicyDecision::new(idx, Some(format!("environment gain {gain}")))
    }
}

impl PlayerPolicy for PragmaticPolicy {
    fn name(&self) -> &'static str {
        "Pragmatic"
    }

    fn pick_option(&mut self, _state: &GameState, decision: &Decision) -> PolicyDecision {
        let (idx, prosperity) = decision
            .options
            .iter()
            .enumerate()
            .map(|(idx, option)| (idx, option.impact.economy + option.impact.social))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        PolicyDecision::new(idx, Some(format!("prosperity gain {prosperity}")))
    }
}

impl PlayerPolicy for BalancedPolicy {
    fn name(&self) -> &'static str {
        "Balanced"
    }

    fn pick_option(&mut self, state: &GameState, decision: &Decision) -> PolicyDecision {
        let mut best_idx = 0;
        let mut best_score = i32::MIN;
        for (idx, option) in decision.options.iter().enumerate() {
            let Ok(projected) = apply_decision(state, decision, option) else {
                continue;
            };
            let score = calculate_overall_score(&projected);
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        PolicyDecision::new(best_idx, Some(format!("projected score {best_score}")))
    }
}

impl PlayerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn pick_option(&mut self, _state: &GameState, decision: &Decision) -> PolicyDecision {
        if decision.options.is_empty() {
            return PolicyDecision::new(0, Some("no options".to_string()));
        }
        let idx = self.rng.gen_range(0..decision.options.len());
        PolicyDecision::new(idx, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netzero_game::DecisionData;

    fn catalog() -> DecisionData {
        DecisionData::from_json(include_str!("../../../assets/data/decisions.json")).unwrap()
    }

    #[test]
    fn ambitious_takes_the_largest_environment_gain() {
        let catalog = catalog();
        let state = GameState::default();
        let mut policy = Strategy::Ambitious.create_policy(0);

        let pick = policy.pick_option(&state, &catalog.decisions[0]);
        assert_eq!(catalog.decisions[0].options[pick.option_index].id, "high-tax");
    }

    #[test]
    fn pragmatic_prefers_prosperity() {
        let catalog = catalog();
        let state = GameState::default();
        let mut policy = Strategy::Pragmatic.create_policy(0);

        let pick = policy.pick_option(&state, &catalog.decisions[0]);
        assert_eq!(catalog.decisions[0].options[pick.option_index].id, "no-tax");
    }

    #[test]
    fn balanced_lookahead_beats_or_matches_every_option() {
        let catalog = catalog();
        let state = GameState::default();
        let decision = &catalog.decisions[0];
        let mut policy = Strategy::Balanced.create_policy(0);

        let pick = policy.pick_option(&state, decision);
        let chosen = &decision.options[pick.option_index];
        let chosen_score =
            calculate_overall_score(&apply_decision(&state, decision, chosen).unwrap());

        for option in &decision.options {
            let score =
                calculate_overall_score(&apply_decision(&state, decision, option).unwrap());
            assert!(chosen_score >= score);
        }
    }

    #[test]
    fn random_policy_is_reproducible_per_seed() {
        let catalog = catalog();
        let state = GameState::default();
        let decision = &catalog.decisions[1];

        let mut first = Strategy::Random.create_policy(77);
        let mut second = Strategy::Random.create_policy(77);
        for _ in 0..8 {
            assert_eq!(
                first.pick_option(&state, decision).option_index,
                second.pick_option(&state, decision).option_index
            );
        }
    }

    #[test]
    fn strategy_tokens_parse_case_insensitively() {
        assert_eq!(Strategy::parse(" Balanced "), Some(Strategy::Balanced));
        assert_eq!(Strategy::parse("RANDOM"), Some(Strategy::Random));
        assert_eq!(Strategy::parse("bogus"), None);
    }
}
