use std::collections::BTreeMap;

use netzero_game::numbers::usize_to_f64;
use netzero_game::{
    DecisionData, GameState, QuestSession, RunSummary, calculate_overall_score,
};
use serde::Serialize;

use crate::logic::policy::Strategy;

/// Configuration for one automated playthrough.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub strategy: Strategy,
    pub seed: u64,
}

/// Snapshot of one resolved decision.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionTrace {
    pub decision_id: String,
    pub option_id: String,
    pub rationale: Option<String>,
    pub score_after: i32,
}

/// Result of one full playthrough under a policy.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub strategy: String,
    pub seed: u64,
    pub score: i32,
    pub outcome: String,
    pub final_year: i32,
    pub decisions: Vec<DecisionTrace>,
    pub invariant_failures: Vec<String>,
    #[serde(skip)]
    pub summary: RunSummary,
}

impl RunRecord {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.invariant_failures.is_empty()
    }
}

/// Play the whole catalog under the configured strategy, validating the
/// engine contract after every step.
#[must_use]
pub fn run_quest(catalog: &DecisionData, config: RunConfig, verbose: bool) -> RunRecord {
    let mut policy = config.strategy.create_policy(config.seed);
    let mut session = QuestSession::new(catalog.clone());
    let mut traces = Vec::with_capacity(catalog.len());
    let mut failures = Vec::new();

    while let Some(decision) = session.current_decision().cloned() {
        let pick = policy.pick_option(session.state(), &decision);
        let option_index = pick.option_index.min(decision.options.len().saturating_sub(1));
        let Some(option) = decision.options.get(option_index) else {
            failures.push(format!("decision '{}' has no options", decision.id));
            break;
        };
        let option_id = option.id.clone();
        let before = session.state().clone();

        match session.choose(&option_id) {
            Ok(step) => {
                validate_step(&before, session.state(), &mut failures);
                if verbose {
                    log::info!(
                        "{} [{}] {} -> {} (score {})",
                        policy.name(),
                        config.seed,
                        step.decision_id,
                        step.option_id,
                        step.score
                    );
                }
                traces.push(DecisionTrace {
                    decision_id: step.decision_id,
                    option_id: step.option_id,
                    rationale: pick.rationale,
                    score_after: step.score,
                });
            }
            Err(err) => {
                failures.push(format!("choose('{option_id}') failed: {err}"));
                break;
            }
        }
    }

    let summary = session.summary();
    RunRecord {
        strategy: config.strategy.label().to_string(),
        seed: config.seed,
        score: summary.score,
        outcome: summary.outcome.to_string(),
        final_year: summary.final_year,
        decisions: traces,
        invariant_failures: failures,
        summary,
    }
}

/// Check the engine contract for one applied step.
fn validate_step(before: &GameState, after: &GameState, failures: &mut Vec<String>) {
    let step = after.decisions.len();
    if !after.indicators.in_bounds() {
        failures.push(format!("step {step}: indicators out of bounds"));
    }
    if after.year != after.expected_year() {
        failures.push(format!(
            "step {step}: year {} != expected {}",
            after.year,
            after.expected_year()
        ));
    }
    if after.decisions.len() != before.decisions.len() + 1 {
        failures.push(format!("step {step}: history did not grow by one"));
    }
    if !after
        .decisions
        .iter()
        .zip(before.decisions.iter())
        .all(|(a, b)| a.id == b.id)
    {
        failures.push(format!("step {step}: history prefix changed"));
    }
    let snapshot = after.clone();
    let first = calculate_overall_score(after);
    let second = calculate_overall_score(after);
    if first != second || &snapshot != after {
        failures.push(format!("step {step}: scoring is not pure"));
    }
}

/// Per-strategy aggregate over a sweep.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAggregate {
    pub strategy: String,
    pub runs: usize,
    pub min_score: i32,
    pub max_score: i32,
    pub mean_score: f64,
    pub outcomes: BTreeMap<String, usize>,
    pub failed_runs: usize,
}

/// Fold run records into per-strategy aggregates, preserving first-seen
/// strategy order.
#[must_use]
pub fn aggregate(records: &[RunRecord]) -> Vec<StrategyAggregate> {
    let mut order = Vec::new();
    let mut buckets: BTreeMap<&str, Vec<&RunRecord>> = BTreeMap::new();
    for record in records {
        if !buckets.contains_key(record.strategy.as_str()) {
            order.push(record.strategy.as_str());
        }
        buckets.entry(record.strategy.as_str()).or_default().push(record);
    }

    order
        .into_iter()
        .map(|strategy| {
            let runs = &buckets[strategy];
            let scores: Vec<i32> = runs.iter().map(|r| r.score).collect();
            let total: i64 = scores.iter().map(|s| i64::from(*s)).sum();
            #[allow(clippy::cast_precision_loss)]
            let mean_score = total as f64 / usize_to_f64(runs.len()).max(1.0);
            let mut outcomes = BTreeMap::new();
            for record in runs {
                *outcomes.entry(record.outcome.clone()).or_insert(0) += 1;
            }
            StrategyAggregate {
                strategy: strategy.to_string(),
                runs: runs.len(),
                min_score: scores.iter().copied().min().unwrap_or(0),
                max_score: scores.iter().copied().max().unwrap_or(0),
                mean_score,
                outcomes,
                failed_runs: runs.iter().filter(|r| !r.passed()).count(),
            }
        })
        .collect()
}
