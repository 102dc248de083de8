use anyhow::Result;
use colored::Colorize;
use netzero_game::{RegionData, RiskLevel};
use serde::Serialize;

use super::{RunRecord, StrategyAggregate};

pub fn generate_console_report(
    records: &[RunRecord],
    aggregates: &[StrategyAggregate],
    regions: &RegionData,
) {
    println!();
    println!("{}", "📊 Policy Sweep Results".bright_cyan().bold());
    println!("{}", "=======================".cyan());

    let total_runs = records.len();
    let failed_runs = records.iter().filter(|r| !r.passed()).count();
    println!("Total runs: {total_runs}");
    println!("Clean runs: {}", (total_runs - failed_runs).to_string().green());
    println!("Runs with invariant failures: {}", failed_runs.to_string().red());
    println!();

    for agg in aggregates {
        let status = if agg.failed_runs == 0 {
            "✅".green()
        } else {
            "❌".red()
        };
        println!("{} {}", status, agg.strategy.bold());
        println!(
            "   Score: min {} / mean {:.1} / max {} over {} run(s)",
            agg.min_score, agg.mean_score, agg.max_score, agg.runs
        );
        let tiers: Vec<String> = agg
            .outcomes
            .iter()
            .map(|(outcome, count)| format!("{outcome} x{count}"))
            .collect();
        println!("   Outcomes: {}", tiers.join(", "));
        println!();
    }

    for record in records.iter().filter(|r| !r.passed()) {
        println!(
            "{} {} (seed {})",
            "❌".red(),
            record.strategy.bold(),
            record.seed
        );
        for failure in &record.invariant_failures {
            println!("     • {}", failure.red());
        }
    }

    let critical: Vec<&str> = regions
        .regions
        .iter()
        .filter(|r| r.risk_level == RiskLevel::Critical)
        .map(|r| r.region.as_str())
        .collect();
    if !critical.is_empty() {
        println!(
            "{} {}",
            "🌡 Regions at critical risk:".bright_yellow(),
            critical.join(", ")
        );
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [RunRecord],
    aggregates: &'a [StrategyAggregate],
}

/// Render the sweep as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn generate_json_report(
    records: &[RunRecord],
    aggregates: &[StrategyAggregate],
) -> Result<String> {
    let report = JsonReport {
        records,
        aggregates,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[must_use]
pub fn generate_markdown_report(
    records: &[RunRecord],
    aggregates: &[StrategyAggregate],
) -> String {
    use std::fmt::Write as _;

    let mut out = String::from("# NetZero Policy Sweep Results\n\n");
    let failed_runs = records.iter().filter(|r| !r.passed()).count();

    out.push_str("## Summary\n\n");
    let _ = writeln!(out, "- **Total runs**: {}", records.len());
    let _ = writeln!(out, "- **Runs with invariant failures**: {failed_runs}\n");

    out.push_str("## Strategies\n\n");
    out.push_str("| Strategy | Runs | Min | Mean | Max | Outcomes |\n");
    out.push_str("|----------|------|-----|------|-----|----------|\n");
    for agg in aggregates {
        let tiers: Vec<String> = agg
            .outcomes
            .iter()
            .map(|(outcome, count)| format!("{outcome} x{count}"))
            .collect();
        let _ = writeln!(
            out,
            "| {} | {} | {} | {:.1} | {} | {} |",
            agg.strategy,
            agg.runs,
            agg.min_score,
            agg.mean_score,
            agg.max_score,
            tiers.join(", ")
        );
    }

    if failed_runs > 0 {
        out.push_str("\n## Failures\n\n");
        for record in records.iter().filter(|r| !r.passed()) {
            let _ = writeln!(out, "### {} (seed {})\n", record.strategy, record.seed);
            for failure in &record.invariant_failures {
                let _ = writeln!(out, "- {failure}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::assets::TesterAssets;
    use crate::logic::harness::{RunConfig, aggregate, run_quest};
    use crate::logic::policy::Strategy;

    fn sample() -> (Vec<RunRecord>, Vec<StrategyAggregate>) {
        let catalog = TesterAssets::load_default().catalog;
        let records = vec![
            run_quest(&catalog, RunConfig { strategy: Strategy::Ambitious, seed: 1 }, false),
            run_quest(&catalog, RunConfig { strategy: Strategy::Random, seed: 2 }, false),
        ];
        let aggregates = aggregate(&records);
        (records, aggregates)
    }

    #[test]
    fn json_report_contains_records_and_aggregates() {
        let (records, aggregates) = sample();
        let json = generate_json_report(&records, &aggregates).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["records"].as_array().unwrap().len(), 2);
        assert_eq!(value["aggregates"].as_array().unwrap().len(), 2);
        assert!(value["records"][0]["decisions"].is_array());
    }

    #[test]
    fn markdown_report_tabulates_strategies() {
        let (records, aggregates) = sample();
        let markdown = generate_markdown_report(&records, &aggregates);
        assert!(markdown.contains("| Ambitious |"));
        assert!(markdown.contains("| Random |"));
        assert!(!markdown.contains("## Failures"));
    }
}
