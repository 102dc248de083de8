mod logic;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use logic::{
    RunConfig, Strategy, TesterAssets, aggregate, generate_console_report, generate_json_report,
    generate_markdown_report, run_quest,
};

#[derive(Debug, Parser)]
#[command(name = "netzero-tester", version = "0.1.0")]
#[command(about = "Automated QA sweeps for the NetZero climate-policy simulation")]
struct Args {
    /// Strategies to run (comma-separated)
    #[arg(long, default_value = "ambitious,pragmatic,balanced,random")]
    strategies: String,

    /// List all available strategies and exit
    #[arg(long)]
    list_strategies: bool,

    /// Seeds for stochastic strategies (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json", "markdown"])]
    report: String,

    /// Directory holding decisions.json and regions.json
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_strategies {
        for strategy in Strategy::ALL {
            println!("{:<12} {}", strategy.label(), strategy.blurb());
        }
        return Ok(());
    }

    println!("{}", "🌍 NetZero policy sweep".bright_cyan().bold());

    let assets = args.assets_dir.as_ref().map_or_else(
        TesterAssets::load_default,
        |dir| TesterAssets::load_from(dir),
    );
    let strategies = parse_strategies(&args.strategies)?;
    let seeds = parse_seeds(&args.seeds)?;
    log::info!(
        "sweeping {} strategies x {} seeds over {} decisions",
        strategies.len(),
        seeds.len(),
        assets.catalog.len()
    );

    let mut records = Vec::with_capacity(strategies.len() * seeds.len());
    for strategy in &strategies {
        for seed in &seeds {
            records.push(run_quest(
                &assets.catalog,
                RunConfig {
                    strategy: *strategy,
                    seed: *seed,
                },
                args.verbose,
            ));
        }
    }
    let aggregates = aggregate(&records);

    match args.report.as_str() {
        "json" => emit(&args.output, &generate_json_report(&records, &aggregates)?)?,
        "markdown" => emit(&args.output, &generate_markdown_report(&records, &aggregates))?,
        _ => generate_console_report(&records, &aggregates, &assets.regions),
    }

    let failed = records.iter().filter(|r| !r.passed()).count();
    if failed > 0 {
        bail!("{failed} run(s) violated engine invariants");
    }
    Ok(())
}

fn parse_strategies(csv: &str) -> Result<Vec<Strategy>> {
    let mut strategies = Vec::new();
    for token in csv.split(',').filter(|t| !t.trim().is_empty()) {
        let strategy = Strategy::parse(token)
            .with_context(|| format!("unknown strategy '{}'", token.trim()))?;
        if !strategies.contains(&strategy) {
            strategies.push(strategy);
        }
    }
    if strategies.is_empty() {
        bail!("no strategies selected");
    }
    Ok(strategies)
}

fn parse_seeds(csv: &str) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for token in csv.split(',').filter(|t| !t.trim().is_empty()) {
        let seed: u64 = token
            .trim()
            .parse()
            .with_context(|| format!("invalid seed '{}'", token.trim()))?;
        seeds.push(seed);
    }
    if seeds.is_empty() {
        bail!("no seeds provided");
    }
    Ok(seeds)
}

fn emit(output: &Option<PathBuf>, body: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            println!("Report written to {}", path.display().to_string().green());
        }
        None => println!("{body}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_csv_dedupes_and_validates() {
        let strategies = parse_strategies("ambitious, random,ambitious").unwrap();
        assert_eq!(strategies, vec![Strategy::Ambitious, Strategy::Random]);
        assert!(parse_strategies("ambitious,bogus").is_err());
        assert!(parse_strategies(" , ").is_err());
    }

    #[test]
    fn seed_csv_parses_numbers() {
        assert_eq!(parse_seeds("1337, 42").unwrap(), vec![1337, 42]);
        assert!(parse_seeds("12,abc").is_err());
    }
}
