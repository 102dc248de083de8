pub mod assets;
pub mod harness;
pub mod policy;
pub mod reports;

pub use assets::TesterAssets;
pub use harness::{RunConfig, RunRecord, StrategyAggregate, aggregate, run_quest};
pub use policy::{PlayerPolicy, PolicyDecision, Strategy};
pub use reports::{generate_console_report, generate_json_report, generate_markdown_report};
