//! Financial literacy simulation CLI
//!
//! Runs the literate and non-literate profiles side by side and reports the gap

use anyhow::{Context, Result};
use clap::Parser;
use literacy_wealth::{report, Assumptions, ScenarioRunner};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "literacy_wealth",
    about = "Compare 40-year wealth of a financially literate and a non-literate person"
)]
struct Cli {
    #[arg(
        long,
        default_value_t = 40,
        allow_negative_numbers = true,
        help = "Number of years to simulate"
    )]
    years: i64,

    #[arg(long, help = "CSV of `parameter,value` overrides for the default model")]
    assumptions: Option<PathBuf>,

    #[arg(long, help = "Write aligned wealth trajectories to this CSV file")]
    csv: Option<PathBuf>,

    #[arg(long, help = "Print the full comparison as JSON instead of text")]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_csv_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_model(),
    };

    let runner = ScenarioRunner::with_assumptions(assumptions)?;
    let comparison = runner.compare_checked(cli.years)?;

    if cli.json {
        println!("{}", report::to_json(&comparison)?);
    } else {
        println!("Financial Literacy Simulation");
        println!("{}", "-".repeat(30));
        println!();
        println!("{comparison}");
    }

    if let Some(path) = &cli.csv {
        report::write_trajectory_csv(path, &comparison)
            .with_context(|| format!("writing trajectories to {}", path.display()))?;
        if !cli.json {
            println!("\nWealth trajectories saved to '{}'", path.display());
        }
    }

    Ok(())
}
