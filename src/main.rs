use anyhow::{Context, Result};
use clap::Parser;
use std::sync::mpsc;
use tracing_subscriber::EnvFilter;

use gradvar::ui::cli::args::Cli;
use gradvar::ui::cli::drivers::InquireDriver;
use gradvar::ui::cli::progress::{join_reporter, spawn_progress_logger};
use gradvar::ui::cli::wizard::prompt_choice;
use gradvar::ui::types::build::build_experiment;
use gradvar::ui::types::choices::ExperimentChoice;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let choice = match cli.command.into_choice() {
        Some(choice) => choice,
        None => prompt_choice::<ExperimentChoice, _>(&InquireDriver)?,
    };
    tracing::debug!(?choice, "experiment selected");

    let (tx, rx) = mpsc::channel();
    let experiment = build_experiment(choice)
        .context("invalid experiment parameters")?
        .with_progress(tx);

    let progress = spawn_progress_logger(rx);

    let output = experiment.run().context("experiment failed")?;
    join_reporter(progress)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{output}");
    }
    Ok(())
}
