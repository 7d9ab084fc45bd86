use clap::{Args, Parser, Subcommand};

use crate::ui::types::choices::{ExperimentChoice, SingleEstimateParameters, SweepParameters};

#[derive(Debug, Parser)]
#[command(
    name = "gradvar",
    about = "Score-function vs. reparameterization gradient variance on a Gaussian toy objective"
)]
pub struct Cli {
    /// Print results as JSON instead of a table
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare estimator mean and variance across sample sizes
    Sweep(SweepArgs),
    /// Draw one estimate from each estimator
    Estimate(EstimateArgs),
    /// Pick and configure an experiment interactively
    Wizard,
}

#[derive(Debug, Args)]
pub struct SweepArgs {
    /// Mean of the sampling distribution Normal(theta, 1)
    #[arg(long, default_value = "2.0", allow_negative_numbers = true)]
    pub theta: f64,

    /// Comma-separated batch sizes
    #[arg(long, default_value = "10,100,1000,10000,100000")]
    pub sample_sizes: String,

    /// Independent trials per sample size
    #[arg(long, default_value = "100")]
    pub repetitions: u64,

    /// Feed both estimators from the same noise batch in each trial
    #[arg(long, default_value = "false")]
    pub common_random_numbers: bool,

    /// PRNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

#[derive(Debug, Args)]
pub struct EstimateArgs {
    /// Mean of the sampling distribution Normal(theta, 1)
    #[arg(long, default_value = "2.0", allow_negative_numbers = true)]
    pub theta: f64,

    /// Draws per estimate
    #[arg(long, default_value = "1000")]
    pub sample_size: u64,

    /// PRNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

impl From<SweepArgs> for SweepParameters {
    fn from(a: SweepArgs) -> Self {
        Self {
            theta: a.theta,
            sample_sizes: a.sample_sizes,
            repetitions: a.repetitions,
            common_random_numbers: a.common_random_numbers,
            seed: a.seed,
        }
    }
}

impl From<EstimateArgs> for SingleEstimateParameters {
    fn from(a: EstimateArgs) -> Self {
        Self {
            theta: a.theta,
            sample_size: a.sample_size,
            seed: a.seed,
        }
    }
}

impl Command {
    /// The experiment described on the command line, or `None` for `wizard`.
    pub fn into_choice(self) -> Option<ExperimentChoice> {
        match self {
            Command::Sweep(a) => Some(ExperimentChoice::VarianceSweep(a.into())),
            Command::Estimate(a) => Some(ExperimentChoice::SingleEstimate(a.into())),
            Command::Wizard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_defaults_match_parameter_defaults() {
        let cli = Cli::try_parse_from(["gradvar", "sweep"]).unwrap();
        assert!(!cli.json);
        match cli.command.into_choice() {
            Some(ExperimentChoice::VarianceSweep(p)) => assert_eq!(p, SweepParameters::default()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn estimate_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "gradvar",
            "estimate",
            "--theta",
            "-1.5",
            "--sample-size",
            "50",
            "--seed",
            "7",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command.into_choice() {
            Some(ExperimentChoice::SingleEstimate(p)) => {
                assert_eq!(p.theta, -1.5);
                assert_eq!(p.sample_size, 50);
                assert_eq!(p.seed, 7);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn sweep_flags_are_parsed() {
        let cli = Cli::try_parse_from([
            "gradvar",
            "sweep",
            "--sample-sizes",
            "10,20",
            "--repetitions",
            "5",
            "--common-random-numbers",
        ])
        .unwrap();
        match cli.command.into_choice() {
            Some(ExperimentChoice::VarianceSweep(p)) => {
                assert_eq!(p.sample_sizes, "10,20");
                assert_eq!(p.repetitions, 5);
                assert!(p.common_random_numbers);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wizard_has_no_preset_choice() {
        let cli = Cli::try_parse_from(["gradvar", "wizard"]).unwrap();
        assert!(cli.command.into_choice().is_none());
    }
}
