use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::sync::mpsc::Sender;

use crate::core::ArgumentError;
use crate::evaluation::SweepPoint;
use crate::sampling::GaussianNoise;
use crate::tasks::{EstimatePair, SingleEstimate, SweepReport, VarianceSweep};

/// A runnable task paired with the noise source it draws from.
pub enum Experiment {
    VarianceSweep {
        sweep: VarianceSweep,
        noise: GaussianNoise,
    },
    SingleEstimate {
        task: SingleEstimate,
        noise: GaussianNoise,
    },
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ExperimentOutput {
    VarianceSweep(SweepReport),
    SingleEstimate(EstimatePair),
}

impl Experiment {
    /// Forwards per-sample-size progress; no-op for single estimates.
    pub fn with_progress(self, tx: Sender<SweepPoint>) -> Self {
        match self {
            Experiment::VarianceSweep { sweep, noise } => Experiment::VarianceSweep {
                sweep: sweep.with_progress(tx),
                noise,
            },
            other => other,
        }
    }

    pub fn run(self) -> Result<ExperimentOutput, ArgumentError> {
        match self {
            Experiment::VarianceSweep {
                mut sweep,
                mut noise,
            } => {
                sweep.run(&mut noise)?;
                Ok(ExperimentOutput::VarianceSweep(sweep.report(noise.seed())))
            }
            Experiment::SingleEstimate { task, mut noise } => {
                Ok(ExperimentOutput::SingleEstimate(task.run(&mut noise)?))
            }
        }
    }
}

impl Display for ExperimentOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentOutput::VarianceSweep(report) => write!(f, "{report}"),
            ExperimentOutput::SingleEstimate(pair) => writeln!(f, "{pair}"),
        }
    }
}
