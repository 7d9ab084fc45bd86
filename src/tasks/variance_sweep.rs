use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::core::ArgumentError;
use crate::estimators::{GradientEstimator, ReparameterizedEstimator, ScoreFunctionEstimator};
use crate::evaluation::{EstimateSeries, SweepPoint, VarianceCurve};
use crate::sampling::NoiseSource;
use crate::utils::math::{analytic_gradient, reparameterized_variance, score_function_variance};

/// How the two estimators obtain their noise within one trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoiseSharing {
    /// Each estimator draws its own batch (score-function first).
    #[default]
    Independent,
    /// One batch per trial feeds both estimators (common random numbers).
    Common,
}

impl Display for NoiseSharing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseSharing::Independent => f.write_str("independent"),
            NoiseSharing::Common => f.write_str("common"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub sample_sizes: Vec<usize>,
    pub repetitions: usize,
    pub theta: f64,
    pub noise: NoiseSharing,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sample_sizes: vec![10, 100, 1_000, 10_000, 100_000],
            repetitions: 100,
            theta: 2.0,
            noise: NoiseSharing::Independent,
        }
    }
}

/// Measures mean and variance of both estimators over a list of sample sizes.
pub struct VarianceSweep {
    config: SweepConfig,
    score: ScoreFunctionEstimator,
    reparameterized: ReparameterizedEstimator,
    curve: VarianceCurve,
    progress_tx: Option<Sender<SweepPoint>>,
}

impl VarianceSweep {
    pub fn new(config: SweepConfig) -> Result<Self, ArgumentError> {
        if let Some(index) = config.sample_sizes.iter().position(|&n| n == 0) {
            return Err(ArgumentError::ZeroSampleSizeAt { index });
        }
        if config.repetitions == 0 {
            return Err(ArgumentError::ZeroRepetitions);
        }

        Ok(Self {
            config,
            score: ScoreFunctionEstimator,
            reparameterized: ReparameterizedEstimator,
            curve: VarianceCurve::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<SweepPoint>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn curve(&self) -> &VarianceCurve {
        &self.curve
    }

    /// Runs the full sweep, replacing any curve from a previous run.
    pub fn run(&mut self, source: &mut dyn NoiseSource) -> Result<&VarianceCurve, ArgumentError> {
        let started = Instant::now();
        tracing::info!(
            theta = self.config.theta,
            repetitions = self.config.repetitions,
            sizes = self.config.sample_sizes.len(),
            noise = %self.config.noise,
            "starting variance sweep"
        );

        self.curve = VarianceCurve::default();
        for &n in &self.config.sample_sizes {
            let point = Self::measure(
                &self.config,
                &self.score,
                &self.reparameterized,
                n,
                source,
            )?;
            tracing::debug!(
                n,
                score_var = point.score.variance,
                reparam_var = point.reparameterized.variance,
                "sample size done"
            );

            if let Some(tx) = &self.progress_tx {
                let _ = tx.send(point);
            }
            self.curve.push(point);
        }

        tracing::info!(
            points = self.curve.len(),
            draws = source.draws(),
            seconds = started.elapsed().as_secs_f64(),
            "variance sweep finished"
        );
        Ok(&self.curve)
    }

    /// Builds a printable report of the last run.
    pub fn report(&self, seed: u64) -> SweepReport {
        SweepReport {
            theta: self.config.theta,
            repetitions: self.config.repetitions,
            noise: self.config.noise,
            seed,
            curve: self.curve.clone(),
        }
    }

    fn measure(
        config: &SweepConfig,
        score_fn: &ScoreFunctionEstimator,
        reparam_fn: &ReparameterizedEstimator,
        n: usize,
        source: &mut dyn NoiseSource,
    ) -> Result<SweepPoint, ArgumentError> {
        let theta = config.theta;
        let mut score = EstimateSeries::with_capacity(config.repetitions);
        let mut reparameterized = EstimateSeries::with_capacity(config.repetitions);

        for _ in 0..config.repetitions {
            match config.noise {
                NoiseSharing::Independent => {
                    score.push(score_fn.draw_and_estimate(theta, n, source)?);
                    reparameterized.push(reparam_fn.draw_and_estimate(theta, n, source)?);
                }
                NoiseSharing::Common => {
                    let noise = source.standard_normal(n);
                    let x = score_fn.batch_from_noise(theta, noise.clone());
                    let eps = reparam_fn.batch_from_noise(theta, noise);
                    score.push(score_fn.estimate(theta, &x)?);
                    reparameterized.push(reparam_fn.estimate(theta, &eps)?);
                }
            }
        }

        Ok(SweepPoint {
            sample_size: n,
            score: score.summarize(),
            reparameterized: reparameterized.summarize(),
        })
    }
}

/// Sweep outcome together with the settings that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub theta: f64,
    pub repetitions: usize,
    pub noise: NoiseSharing,
    pub seed: u64,
    pub curve: VarianceCurve,
}

impl Display for SweepReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "theta={} (gradient {}), repetitions={}, noise={}, seed={}",
            self.theta,
            analytic_gradient(self.theta),
            self.repetitions,
            self.noise,
            self.seed
        )?;
        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>9}",
            "n", "score mean", "score var", "(exact)", "reparam mean", "reparam var", "(exact)", "ratio"
        )?;
        for p in self.curve.points() {
            writeln!(
                f,
                "{:>8} {:>12.6} {:>12.4e} {:>12.4e} {:>12.6} {:>12.4e} {:>12.4e} {:>9.2}",
                p.sample_size,
                p.score.mean,
                p.score.variance,
                score_function_variance(self.theta, p.sample_size),
                p.reparameterized.mean,
                p.reparameterized.variance,
                reparameterized_variance(p.sample_size),
                p.variance_ratio()
            )?;
        }
        Ok(())
    }
}
