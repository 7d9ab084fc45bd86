use std::convert::TryFrom;

use crate::sampling::GaussianNoise;
use crate::tasks::{Experiment, NoiseSharing, SingleEstimate, SweepConfig, VarianceSweep};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{ExperimentChoice, SingleEstimateParameters, SweepParameters};

/// Parses a comma-separated list of positive batch sizes.
pub fn parse_sample_sizes(raw: &str) -> Result<Vec<usize>, BuildError> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| match t.replace('_', "").parse::<usize>() {
            Ok(0) => Err(BuildError::InvalidParameter(
                "sample sizes must be > 0".into(),
            )),
            Ok(n) => Ok(n),
            Err(_) => Err(BuildError::InvalidParameter(format!(
                "'{t}' is not a valid sample size"
            ))),
        })
        .collect()
}

fn to_usize(value: u64, name: &str) -> Result<usize, BuildError> {
    usize::try_from(value)
        .map_err(|_| BuildError::InvalidParameter(format!("{name} too large for usize")))
}

impl TryFrom<SweepParameters> for VarianceSweep {
    type Error = BuildError;

    fn try_from(parameters: SweepParameters) -> Result<Self, Self::Error> {
        let sample_sizes = parse_sample_sizes(&parameters.sample_sizes)?;
        if sample_sizes.is_empty() {
            return Err(BuildError::InvalidParameter(
                "at least one sample size is required".into(),
            ));
        }

        let noise = if parameters.common_random_numbers {
            NoiseSharing::Common
        } else {
            NoiseSharing::Independent
        };

        VarianceSweep::new(SweepConfig {
            sample_sizes,
            repetitions: to_usize(parameters.repetitions, "repetitions")?,
            theta: parameters.theta,
            noise,
        })
        .map_err(BuildError::from)
    }
}

impl TryFrom<SingleEstimateParameters> for SingleEstimate {
    type Error = BuildError;

    fn try_from(parameters: SingleEstimateParameters) -> Result<Self, Self::Error> {
        let n = to_usize(parameters.sample_size, "sample_size")?;
        SingleEstimate::new(parameters.theta, n).map_err(BuildError::from)
    }
}

pub fn build_experiment(choice: ExperimentChoice) -> Result<Experiment, BuildError> {
    match choice {
        ExperimentChoice::VarianceSweep(p) => {
            let noise = GaussianNoise::new(p.seed);
            let sweep = VarianceSweep::try_from(p)?;
            Ok(Experiment::VarianceSweep { sweep, noise })
        }
        ExperimentChoice::SingleEstimate(p) => {
            let noise = GaussianNoise::new(p.seed);
            let task = SingleEstimate::try_from(p)?;
            Ok(Experiment::SingleEstimate { task, noise })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArgumentError;

    #[test]
    fn sample_sizes_parse_with_spaces_and_underscores() {
        let got = parse_sample_sizes(" 10, 100 ,1_000,").unwrap();
        assert_eq!(got, vec![10, 100, 1000]);
    }

    #[test]
    fn bad_sample_sizes_are_rejected() {
        assert!(matches!(
            parse_sample_sizes("10,abc"),
            Err(BuildError::InvalidParameter(_))
        ));
        assert!(matches!(
            parse_sample_sizes("10,0"),
            Err(BuildError::InvalidParameter(_))
        ));
        assert!(matches!(
            parse_sample_sizes("-5"),
            Err(BuildError::InvalidParameter(_))
        ));
    }

    #[test]
    fn sweep_parameters_map_onto_config() {
        let sweep = VarianceSweep::try_from(SweepParameters {
            theta: 1.0,
            sample_sizes: "5,50".into(),
            repetitions: 7,
            common_random_numbers: true,
            seed: 1,
        })
        .unwrap();
        let cfg = sweep.config();
        assert_eq!(cfg.sample_sizes, vec![5, 50]);
        assert_eq!(cfg.repetitions, 7);
        assert_eq!(cfg.theta, 1.0);
        assert_eq!(cfg.noise, NoiseSharing::Common);
    }

    #[test]
    fn empty_sample_size_list_is_rejected() {
        let err = VarianceSweep::try_from(SweepParameters {
            sample_sizes: " , ".into(),
            ..SweepParameters::default()
        })
        .err()
        .unwrap();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn zero_repetitions_surface_as_argument_error() {
        let err = VarianceSweep::try_from(SweepParameters {
            repetitions: 0,
            ..SweepParameters::default()
        })
        .err()
        .unwrap();
        assert!(matches!(
            err,
            BuildError::Argument(ArgumentError::ZeroRepetitions)
        ));
    }

    #[test]
    fn zero_single_sample_size_is_rejected() {
        let err = SingleEstimate::try_from(SingleEstimateParameters {
            sample_size: 0,
            ..SingleEstimateParameters::default()
        })
        .unwrap_err();
        assert!(matches!(err, BuildError::Argument(_)));
    }

    #[test]
    fn build_uses_parameter_seed() {
        let exp = build_experiment(ExperimentChoice::SingleEstimate(
            SingleEstimateParameters {
                seed: 99,
                ..SingleEstimateParameters::default()
            },
        ))
        .unwrap();
        match exp {
            Experiment::SingleEstimate { noise, .. } => assert_eq!(noise.seed(), 99),
            _ => panic!("expected single estimate"),
        }
    }
}
