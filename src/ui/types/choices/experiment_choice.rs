use crate::ui::types::choices::UIChoice;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_theta() -> f64 {
    2.0
}

fn default_sample_sizes() -> String {
    "10,100,1000,10000,100000".into()
}

fn default_repetitions() -> u64 {
    100
}

fn default_sample_size() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SweepParameters {
    #[serde(default = "default_theta")]
    #[schemars(
        title = "Theta",
        description = "Mean of the sampling distribution Normal(theta, 1)",
        default = "default_theta"
    )]
    pub theta: f64,

    #[serde(default = "default_sample_sizes")]
    #[schemars(
        title = "Sample Sizes",
        description = "Comma-separated batch sizes, e.g. 10,100,1000",
        default = "default_sample_sizes"
    )]
    pub sample_sizes: String,

    #[serde(default = "default_repetitions")]
    #[schemars(
        title = "Repetitions",
        description = "Independent trials per sample size",
        range(min = 1),
        default = "default_repetitions"
    )]
    pub repetitions: u64,

    #[serde(default)]
    #[schemars(
        title = "Common Random Numbers",
        description = "Feed both estimators from the same noise batch in each trial?"
    )]
    pub common_random_numbers: bool,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for SweepParameters {
    fn default() -> Self {
        Self {
            theta: default_theta(),
            sample_sizes: default_sample_sizes(),
            repetitions: default_repetitions(),
            common_random_numbers: false,
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SingleEstimateParameters {
    #[serde(default = "default_theta")]
    #[schemars(
        title = "Theta",
        description = "Mean of the sampling distribution Normal(theta, 1)",
        default = "default_theta"
    )]
    pub theta: f64,

    #[serde(default = "default_sample_size")]
    #[schemars(
        title = "Sample Size",
        description = "Draws per estimate",
        range(min = 1),
        default = "default_sample_size"
    )]
    pub sample_size: u64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for SingleEstimateParameters {
    fn default() -> Self {
        Self {
            theta: default_theta(),
            sample_size: default_sample_size(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(ExperimentKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum ExperimentChoice {
    #[strum_discriminants(strum(
        message = "Variance Sweep",
        detailed_message = "Compare estimator mean and variance across sample sizes."
    ))]
    VarianceSweep(SweepParameters),

    #[strum_discriminants(strum(
        message = "Single Estimate",
        detailed_message = "One gradient estimate from each estimator."
    ))]
    SingleEstimate(SingleEstimateParameters),
}

impl UIChoice for ExperimentChoice {
    type Kind = ExperimentKind;

    fn schema() -> Schema {
        schema_for!(ExperimentChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose an experiment:"
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            ExperimentKind::VarianceSweep => {
                serde_json::to_value(SweepParameters::default()).unwrap_or_default()
            }
            ExperimentKind::SingleEstimate => {
                serde_json::to_value(SingleEstimateParameters::default()).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_keys_match_serde_tags() {
        let key: &'static str = ExperimentKind::VarianceSweep.into();
        assert_eq!(key, "variance-sweep");
        let key: &'static str = ExperimentKind::SingleEstimate.into();
        assert_eq!(key, "single-estimate");
    }

    #[test]
    fn missing_params_fall_back_to_defaults() {
        let c: ExperimentChoice =
            serde_json::from_value(json!({ "type": "variance-sweep", "params": {} })).unwrap();
        match c {
            ExperimentChoice::VarianceSweep(p) => assert_eq!(p, SweepParameters::default()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn from_parts_round_trips_params() {
        let c = ExperimentChoice::from_parts(
            ExperimentKind::SingleEstimate,
            json!({ "theta": 0.5, "sample_size": 10, "seed": 3 }),
        )
        .unwrap();
        match c {
            ExperimentChoice::SingleEstimate(p) => {
                assert_eq!(p.theta, 0.5);
                assert_eq!(p.sample_size, 10);
                assert_eq!(p.seed, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn default_params_are_objects() {
        let v = ExperimentChoice::default_params(ExperimentKind::VarianceSweep);
        assert_eq!(v["repetitions"], 100);
        assert_eq!(v["sample_sizes"], "10,100,1000,10000,100000");
    }
}
