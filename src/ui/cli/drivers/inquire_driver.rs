use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::{
    Confirm, CustomType, CustomUserError, Select, Text, validator::Validation,
};
use std::fmt::Display;

pub struct InquireDriver;

fn within_bounds<T>(
    min: Option<T>,
    max: Option<T>,
) -> impl Fn(&T) -> Result<Validation, CustomUserError> + Clone + 'static
where
    T: PartialOrd + Display + Copy + 'static,
{
    move |x: &T| {
        let violation = match (min, max) {
            (Some(lo), Some(hi)) if *x < lo || *x > hi => Some(format!("Must be between {lo} and {hi}")),
            (Some(lo), None) if *x < lo => Some(format!("Must be ≥ {lo}")),
            (None, Some(hi)) if *x > hi => Some(format!("Must be ≤ {hi}")),
            _ => None,
        };
        Ok(match violation {
            Some(msg) => Validation::Invalid(msg.into()),
            None => Validation::Valid,
        })
    }
}

impl PromptDriver for InquireDriver {
    fn ask_select(&self, title: &str, help: &str, options: &[String]) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }

    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        Ok(CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(within_bounds(min, max))
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(within_bounds(min, max))
            .prompt()?)
    }
}
