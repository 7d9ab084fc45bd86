use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;

use crate::ui::cli::drivers::PromptDriver;

/// Prompt driver answering from a title → text map; unknown titles take the default.
pub struct ScriptedDriver {
    selection: String,
    answers: HashMap<String, String>,
}

impl ScriptedDriver {
    /// `selection` must appear in the label of the option to pick.
    pub fn new(selection: &str) -> Self {
        Self {
            selection: selection.to_string(),
            answers: HashMap::new(),
        }
    }

    pub fn answer(mut self, title: &str, text: &str) -> Self {
        self.answers.insert(title.to_string(), text.to_string());
        self
    }

    fn parsed<T: std::str::FromStr>(&self, title: &str, default: T) -> Result<T> {
        match self.answers.get(title) {
            Some(text) => text
                .parse()
                .map_err(|_| anyhow!("cannot parse answer '{text}' for {title}")),
            None => Ok(default),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(&self, _title: &str, _help: &str, options: &[String]) -> Result<usize> {
        options
            .iter()
            .position(|o| o.contains(&self.selection))
            .with_context(|| format!("no option matching '{}'", self.selection))
    }

    fn ask_bool(&self, title: &str, _help: &str, default: bool) -> Result<bool> {
        self.parsed(title, default)
    }

    fn ask_string(&self, title: &str, _help: &str, default: &str) -> Result<String> {
        Ok(self
            .answers
            .get(title)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    fn ask_u64(
        &self,
        title: &str,
        _help: &str,
        default: u64,
        _min: Option<u64>,
        _max: Option<u64>,
    ) -> Result<u64> {
        self.parsed(title, default)
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        default: f64,
        _min: Option<f64>,
        _max: Option<f64>,
    ) -> Result<f64> {
        self.parsed(title, default)
    }
}
