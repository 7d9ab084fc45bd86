use anyhow::{Context, Result};
use serde_json::{Map, Value};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, schema_for, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_labels<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                _ => label.to_string(),
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through picking a variant of `C` and filling in its parameters.
///
/// Field prompts are derived from `C`'s JSON schema; defaults come from the
/// schema first and [`UIChoice::default_params`] second.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_labels::<C::Kind>();
    let labels: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();

    let picked = driver.ask_select(
        C::prompt_label(),
        C::prompt_help().unwrap_or(""),
        &labels,
    )?;
    let choice_kind = items
        .get(picked)
        .map(|(k, _)| *k)
        .context("selection out of range")?;

    let key: &'static str = choice_kind.into();
    let schema = schema_for::<C>();
    let specs = specs_for_kind(&schema, key)?;
    let defaults = C::default_params(choice_kind);

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        let value = ask_field(driver, &s, init)?;
        params.insert(s.name.clone(), value);
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn ask_field<D: PromptDriver>(driver: &D, s: &FieldSpec, init: Option<Value>) -> Result<Value> {
    let help = s.description.as_deref().unwrap_or("");
    let value = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            let min = s.min.map(|x| x as u64);
            let max = s.max.map(|x| x as u64);
            Value::from(driver.ask_u64(&s.title, help, def, min, max)?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, s.min, s.max)?)
        }
    };
    Ok(value)
}
