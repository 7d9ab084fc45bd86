use anyhow::{Context, Result, anyhow};
use schemars::Schema;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldKind {
    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(FieldKind::String),
            "integer" => Some(FieldKind::Integer),
            "number" => Some(FieldKind::Number),
            "boolean" => Some(FieldKind::Boolean),
            _ => None,
        }
    }

    /// Reads `"type"`, accepting unions like `["null", "integer"]`.
    fn detect(ty: Option<&Value>) -> Option<Self> {
        match ty? {
            Value::String(s) => Self::from_type_name(s),
            Value::Array(arr) => arr
                .iter()
                .filter_map(Value::as_str)
                .find_map(Self::from_type_name),
            _ => None,
        }
    }
}

/// One promptable parameter of a choice variant.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn schema_for<T: schemars::JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

/// Extracts the parameter fields of the variant tagged `kind_key`.
///
/// Fields whose JSON type is not a scalar are skipped.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let branches = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("missing oneOf/anyOf")?;

    let props = branches
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| tag_matches(props, kind_key))
        .ok_or_else(|| anyhow!("no branch found for type={kind_key}"))?;

    let Some(params) = props.get("params").and_then(Value::as_object) else {
        return Ok(vec![]);
    };
    let params = resolve_ref(root_obj, params)
        .ok_or_else(|| anyhow!("failed to resolve params for type={kind_key}"))?;

    let Some(fields) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let field = field
            .as_object()
            .and_then(|f| resolve_ref(root_obj, f))
            .ok_or_else(|| anyhow!("failed to resolve field schema for '{name}'"))?;

        let Some(kind) = FieldKind::detect(field.get("type")) else {
            continue;
        };

        let bound = |inclusive: &str, exclusive: &str| {
            field
                .get(inclusive)
                .or_else(|| field.get(exclusive))
                .and_then(Value::as_f64)
        };

        out.push(FieldSpec {
            name: name.clone(),
            title: field
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: field
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
            kind,
            default: field.get("default").cloned(),
            min: bound("minimum", "exclusiveMinimum"),
            max: bound("maximum", "exclusiveMaximum"),
        });
    }
    Ok(out)
}

fn tag_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tag) = props.get("type").and_then(Value::as_object) else {
        return false;
    };
    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `$ref` such as `"#/$defs/SweepParameters"`; objects without
/// a `$ref` are returned unchanged.
fn resolve_ref<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    path.split('/').try_fold(root_obj, |cur, raw_seg| {
        // JSON Pointer unescape (~1 => /, ~0 => ~)
        let seg = raw_seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::ExperimentChoice;
    use serde_json::json;

    fn spec<'a>(specs: &'a [FieldSpec], name: &str) -> &'a FieldSpec {
        specs.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn sweep_fields_are_extracted() {
        let schema = schema_for::<ExperimentChoice>();
        let specs = specs_for_kind(&schema, "variance-sweep").unwrap();

        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        for expected in ["theta", "sample_sizes", "repetitions", "common_random_numbers", "seed"] {
            assert!(names.contains(&expected), "missing {expected} in {names:?}");
        }

        assert_eq!(spec(&specs, "theta").kind, FieldKind::Number);
        assert_eq!(spec(&specs, "sample_sizes").kind, FieldKind::String);
        assert_eq!(spec(&specs, "common_random_numbers").kind, FieldKind::Boolean);

        let reps = spec(&specs, "repetitions");
        assert_eq!(reps.kind, FieldKind::Integer);
        assert_eq!(reps.title, "Repetitions");
        assert_eq!(reps.min, Some(1.0));
    }

    #[test]
    fn unknown_kind_fails() {
        let schema = schema_for::<ExperimentChoice>();
        assert!(specs_for_kind(&schema, "nope").is_err());
    }

    #[test]
    fn field_kind_accepts_nullable_unions() {
        assert_eq!(
            FieldKind::detect(Some(&json!(["null", "integer"]))),
            Some(FieldKind::Integer)
        );
        assert_eq!(FieldKind::detect(Some(&json!("array"))), None);
        assert_eq!(FieldKind::detect(None), None);
    }

    #[test]
    fn refs_resolve_with_pointer_escapes() {
        let root = json!({ "$defs": { "a/b": { "title": "x" } } });
        let root_obj = root.as_object().unwrap();
        let obj = json!({ "$ref": "#/$defs/a~1b" });
        let got = resolve_ref(root_obj, obj.as_object().unwrap()).unwrap();
        assert_eq!(got.get("title").unwrap(), "x");
    }
}
