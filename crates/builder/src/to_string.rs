//! Field-annotated rendering of an object.

use fieldwise_core::{IntrospectResult, Reflected, Value, layers};

use crate::config::ToStringStyle;
use crate::exclusions::string_exclusions;

/// Rendering of an absent object or a null field.
pub const NULL_TEXT: &str = "<null>";

/// Render `object` in `style`, leaving out `excluded` names.
///
/// Fields of the runtime type come first, then those of each base in turn.
/// Nested objects are rendered with their own exclusions.
pub fn reflection_to_string(
    object: Option<&dyn Reflected>,
    excluded: &[&str],
    style: ToStringStyle,
) -> IntrospectResult<String> {
    let Some(object) = object else {
        return Ok(match style {
            ToStringStyle::Json => serde_json::Value::Null.to_string(),
            _ => NULL_TEXT.to_string(),
        });
    };

    match style {
        ToStringStyle::Json => Ok(object_to_json(object, excluded)?.to_string()),
        _ => render_object(object, excluded, style),
    }
}

fn retained_fields<'a>(
    object: &'a dyn Reflected,
    excluded: &[&str],
) -> IntrospectResult<Vec<(&'static str, Value<'a>)>> {
    let mut retained = Vec::new();
    for layer in layers(object) {
        for slot in layer.declared_fields() {
            if excluded.contains(&slot.name()) {
                continue;
            }
            retained.push((slot.name(), slot.value()?.clone()));
        }
    }
    Ok(retained)
}

fn render_object(
    object: &dyn Reflected,
    excluded: &[&str],
    style: ToStringStyle,
) -> IntrospectResult<String> {
    let mut rendered = Vec::new();
    for (name, value) in retained_fields(object, excluded)? {
        rendered.push((name, render_value(&value, style)?));
    }

    let type_name = object.type_name();
    let text = match style {
        ToStringStyle::MultiLine => {
            let mut out = format!("{type_name}[\n");
            for (name, value) in &rendered {
                out.push_str(&format!("  {name}={}\n", value.replace('\n', "\n  ")));
            }
            out.push(']');
            out
        }
        ToStringStyle::SingleLine => {
            let fields: Vec<String> = rendered
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            format!("{type_name}[{}]", fields.join(","))
        }
        ToStringStyle::NoFieldNames => {
            let values: Vec<&str> = rendered.iter().map(|(_, value)| value.as_str()).collect();
            format!("{type_name}[{}]", values.join(","))
        }
        ToStringStyle::Simple | ToStringStyle::Json => {
            let values: Vec<&str> = rendered.iter().map(|(_, value)| value.as_str()).collect();
            values.join(",")
        }
    };
    Ok(text)
}

fn render_value(value: &Value<'_>, style: ToStringStyle) -> IntrospectResult<String> {
    let text = match value {
        Value::Null => NULL_TEXT.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Char(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::Long(v) => v.to_string(),
        Value::Wide(v) => v.to_string(),
        Value::Double(v) => render_double(*v),
        Value::Text(v) => (*v).to_string(),
        Value::Decimal(v) => v.to_string(),
        Value::Date(v) => v.to_string(),
        Value::DateTime(v) => v.to_string(),
        Value::Timestamp(v) => v.to_string(),
        Value::Variant { name, .. } => (*name).to_string(),
        Value::Object(object) => {
            let excluded = string_exclusions(Some(*object));
            render_object(*object, &excluded, style)?
        }
        Value::List(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                parts.push(render_value(item, style)?);
            }
            format!("{{{}}}", parts.join(","))
        }
        Value::Map(entries) => {
            let mut parts = Vec::with_capacity(entries.len());
            for (key, value) in entries {
                parts.push(format!(
                    "{}={}",
                    render_value(key, style)?,
                    render_value(value, style)?
                ));
            }
            format!("{{{}}}", parts.join(","))
        }
    };
    Ok(text)
}
// `{:?}` drops the fraction in exponent form (`1e20`); keep it (`1.0e20`).
fn render_double(value: f64) -> String {
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0e{exponent}")
        }
        _ => text,
    }
}

fn object_to_json(
    object: &dyn Reflected,
    excluded: &[&str],
) -> IntrospectResult<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for (name, value) in retained_fields(object, excluded)? {
        // Derived layers come first; a base field of the same name is shadowed.
        if map.contains_key(name) {
            continue;
        }
        map.insert(name.to_string(), value_to_json(&value)?);
    }
    Ok(serde_json::Value::Object(map))
}

fn value_to_json(value: &Value<'_>) -> IntrospectResult<serde_json::Value> {
    use serde_json::Value as Json;

    let json = match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(*v),
        Value::Char(v) => Json::String(v.to_string()),
        Value::Int(v) => Json::from(*v),
        Value::Long(v) => Json::from(*v),
        Value::Wide(v) => match i64::try_from(*v) {
            Ok(narrow) => Json::from(narrow),
            Err(_) => match u64::try_from(*v) {
                Ok(unsigned) => Json::from(unsigned),
                Err(_) => Json::String(v.to_string()),
            },
        },
        Value::Double(v) => serde_json::Number::from_f64(*v)
            .map_or_else(|| Json::String(format!("{v:?}")), Json::Number),
        Value::Text(v) => Json::String((*v).to_string()),
        Value::Decimal(v) => Json::String(v.to_string()),
        Value::Date(v) => Json::String(v.to_string()),
        Value::DateTime(v) => Json::String(v.to_rfc3339()),
        Value::Timestamp(v) => Json::String(v.to_string()),
        Value::Variant { name, .. } => Json::String((*name).to_string()),
        Value::Object(object) => {
            let excluded = string_exclusions(Some(*object));
            object_to_json(*object, &excluded)?
        }
        Value::List(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(value_to_json(item)?);
            }
            Json::Array(array)
        }
        Value::Map(entries) => {
            let mut map = serde_json::Map::new();
            for (key, value) in entries {
                let key = match key {
                    Value::Text(text) => (*text).to_string(),
                    other => render_value(other, ToStringStyle::SingleLine)?,
                };
                map.insert(key, value_to_json(value)?);
            }
            Json::Object(map)
        }
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fieldwise_core::Decimal;

    fn render(value: Value<'_>) -> String {
        render_value(&value, ToStringStyle::MultiLine).unwrap()
    }

    #[test]
    fn scalars_render_plainly() {
        assert_eq!(render(Value::Null), "<null>");
        assert_eq!(render(Value::Int(30)), "30");
        assert_eq!(render(Value::Double(2.0)), "2.0");
        assert_eq!(render(Value::Double(1e20)), "1.0e20");
        assert_eq!(render(Value::Double(-2.5e-8)), "-2.5e-8");
        assert_eq!(render(Value::Double(f64::NAN)), "NaN");
        assert_eq!(render(Value::Double(f64::INFINITY)), "inf");
        assert_eq!(render(Value::Text("Ann")), "Ann");
        assert_eq!(render(Value::Decimal(Decimal::new(1250, 2))), "12.50");
        assert_eq!(
            render(Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())),
            "2024-02-29"
        );
        assert_eq!(render(Value::Variant { name: "Gold", ordinal: 2 }), "Gold");
    }

    #[test]
    fn collections_render_in_braces() {
        assert_eq!(
            render(Value::List(vec![Value::Int(1), Value::Null, Value::Int(3)])),
            "{1,<null>,3}"
        );
        assert_eq!(
            render(Value::Map(vec![
                (Value::Text("a"), Value::Long(1)),
                (Value::Text("b"), Value::Long(2)),
            ])),
            "{a=1,b=2}"
        );
    }

    #[test]
    fn json_values_keep_precision_as_text() {
        assert_eq!(
            value_to_json(&Value::Decimal(Decimal::new(1, 1))).unwrap(),
            serde_json::json!("0.1")
        );
        assert_eq!(
            value_to_json(&Value::Wide(i128::MAX)).unwrap(),
            serde_json::json!(i128::MAX.to_string())
        );
        assert_eq!(
            value_to_json(&Value::Wide(u64::MAX as i128)).unwrap(),
            serde_json::json!(u64::MAX)
        );
        assert_eq!(
            value_to_json(&Value::Double(f64::NAN)).unwrap(),
            serde_json::json!("NaN")
        );
    }

    #[test]
    fn absent_object_renders_null_marker() {
        assert_eq!(
            reflection_to_string(None, &[], ToStringStyle::MultiLine).unwrap(),
            "<null>"
        );
        assert_eq!(
            reflection_to_string(None, &[], ToStringStyle::Json).unwrap(),
            "null"
        );
    }
}
