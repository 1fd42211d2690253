//! Path lookup and lenient coercion of YAML values

use serde_json::Value;

use ncp::prelude::*;

/// Walk a dotted path through nested maps. Null counts as absent.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
	let mut node = root;
	for key in path.split('.') {
		node = node.as_object()?.get(key)?;
	}
	if node.is_null() { None } else { Some(node) }
}

fn type_error<T>(path: &str, expected: &str, value: &Value) -> ClResult<T> {
	Err(Error::ValidationError(format!("Setting '{}' is not {}, got {}", path, expected, value)))
}

pub fn to_bool(path: &str, value: &Value) -> ClResult<bool> {
	match value {
		Value::Bool(b) => Ok(*b),
		Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
			"true" | "yes" | "on" => Ok(true),
			"false" | "no" | "off" => Ok(false),
			_ => type_error(path, "a boolean", value),
		},
		_ => type_error(path, "a boolean", value),
	}
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn to_i64(path: &str, value: &Value) -> ClResult<i64> {
	match value {
		Value::Number(n) => {
			if let Some(i) = n.as_i64() {
				return Ok(i);
			}
			match n.as_f64() {
				Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
					Ok(f as i64)
				}
				_ => type_error(path, "an integer", value),
			}
		}
		Value::String(s) => s.trim().parse().or_else(|_| type_error(path, "an integer", value)),
		_ => type_error(path, "an integer", value),
	}
}

pub fn to_i32(path: &str, value: &Value) -> ClResult<i32> {
	let wide = to_i64(path, value)?;
	i32::try_from(wide).or_else(|_| type_error(path, "a 32-bit integer", value))
}

pub fn to_f64(path: &str, value: &Value) -> ClResult<f64> {
	match value {
		Value::Number(n) => n.as_f64().map_or_else(|| type_error(path, "a number", value), Ok),
		Value::String(s) => s.trim().parse().or_else(|_| type_error(path, "a number", value)),
		_ => type_error(path, "a number", value),
	}
}

pub fn to_almost_boolean(path: &str, value: &Value) -> ClResult<AlmostBoolean> {
	match value {
		Value::Bool(b) => Ok(AlmostBoolean::from(*b)),
		Value::String(s) => {
			AlmostBoolean::match_str(s).map_or_else(|| type_error(path, "a tri-state flag", value), Ok)
		}
		_ => type_error(path, "a tri-state flag", value),
	}
}

pub fn to_text<'a>(path: &str, value: &'a Value) -> ClResult<&'a str> {
	match value {
		Value::String(s) => Ok(s.as_str()),
		_ => type_error(path, "a string", value),
	}
}


// vim: ts=4
