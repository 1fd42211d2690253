//! Settings source traits
//!
//! A settings source is a read-only, loosely typed key/value view onto one
//! scope's configuration. Paths are dot-separated (e.g. `checks.fight.reach.active`).
//!
//! Typed reads take an optional default. With `None` the source falls back to
//! its own default table and signals `Error::MissingSetting` if it has none.
//! Failures reading the underlying store are the source's errors; callers
//! propagate them unchanged.

use std::sync::Arc;

use crate::prelude::*;

pub trait SettingsSource: Send + Sync {
	fn get_bool(&self, path: &str, default: Option<bool>) -> ClResult<bool>;

	fn get_int(&self, path: &str, default: Option<i32>) -> ClResult<i32>;

	fn get_long(&self, path: &str, default: Option<i64>) -> ClResult<i64>;

	fn get_double(&self, path: &str, default: Option<f64>) -> ClResult<f64>;

	/// Tri-state read, `default` applies when the value is absent
	fn get_almost_boolean(&self, path: &str, default: AlmostBoolean) -> ClResult<AlmostBoolean>;

	/// Resolve the action list stored at `path`, bound to `permission`
	fn get_action_list(&self, path: &str, permission: Permission) -> ClResult<ActionList>;

	/// Read a double narrowed to `f32`
	///
	/// Values that do not narrow to a finite `f32` yield `default`.
	#[allow(clippy::cast_possible_truncation)]
	fn get_float(&self, path: &str, default: Option<f32>) -> ClResult<f32> {
		let raw = self.get_double(path, default.map(f64::from))?;
		let value = raw as f32;
		if value.is_finite() {
			return Ok(value);
		}
		match default {
			Some(default) => {
				debug!("Setting {} corrected: {} -> {} (not a finite float)", path, raw, default);
				Ok(default)
			}
			None => Err(Error::ValidationError(format!("Setting '{}' is not a finite float, got {}", path, raw))),
		}
	}

	/// Read a double and correct it into `[min, max]`
	///
	/// Absent values yield `default`. Out-of-range values are clamped to the
	/// nearest bound instead of being rejected.
	fn get_double_in_range(&self, path: &str, min: f64, max: f64, default: f64) -> ClResult<f64> {
		let raw = self.get_double(path, Some(default))?;
		let value = clamp_f64(raw, min, max, default);
		if value.to_bits() != raw.to_bits() {
			debug!("Setting {} corrected: {} -> {} (range {}..={})", path, raw, value, min, max);
		}
		Ok(value)
	}
}

/// Maps a scope to the settings source holding its configuration
pub trait SettingsProvider: Send + Sync {
	fn source_for(&self, world: &WorldId) -> ClResult<Arc<dyn SettingsSource>>;
}

/// Clamp `value` into `[min, max]`
///
/// Non-finite values have no nearest bound and fall back to `default`, which
/// is clamped as well. An inverted range collapses to `max`.
pub fn clamp_f64(value: f64, min: f64, max: f64, default: f64) -> f64 {
	let value = if value.is_finite() { value } else { default };
	if value > max || min > max {
		max
	} else if value < min {
		min
	} else {
		value
	}
}


// vim: ts=4
