//! YAML file backed settings store
//!
//! A settings directory holds `config.yml` with the global settings and
//! optional `<world>_config.yml` files overriding them per world. Lookups for
//! a world go through the world layer, then the global layer. Reads without an
//! explicit default finally fall back to the built-in default table.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod defaults;
pub mod value;

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ncp::prelude::*;
use ncp::settings::{SettingsProvider, SettingsSource};

pub const GLOBAL_FILE: &str = "config.yml";
pub const WORLD_FILE_SUFFIX: &str = "_config.yml";

fn parse_yaml(name: &str, text: &str) -> ClResult<Value> {
	if text.trim().is_empty() {
		return Ok(Value::Null);
	}
	serde_yaml::from_str::<Value>(text)
		.map_err(|e| Error::ConfigError(format!("Invalid YAML in {}: {}", name, e)))
}

/// Parsed user settings (global plus world overrides)
#[derive(Debug, Default)]
struct Layers {
	global: Arc<Value>,
	worlds: HashMap<WorldId, Arc<Value>>,
}

impl Layers {
	fn read_dir(dir: &Path) -> ClResult<Self> {
		let mut layers = Layers::default();

		let global_path = dir.join(GLOBAL_FILE);
		if global_path.is_file() {
			let text = std::fs::read_to_string(&global_path)?;
			layers.global = Arc::new(parse_yaml(GLOBAL_FILE, &text)?);
		} else {
			debug!("No {} in {}, using defaults", GLOBAL_FILE, dir.display());
		}

		for entry in std::fs::read_dir(dir)? {
			let path = entry?.path();
			let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
				continue;
			};
			let Some(world) = file_name.strip_suffix(WORLD_FILE_SUFFIX) else {
				continue;
			};
			if world.is_empty() {
				warn!("Ignoring settings file without world name: {}", path.display());
				continue;
			}
			let text = std::fs::read_to_string(&path)?;
			layers.worlds.insert(WorldId::new(world), Arc::new(parse_yaml(file_name, &text)?));
		}

		Ok(layers)
	}
}

/// Settings store over a directory of YAML files (or in-memory YAML documents)
pub struct YamlSettingsStore {
	dir: Option<PathBuf>,
	defaults: Arc<Value>,
	layers: RwLock<Arc<Layers>>,
}

impl YamlSettingsStore {
	/// Load `config.yml` and all `<world>_config.yml` files from `dir`
	pub fn load_dir(dir: impl Into<PathBuf>) -> ClResult<Self> {
		let dir = dir.into();
		let layers = Layers::read_dir(&dir)?;
		info!("Loaded settings from {} ({} world overrides)", dir.display(), layers.worlds.len());
		Ok(Self { dir: Some(dir), defaults: Self::parse_defaults()?, layers: RwLock::new(Arc::new(layers)) })
	}

	/// Build a store from YAML documents: the global one and `(world, yaml)` overrides
	pub fn from_yaml<'a, I>(global: &str, worlds: I) -> ClResult<Self>
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut layers = Layers { global: Arc::new(parse_yaml(GLOBAL_FILE, global)?), ..Layers::default() };
		for (world, text) in worlds {
			let name = format!("{}{}", world, WORLD_FILE_SUFFIX);
			layers.worlds.insert(WorldId::new(world), Arc::new(parse_yaml(&name, text)?));
		}
		Ok(Self { dir: None, defaults: Self::parse_defaults()?, layers: RwLock::new(Arc::new(layers)) })
	}

	/// Store holding only the built-in defaults
	pub fn defaults_only() -> ClResult<Self> {
		Self::from_yaml("", [])
	}

	fn parse_defaults() -> ClResult<Arc<Value>> {
		Ok(Arc::new(parse_yaml("built-in defaults", defaults::DEFAULT_CONFIG)?))
	}

	/// Re-read the settings directory
	///
	/// Caches built from this store are not touched; invalidate them afterwards.
	pub fn reload(&self) -> ClResult<()> {
		let dir = self
			.dir
			.as_ref()
			.ok_or_else(|| Error::ConfigError("Settings store has no directory to reload".into()))?;
		let layers = Layers::read_dir(dir)?;
		info!("Reloaded settings from {} ({} world overrides)", dir.display(), layers.worlds.len());
		*self.layers.write() = Arc::new(layers);
		Ok(())
	}

	/// Worlds with their own settings file
	pub fn worlds(&self) -> Vec<WorldId> {
		let mut worlds: Vec<_> = self.layers.read().worlds.keys().cloned().collect();
		worlds.sort();
		worlds
	}

	/// Settings view for `world`, fixed to the layers loaded at call time
	pub fn settings_for(&self, world: &WorldId) -> LayeredSettings {
		let layers = self.layers.read().clone();
		let mut user = Vec::with_capacity(2);
		if let Some(world_layer) = layers.worlds.get(world) {
			user.push(world_layer.clone());
		}
		user.push(layers.global.clone());
		LayeredSettings { user, defaults: self.defaults.clone() }
	}
}

impl SettingsProvider for YamlSettingsStore {
	fn source_for(&self, world: &WorldId) -> ClResult<Arc<dyn SettingsSource>> {
		Ok(Arc::new(self.settings_for(world)))
	}
}

/// Read-only settings of one world: world layer, global layer, built-in defaults
#[derive(Debug, Clone)]
pub struct LayeredSettings {
	user: Vec<Arc<Value>>,
	defaults: Arc<Value>,
}

impl LayeredSettings {
	fn user_value(&self, path: &str) -> Option<&Value> {
		self.user.iter().find_map(|layer| value::lookup(layer, path))
	}

	/// Explicit defaults win over the built-in table
	fn read<T>(
		&self,
		path: &str,
		default: Option<T>,
		convert: impl Fn(&str, &Value) -> ClResult<T>,
	) -> ClResult<T> {
		if let Some(raw) = self.user_value(path) {
			return convert(path, raw);
		}
		if let Some(default) = default {
			return Ok(default);
		}
		match value::lookup(&self.defaults, path) {
			Some(raw) => convert(path, raw),
			None => Err(Error::MissingSetting(path.to_string())),
		}
	}
}

impl SettingsSource for LayeredSettings {
	fn get_bool(&self, path: &str, default: Option<bool>) -> ClResult<bool> {
		self.read(path, default, value::to_bool)
	}

	fn get_int(&self, path: &str, default: Option<i32>) -> ClResult<i32> {
		self.read(path, default, value::to_i32)
	}

	fn get_long(&self, path: &str, default: Option<i64>) -> ClResult<i64> {
		self.read(path, default, value::to_i64)
	}

	fn get_double(&self, path: &str, default: Option<f64>) -> ClResult<f64> {
		self.read(path, default, value::to_f64)
	}

	fn get_almost_boolean(&self, path: &str, default: AlmostBoolean) -> ClResult<AlmostBoolean> {
		self.read(path, Some(default), value::to_almost_boolean)
	}

	fn get_action_list(&self, path: &str, permission: Permission) -> ClResult<ActionList> {
		let raw = self.user_value(path).or_else(|| value::lookup(&self.defaults, path));
		match raw {
			Some(raw) => Ok(ActionList::new(permission, value::to_text(path, raw)?)),
			None => Ok(ActionList::new(permission, "")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PERM: Permission = Permission("nocheatplus.checks.fight.reach");

	#[test]
	fn test_defaults_parse() {
		let store = YamlSettingsStore::defaults_only().unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		assert!(settings.get_bool("checks.fight.reach.active", None).unwrap());
		assert_eq!(settings.get_long("checks.fight.speed.buckets.duration", None).unwrap(), 333);
	}

	#[test]
	fn test_almost_boolean_uses_caller_default() {
		let store = YamlSettingsStore::defaults_only().unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		let path = "checks.fight.pvp.knockbackvelocity";
		assert_eq!(settings.get_almost_boolean(path, AlmostBoolean::No).unwrap(), AlmostBoolean::No);
		assert_eq!(settings.get_almost_boolean(path, AlmostBoolean::Maybe).unwrap(), AlmostBoolean::Maybe);

		let store = YamlSettingsStore::from_yaml("checks:\n  fight:\n    pvp:\n      knockbackvelocity: default\n", [])
			.unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		assert_eq!(settings.get_almost_boolean(path, AlmostBoolean::No).unwrap(), AlmostBoolean::Maybe);
	}

	#[test]
	fn test_world_overrides_global() {
		let store = YamlSettingsStore::from_yaml(
			"checks:\n  fight:\n    speed:\n      limit: 20\n      active: false\n",
			[("arena", "checks:\n  fight:\n    speed:\n      limit: 30\n")],
		)
		.unwrap();

		let arena = store.settings_for(&WorldId::from("arena"));
		assert_eq!(arena.get_int("checks.fight.speed.limit", None).unwrap(), 30);
		// falls through to global
		assert!(!arena.get_bool("checks.fight.speed.active", None).unwrap());

		let world = store.settings_for(&WorldId::from("world"));
		assert_eq!(world.get_int("checks.fight.speed.limit", None).unwrap(), 20);
		// falls through to defaults
		assert_eq!(world.get_int("checks.fight.speed.shortterm.ticks", None).unwrap(), 7);
	}

	#[test]
	fn test_explicit_default_wins_over_builtin() {
		let store = YamlSettingsStore::defaults_only().unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		assert_eq!(settings.get_long("checks.fight.speed.buckets.duration", Some(100)).unwrap(), 100);
		assert!(!settings.get_bool("checks.fight.unknown", Some(false)).unwrap());
	}

	#[test]
	fn test_missing_without_default() {
		let store = YamlSettingsStore::defaults_only().unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		let res = settings.get_double("checks.fight.unknown.value", None);
		assert!(matches!(res, Err(Error::MissingSetting(ref p)) if p == "checks.fight.unknown.value"));
	}

	#[test]
	fn test_wrong_type_is_error() {
		let store =
			YamlSettingsStore::from_yaml("checks:\n  fight:\n    reach:\n      active: maybe\n", []).unwrap();
		let settings = store.settings_for(&WorldId::from("world"));
		assert!(matches!(
			settings.get_bool("checks.fight.reach.active", None),
			Err(Error::ValidationError(_))
		));
	}

	#[test]
	fn test_action_lists() {
		let store = YamlSettingsStore::from_yaml(
			"checks:\n  fight:\n    reach:\n      actions: \"cancel vl>5 cancel\"\n",
			[],
		)
		.unwrap();
		let settings = store.settings_for(&WorldId::from("world"));

		let reach = settings.get_action_list("checks.fight.reach.actions", PERM).unwrap();
		assert_eq!(reach.definition(), "cancel vl>5 cancel");
		assert_eq!(reach.permission(), PERM);

		let speed = settings.get_action_list("checks.fight.speed.actions", PERM).unwrap();
		assert_eq!(speed.definition(), "log:fspeed:0:5:if cancel");

		let none = settings.get_action_list("checks.fight.nothing.actions", PERM).unwrap();
		assert!(none.is_empty());
	}

	#[test]
	fn test_invalid_yaml() {
		let res = YamlSettingsStore::from_yaml("checks: [unclosed", []);
		assert!(matches!(res, Err(Error::ConfigError(_))));
	}

	#[test]
	fn test_reload_requires_directory() {
		let store = YamlSettingsStore::defaults_only().unwrap();
		assert!(matches!(store.reload(), Err(Error::ConfigError(_))));
	}
}

// vim: ts=4
