//! Per-world cache of fight configuration snapshots

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::config::FightConfig;
use crate::config::{CheckConfig, ConfigProvider};
use crate::prelude::*;

struct Entries {
	/// Bumped by every clear; builds started in an older generation are not published
	generation: u64,
	worlds: HashMap<WorldId, Arc<FightConfig>>,
}

/// Cache mapping worlds to their fight configuration
///
/// Snapshots are built on first access without holding the lock and
/// published whole. Once published, every caller gets the same instance
/// until `clear` is called.
pub struct FightConfigCache {
	sources: Arc<dyn SettingsProvider>,
	env: Arc<dyn Environment>,
	entries: RwLock<Entries>,
}

impl FightConfigCache {
	pub fn new(sources: Arc<dyn SettingsProvider>, env: Arc<dyn Environment>) -> Self {
		Self { sources, env, entries: RwLock::new(Entries { generation: 0, worlds: HashMap::new() }) }
	}

	/// Get the configuration for `world`, building it on first access
	pub fn get_config(&self, world: &WorldId) -> ClResult<Arc<FightConfig>> {
		let generation = {
			let entries = self.entries.read();
			if let Some(config) = entries.worlds.get(world) {
				return Ok(config.clone());
			}
			entries.generation
		};

		debug!("Fight config cache miss: {}", world);
		let source = self.sources.source_for(world)?;
		let built = Arc::new(FightConfig::from_source(source.as_ref(), self.env.as_ref())?);

		let mut entries = self.entries.write();
		if entries.generation != generation {
			// cleared while building, the source may have changed since
			debug!("Fight config for {} built across a clear, not cached", world);
			return Ok(built);
		}
		if let Some(published) = entries.worlds.get(world) {
			// another caller published first
			return Ok(published.clone());
		}
		debug!("Fight config built: {} (debug={})", world, built.debug);
		entries.worlds.insert(world.clone(), built.clone());
		Ok(built)
	}

	/// Drop all cached configurations
	pub fn clear(&self) {
		let mut entries = self.entries.write();
		let dropped = entries.worlds.len();
		entries.worlds.clear();
		entries.generation = entries.generation.wrapping_add(1);
		info!("Fight config cache cleared ({} worlds)", dropped);
	}

	pub fn contains(&self, world: &WorldId) -> bool {
		self.entries.read().worlds.contains_key(world)
	}

	pub fn len(&self) -> usize {
		self.entries.read().worlds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().worlds.is_empty()
	}
}

/// Fight family provider for the config registry
pub struct FightConfigProvider {
	cache: Arc<FightConfigCache>,
}

impl FightConfigProvider {
	pub fn new(cache: Arc<FightConfigCache>) -> Self {
		Self { cache }
	}

	pub fn cache(&self) -> &Arc<FightConfigCache> {
		&self.cache
	}
}

impl ConfigProvider for FightConfigProvider {
	fn family(&self) -> CheckType {
		CheckType::Fight
	}

	fn resolve(&self, world: &WorldId) -> ClResult<Arc<dyn CheckConfig>> {
		let config: Arc<dyn CheckConfig> = self.cache.get_config(world)?;
		Ok(config)
	}

	fn invalidate_all(&self) {
		self.cache.clear();
	}
}


// vim: ts=4
