//! Check configuration capabilities and the provider registry
//!
//! # Architecture
//!
//! - **CheckConfig**: a resolved, immutable per-world snapshot of one check family
//! - **ConfigProvider**: resolves snapshots for one family and drops them on reload
//! - **ConfigRegistry**: all providers keyed by family; the reload path invalidates them together
//! - **resolve**: version-gated and tri-state setting resolution

pub mod resolve;

use std::collections::HashMap;
use std::sync::Arc;

use crate::prelude::*;

/// Resolved configuration of one check family for one world
pub trait CheckConfig: Send + Sync {
	/// Whether `check` is enabled. Checks this family does not know about are enabled.
	fn is_enabled(&self, check: CheckType) -> bool;

	/// Debug output for the family's checks
	fn debug(&self) -> bool;
}

/// Resolves per-world configuration snapshots for one check family
pub trait ConfigProvider: Send + Sync {
	/// Family group this provider serves (e.g. `CheckType::Fight`)
	fn family(&self) -> CheckType;

	fn resolve(&self, world: &WorldId) -> ClResult<Arc<dyn CheckConfig>>;

	/// Drop every cached snapshot; the next `resolve` rebuilds from current settings
	fn invalidate_all(&self);
}

/// Providers of all check families
pub struct ConfigRegistry {
	providers: HashMap<CheckType, Arc<dyn ConfigProvider>>,
}

impl ConfigRegistry {
	pub fn new() -> Self {
		Self { providers: HashMap::new() }
	}

	/// Register the provider of a check family
	pub fn register(&mut self, provider: Arc<dyn ConfigProvider>) -> ClResult<()> {
		let family = provider.family();
		if !family.is_group() {
			return Err(Error::ConfigError(format!(
				"Config provider family '{}' is not a check group",
				family
			)));
		}
		if self.providers.contains_key(&family) {
			return Err(Error::ConfigError(format!(
				"Config provider for '{}' is already registered",
				family
			)));
		}

		debug!("Registering config provider: {}", family);
		self.providers.insert(family, provider);
		Ok(())
	}

	/// Provider serving the family of `check`
	pub fn get(&self, check: CheckType) -> Option<&Arc<dyn ConfigProvider>> {
		self.providers.get(&check.family())
	}

	/// Resolve the family config of `check` for `world`
	pub fn resolve(&self, world: &WorldId, check: CheckType) -> ClResult<Option<Arc<dyn CheckConfig>>> {
		match self.get(check) {
			Some(provider) => Ok(Some(provider.resolve(world)?)),
			None => Ok(None),
		}
	}

	/// Enablement of `check` in `world`. Families without a provider are enabled.
	pub fn is_enabled(&self, world: &WorldId, check: CheckType) -> ClResult<bool> {
		Ok(self.resolve(world, check)?.is_none_or(|config| config.is_enabled(check)))
	}

	/// Invalidate the caches of every registered provider (reload)
	pub fn invalidate_all(&self) {
		for provider in self.providers.values() {
			provider.invalidate_all();
		}
		info!("Invalidated check configs of {} families", self.providers.len());
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}


// vim: ts=4
