//! Shared test setup for the fight configuration tests

#![allow(dead_code)]

use std::sync::Arc;

use ncp_core::{FightConfigCache, ServerEnvironment};
use ncp_settings_adapter_yaml::YamlSettingsStore;

/// Initialize tracing output for tests that want to see cache logs
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// Global settings with every reach value out of order and out of range
pub const BROKEN_REACH: &str = "
checks:
  fight:
    reach:
      survivaldistance: 10.0
      reducedistance: 8.0
      reducestep: 7.5
";

pub fn store(global: &str, worlds: &[(&str, &str)]) -> Arc<YamlSettingsStore> {
	Arc::new(YamlSettingsStore::from_yaml(global, worlds.iter().copied()).unwrap())
}

pub fn cache(store: &Arc<YamlSettingsStore>, version: &str) -> Arc<FightConfigCache> {
	let env = ServerEnvironment::parse(version).unwrap();
	Arc::new(FightConfigCache::new(store.clone(), Arc::new(env)))
}

// vim: ts=4
