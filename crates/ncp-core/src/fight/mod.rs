//! Fight checks configuration
//!
//! One [`FightConfig`] snapshot per world, cached by [`FightConfigCache`] and
//! exposed to the registry through [`FightConfigProvider`].

pub mod cache;
pub mod config;
pub mod paths;

pub use cache::{FightConfigCache, FightConfigProvider};
pub use config::FightConfig;

// vim: ts=4
