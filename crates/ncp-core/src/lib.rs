//! Check configuration core.
//!
//! Builds one immutable, validated configuration snapshot per world from a
//! settings source, caches it per world, and answers enablement queries for
//! the detection code.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod environment;
pub mod fight;
pub mod permissions;
pub mod prelude;

pub use config::{CheckConfig, ConfigProvider, ConfigRegistry};
pub use environment::ServerEnvironment;
pub use fight::{FightConfig, FightConfigCache, FightConfigProvider};

// vim: ts=4
