//! Shared types, settings source traits, and core utilities for the check configuration.
//!
//! This crate contains the foundational types shared between the core crate
//! and all settings adapters. Keeping them here lets adapters depend on the
//! traits without pulling in the snapshot and cache machinery.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod check_type;
pub mod environment;
pub mod error;
pub mod prelude;
pub mod settings;
pub mod types;

// vim: ts=4
