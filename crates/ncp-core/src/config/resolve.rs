//! Resolution of conditional settings
//!
//! Settings whose final value depends on the running platform are resolved
//! here, separately from snapshot construction.

use crate::prelude::*;

/// Resolve a flag for a feature retired at `retired_at`
///
/// Below that version the flag is read through `read`. At or above it the
/// result is `false` and `read` is never called.
pub fn resolve_version_gated<F>(
	env: &dyn Environment,
	retired_at: &GameVersion,
	read: F,
) -> ClResult<bool>
where
	F: FnOnce() -> ClResult<bool>,
{
	if env.is_version_at_least(retired_at) {
		return Ok(false);
	}
	read()
}

/// Resolve a tri-state value, deferring `Maybe` to the environment's decision on `bug`
pub fn resolve_tri_state(raw: AlmostBoolean, env: &dyn Environment, bug: Bug) -> bool {
	match raw {
		AlmostBoolean::Maybe => env.bug_compat(bug),
		explicit => explicit.decide(),
	}
}


// vim: ts=4
