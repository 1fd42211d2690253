//! Platform version and bug-compatibility oracle

use crate::types::GameVersion;

/// Named compatibility decisions that depend on the running platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bug {
	/// Whether PvP knock back needs velocity to be applied explicitly
	PvpKnockBackVelocity,
}

/// Environment capabilities consulted while resolving conditional settings
pub trait Environment: Send + Sync {
	/// Version of the running platform
	fn game_version(&self) -> &GameVersion;

	/// Decide a named bug-compatibility question for the running platform
	fn bug_compat(&self, bug: Bug) -> bool;

	fn is_version_at_least(&self, version: &GameVersion) -> bool {
		self.game_version() >= version
	}
}

// vim: ts=4
