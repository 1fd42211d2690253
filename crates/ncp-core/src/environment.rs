//! Environment oracle backed by a known platform version

use std::sync::LazyLock;

use crate::prelude::*;

static V1_8: LazyLock<GameVersion> = LazyLock::new(|| GameVersion::new(&[1, 8]));

/// Answers version and bug-compatibility questions for a fixed platform version
#[derive(Debug, Clone)]
pub struct ServerEnvironment {
	version: GameVersion,
}

impl ServerEnvironment {
	pub fn new(version: GameVersion) -> Self {
		Self { version }
	}

	/// Parse a version string reported by the host (e.g. "1.8.8")
	pub fn parse(version: &str) -> ClResult<Self> {
		Ok(Self::new(version.parse()?))
	}
}

impl Environment for ServerEnvironment {
	fn game_version(&self) -> &GameVersion {
		&self.version
	}

	fn bug_compat(&self, bug: Bug) -> bool {
		match bug {
			Bug::PvpKnockBackVelocity => self.version >= *V1_8,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pvp_knockback_velocity() {
		let old = ServerEnvironment::parse("1.7.10").unwrap();
		let new = ServerEnvironment::parse("1.8.8").unwrap();
		assert!(!old.bug_compat(Bug::PvpKnockBackVelocity));
		assert!(new.bug_compat(Bug::PvpKnockBackVelocity));
	}

	#[test]
	fn test_version_at_least() {
		let env = ServerEnvironment::parse("1.9.4").unwrap();
		assert!(env.is_version_at_least(&GameVersion::new(&[1, 9])));
		assert!(!env.is_version_at_least(&GameVersion::new(&[1, 10])));
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(ServerEnvironment::parse("unknown").is_err());
	}
}

// vim: ts=4
