//! Error type shared by settings sources and the configuration core

use std::fmt;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Setting has neither a configured value nor a default
	MissingSetting(String),
	/// Setting is present but has the wrong type or an unusable value
	ValidationError(String),
	/// Configuration could not be loaded or registered
	ConfigError(String),
	Parse,

	// externals
	Io(std::io::Error),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::MissingSetting(path) => write!(f, "missing setting: {}", path),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::Io(e) => write!(f, "io error: {}", e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_names_path() {
		let err = Error::MissingSetting("checks.fight.reach.active".into());
		assert_eq!(err.to_string(), "missing setting: checks.fight.reach.active");
	}

	#[test]
	fn test_io_error_source() {
		let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
		assert!(matches!(err, Error::Io(_)));
		assert!(std::error::Error::source(&err).is_some());
	}
}

// vim: ts=4
