//! Common value types: world identifiers, versions, tri-state flags, action lists

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::prelude::*;

// WorldId //
//*********//

/// Identifies a configuration scope (a game world, by name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorldId(pub Arc<str>);

impl WorldId {
	pub fn new(name: impl AsRef<str>) -> Self {
		Self(Arc::from(name.as_ref()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for WorldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for WorldId {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

// GameVersion //
//*************//

/// Dotted numeric platform version (e.g. "1.8.8")
///
/// Missing trailing components compare as zero, so `1.9` equals `1.9.0`.
#[derive(Debug, Clone)]
pub struct GameVersion(Box<[u32]>);

impl GameVersion {
	pub fn new(parts: &[u32]) -> Self {
		Self(parts.into())
	}

	fn part(&self, idx: usize) -> u32 {
		self.0.get(idx).copied().unwrap_or(0)
	}
}

impl FromStr for GameVersion {
	type Err = Error;

	fn from_str(s: &str) -> ClResult<Self> {
		let s = s.trim();
		if s.is_empty() {
			return Err(Error::Parse);
		}
		let parts = s
			.split('.')
			.map(|part| part.parse::<u32>().map_err(|_| Error::Parse))
			.collect::<ClResult<Vec<_>>>()?;
		Ok(Self(parts.into()))
	}
}

impl Ord for GameVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		let len = self.0.len().max(other.0.len());
		(0..len)
			.map(|idx| self.part(idx).cmp(&other.part(idx)))
			.find(|ord| *ord != Ordering::Equal)
			.unwrap_or(Ordering::Equal)
	}
}

impl PartialOrd for GameVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for GameVersion {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for GameVersion {}

impl fmt::Display for GameVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, part) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			write!(f, "{}", part)?;
		}
		Ok(())
	}
}

// AlmostBoolean //
//***************//

/// Tri-state setting value: explicit on/off, or "let the environment decide"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlmostBoolean {
	Yes,
	No,
	Maybe,
}

impl AlmostBoolean {
	/// Lenient match used for raw settings values. Returns None for anything unrecognized.
	pub fn match_str(input: &str) -> Option<Self> {
		match input.trim().to_ascii_lowercase().as_str() {
			"true" | "yes" | "on" | "allow" => Some(Self::Yes),
			"false" | "no" | "off" | "deny" => Some(Self::No),
			"default" | "maybe" | "auto" => Some(Self::Maybe),
			_ => None,
		}
	}

	/// Maybe counts as false
	pub fn decide(self) -> bool {
		self == Self::Yes
	}
}

impl From<bool> for AlmostBoolean {
	fn from(value: bool) -> Self {
		if value { Self::Yes } else { Self::No }
	}
}

// Permission //
//************//

/// Named permission node an action list is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permission(pub &'static str);

impl Permission {
	pub fn name(&self) -> &'static str {
		self.0
	}
}

impl fmt::Display for Permission {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

// ActionList //
//************//

/// Opaque action list resolved by a settings source
///
/// The definition text is carried as-is; interpreting it is up to whoever
/// executes the actions when a check fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionList {
	permission: Permission,
	definition: Arc<str>,
}

impl ActionList {
	pub fn new(permission: Permission, definition: impl AsRef<str>) -> Self {
		Self { permission, definition: Arc::from(definition.as_ref()) }
	}

	pub fn permission(&self) -> Permission {
		self.permission
	}

	pub fn definition(&self) -> &str {
		&self.definition
	}

	pub fn is_empty(&self) -> bool {
		self.definition.trim().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn v(s: &str) -> GameVersion {
		s.parse().unwrap()
	}

	#[test]
	fn test_version_parse() {
		assert_eq!(v("1.8.8"), GameVersion::new(&[1, 8, 8]));
		assert_eq!(v(" 1.12 ").to_string(), "1.12");
		assert!("".parse::<GameVersion>().is_err());
		assert!("1..2".parse::<GameVersion>().is_err());
		assert!("1.9-R0.1".parse::<GameVersion>().is_err());
	}

	#[test]
	fn test_version_ordering() {
		assert!(v("1.8.8") < v("1.9"));
		assert!(v("1.10") > v("1.9"));
		assert!(v("1.9.4") >= v("1.9"));
		assert_eq!(v("1.9"), v("1.9.0"));
		assert_eq!(v("1.9").cmp(&v("1.9.0.0")), Ordering::Equal);
	}

	#[test]
	fn test_version_display() {
		assert_eq!(v("1.12.2").to_string(), "1.12.2");
	}

	#[test]
	fn test_almost_boolean_match() {
		assert_eq!(AlmostBoolean::match_str("TRUE"), Some(AlmostBoolean::Yes));
		assert_eq!(AlmostBoolean::match_str("off"), Some(AlmostBoolean::No));
		assert_eq!(AlmostBoolean::match_str("default"), Some(AlmostBoolean::Maybe));
		assert_eq!(AlmostBoolean::match_str("sometimes"), None);
	}

	#[test]
	fn test_almost_boolean_decide() {
		assert!(AlmostBoolean::Yes.decide());
		assert!(!AlmostBoolean::No.decide());
		assert!(!AlmostBoolean::Maybe.decide());
	}

	#[test]
	fn test_action_list_is_opaque() {
		let list = ActionList::new(Permission("perm.reach"), "cancel vl>10 log:reach:0:5:if cancel");
		assert_eq!(list.permission().name(), "perm.reach");
		assert_eq!(list.definition(), "cancel vl>10 log:reach:0:5:if cancel");
		assert!(!list.is_empty());
		assert!(ActionList::new(Permission("p"), "  ").is_empty());
	}

	#[test]
	fn test_world_id() {
		let world = WorldId::from("world_nether");
		assert_eq!(world.as_str(), "world_nether");
		assert_eq!(world, WorldId::new(String::from("world_nether")));
	}
}

// vim: ts=4
