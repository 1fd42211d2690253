//! Check identifiers
//!
//! Every check belongs to a family (its parent group). Configuration providers
//! are registered per family, and the enablement query of a family's config
//! decides which of the identifiers it knows about.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckType {
	// Groups
	BlockBreak,
	Chat,
	Fight,
	Moving,

	// Block break
	BlockBreakFastBreak,

	// Chat
	ChatText,

	// Fight
	FightAngle,
	FightCritical,
	FightDirection,
	FightFastHeal,
	FightGodMode,
	FightNoSwing,
	FightReach,
	FightSelfHit,
	FightSpeed,

	// Moving
	MovingSurvivalFly,
}

impl CheckType {
	pub const ALL: [CheckType; 16] = [
		CheckType::BlockBreak,
		CheckType::Chat,
		CheckType::Fight,
		CheckType::Moving,
		CheckType::BlockBreakFastBreak,
		CheckType::ChatText,
		CheckType::FightAngle,
		CheckType::FightCritical,
		CheckType::FightDirection,
		CheckType::FightFastHeal,
		CheckType::FightGodMode,
		CheckType::FightNoSwing,
		CheckType::FightReach,
		CheckType::FightSelfHit,
		CheckType::FightSpeed,
		CheckType::MovingSurvivalFly,
	];

	/// Group this check belongs to. Groups are their own family.
	pub fn family(self) -> CheckType {
		match self {
			CheckType::BlockBreak | CheckType::BlockBreakFastBreak => CheckType::BlockBreak,
			CheckType::Chat | CheckType::ChatText => CheckType::Chat,
			CheckType::Fight
			| CheckType::FightAngle
			| CheckType::FightCritical
			| CheckType::FightDirection
			| CheckType::FightFastHeal
			| CheckType::FightGodMode
			| CheckType::FightNoSwing
			| CheckType::FightReach
			| CheckType::FightSelfHit
			| CheckType::FightSpeed => CheckType::Fight,
			CheckType::Moving | CheckType::MovingSurvivalFly => CheckType::Moving,
		}
	}

	pub fn is_group(self) -> bool {
		self.family() == self
	}

	/// Dotted name as used in configuration paths and log lines
	pub fn config_name(self) -> &'static str {
		match self {
			CheckType::BlockBreak => "blockbreak",
			CheckType::Chat => "chat",
			CheckType::Fight => "fight",
			CheckType::Moving => "moving",
			CheckType::BlockBreakFastBreak => "blockbreak.fastbreak",
			CheckType::ChatText => "chat.text",
			CheckType::FightAngle => "fight.angle",
			CheckType::FightCritical => "fight.critical",
			CheckType::FightDirection => "fight.direction",
			CheckType::FightFastHeal => "fight.fastheal",
			CheckType::FightGodMode => "fight.godmode",
			CheckType::FightNoSwing => "fight.noswing",
			CheckType::FightReach => "fight.reach",
			CheckType::FightSelfHit => "fight.selfhit",
			CheckType::FightSpeed => "fight.speed",
			CheckType::MovingSurvivalFly => "moving.survivalfly",
		}
	}
}

impl fmt::Display for CheckType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.config_name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_family() {
		assert_eq!(CheckType::FightReach.family(), CheckType::Fight);
		assert_eq!(CheckType::Fight.family(), CheckType::Fight);
		assert_eq!(CheckType::MovingSurvivalFly.family(), CheckType::Moving);
		assert!(CheckType::Chat.is_group());
		assert!(!CheckType::ChatText.is_group());
	}

	#[test]
	fn test_config_name_prefixed_by_family() {
		for check in CheckType::ALL {
			let family = check.family().config_name();
			assert!(check.config_name().starts_with(family), "{}", check);
		}
	}
}

// vim: ts=4
