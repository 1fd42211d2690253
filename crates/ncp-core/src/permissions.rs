//! Permission nodes action lists are bound to

use ncp_types::types::Permission;

pub const FIGHT_ANGLE: Permission = Permission("nocheatplus.checks.fight.angle");
pub const FIGHT_CRITICAL: Permission = Permission("nocheatplus.checks.fight.critical");
pub const FIGHT_DIRECTION: Permission = Permission("nocheatplus.checks.fight.direction");
pub const FIGHT_FASTHEAL: Permission = Permission("nocheatplus.checks.fight.fastheal");
pub const FIGHT_GODMODE: Permission = Permission("nocheatplus.checks.fight.godmode");
pub const FIGHT_NOSWING: Permission = Permission("nocheatplus.checks.fight.noswing");
pub const FIGHT_REACH: Permission = Permission("nocheatplus.checks.fight.reach");
pub const FIGHT_SELFHIT: Permission = Permission("nocheatplus.checks.fight.selfhit");
pub const FIGHT_SPEED: Permission = Permission("nocheatplus.checks.fight.speed");


// vim: ts=4
