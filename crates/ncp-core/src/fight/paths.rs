//! Settings paths of the fight checks

pub const FIGHT_DEBUG: &str = "checks.fight.debug";

pub const FIGHT_ANGLE_CHECK: &str = "checks.fight.angle.active";
pub const FIGHT_ANGLE_THRESHOLD: &str = "checks.fight.angle.threshold";
pub const FIGHT_ANGLE_ACTIONS: &str = "checks.fight.angle.actions";

pub const FIGHT_TOOLCHANGEPENALTY: &str = "checks.fight.toolchangepenalty";

pub const FIGHT_CRITICAL_CHECK: &str = "checks.fight.critical.active";
pub const FIGHT_CRITICAL_FALLDISTANCE: &str = "checks.fight.critical.falldistance";
pub const FIGHT_CRITICAL_ACTIONS: &str = "checks.fight.critical.actions";

pub const FIGHT_DIRECTION_CHECK: &str = "checks.fight.direction.active";
pub const FIGHT_DIRECTION_STRICT: &str = "checks.fight.direction.strict";
pub const FIGHT_DIRECTION_PENALTY: &str = "checks.fight.direction.penalty";
pub const FIGHT_DIRECTION_ACTIONS: &str = "checks.fight.direction.actions";

pub const FIGHT_FASTHEAL_CHECK: &str = "checks.fight.fastheal.active";
pub const FIGHT_FASTHEAL_INTERVAL: &str = "checks.fight.fastheal.interval";
pub const FIGHT_FASTHEAL_BUFFER: &str = "checks.fight.fastheal.buffer";
pub const FIGHT_FASTHEAL_ACTIONS: &str = "checks.fight.fastheal.actions";

pub const FIGHT_GODMODE_CHECK: &str = "checks.fight.godmode.active";
pub const FIGHT_GODMODE_LAGMINAGE: &str = "checks.fight.godmode.lagminage";
pub const FIGHT_GODMODE_LAGMAXAGE: &str = "checks.fight.godmode.lagmaxage";
pub const FIGHT_GODMODE_ACTIONS: &str = "checks.fight.godmode.actions";

pub const FIGHT_NOSWING_CHECK: &str = "checks.fight.noswing.active";
pub const FIGHT_NOSWING_ACTIONS: &str = "checks.fight.noswing.actions";

pub const FIGHT_REACH_CHECK: &str = "checks.fight.reach.active";
pub const FIGHT_REACH_SURVIVALDISTANCE: &str = "checks.fight.reach.survivaldistance";
pub const FIGHT_REACH_PENALTY: &str = "checks.fight.reach.penalty";
pub const FIGHT_REACH_PRECISION: &str = "checks.fight.reach.precision";
pub const FIGHT_REACH_REDUCE: &str = "checks.fight.reach.reduce";
pub const FIGHT_REACH_REDUCEDISTANCE: &str = "checks.fight.reach.reducedistance";
pub const FIGHT_REACH_REDUCESTEP: &str = "checks.fight.reach.reducestep";
pub const FIGHT_REACH_ACTIONS: &str = "checks.fight.reach.actions";

pub const FIGHT_SELFHIT_CHECK: &str = "checks.fight.selfhit.active";
pub const FIGHT_SELFHIT_ACTIONS: &str = "checks.fight.selfhit.actions";

pub const FIGHT_SPEED_CHECK: &str = "checks.fight.speed.active";
pub const FIGHT_SPEED_LIMIT: &str = "checks.fight.speed.limit";
pub const FIGHT_SPEED_BUCKETS_N: &str = "checks.fight.speed.buckets.number";
pub const FIGHT_SPEED_BUCKETS_DUR: &str = "checks.fight.speed.buckets.duration";
pub const FIGHT_SPEED_BUCKETS_FACTOR: &str = "checks.fight.speed.buckets.factor";
pub const FIGHT_SPEED_SHORTTERM_LIMIT: &str = "checks.fight.speed.shortterm.limit";
pub const FIGHT_SPEED_SHORTTERM_TICKS: &str = "checks.fight.speed.shortterm.ticks";
pub const FIGHT_SPEED_ACTIONS: &str = "checks.fight.speed.actions";

pub const FIGHT_YAWRATE_CHECK: &str = "checks.fight.yawrate.active";
pub const FIGHT_CANCELDEAD: &str = "checks.fight.canceldead";
pub const FIGHT_PVP_KNOCKBACKVELOCITY: &str = "checks.fight.pvp.knockbackvelocity";

// vim: ts=4
