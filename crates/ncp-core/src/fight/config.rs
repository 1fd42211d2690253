//! Fight check configuration snapshot

use std::sync::LazyLock;

use super::paths::*;
use crate::config::resolve::{resolve_tri_state, resolve_version_gated};
use crate::config::CheckConfig;
use crate::permissions;
use crate::prelude::*;

/// Fast heal is not checked from this version on
static FAST_HEAL_RETIRED_AT: LazyLock<GameVersion> = LazyLock::new(|| GameVersion::new(&[1, 9]));

/// Reach distance for survival mode: min, max, default
pub const REACH_SURVIVAL_DISTANCE: (f64, f64, f64) = (3.5, 6.0, 4.4);
/// Lower bound and default of the reduce distance, capped by the survival distance
pub const REACH_REDUCE_DISTANCE: (f64, f64) = (0.0, 0.9);
/// Lower bound and default of the reduce step, capped by the reduce distance
pub const REACH_REDUCE_STEP: (f64, f64) = (0.0, 0.15);

pub const DEFAULT_SPEED_BUCKETS: i32 = 6;
pub const DEFAULT_SPEED_BUCKET_DUR: i64 = 333;
pub const DEFAULT_SPEED_BUCKET_FACTOR: f32 = 1.0;

/// Maximum latency counted in ticks for the loop checks (reach, direction)
// TODO: separate settings for players and other entities
pub const LOOP_MAX_LATENCY_TICKS: i64 = 15;

/// Configuration of the fight checks for one world
///
/// Built once per world by [`FightConfig::from_source`] and shared read-only.
#[derive(Debug, Clone)]
pub struct FightConfig {
	pub debug: bool,

	pub angle_check: bool,
	pub angle_threshold: f64,
	pub angle_actions: ActionList,

	/// Milliseconds attacks are blocked after switching tools
	pub tool_change_attack_penalty: i64,

	pub critical_check: bool,
	pub critical_fall_distance: f64,
	pub critical_actions: ActionList,

	pub direction_check: bool,
	pub direction_strict: bool,
	pub direction_penalty: i64,
	pub direction_actions: ActionList,

	/// Always false from version 1.9 on
	pub fast_heal_check: bool,
	pub fast_heal_interval: i64,
	pub fast_heal_buffer: i64,
	pub fast_heal_actions: ActionList,

	pub god_mode_check: bool,
	pub god_mode_lag_min_age: i64,
	pub god_mode_lag_max_age: i64,
	pub god_mode_actions: ActionList,

	pub no_swing_check: bool,
	pub no_swing_actions: ActionList,

	pub reach_check: bool,
	pub reach_penalty: i64,
	pub reach_precision: bool,
	pub reach_reduce: bool,
	/// In `[3.5, 6.0]`
	pub reach_survival_distance: f64,
	/// In `[0, reach_survival_distance]`
	pub reach_reduce_distance: f64,
	/// In `[0, reach_reduce_distance]`
	pub reach_reduce_step: f64,
	pub reach_actions: ActionList,

	pub self_hit_check: bool,
	pub self_hit_actions: ActionList,

	pub speed_check: bool,
	pub speed_limit: i32,
	pub speed_buckets: i32,
	/// Bucket duration in milliseconds
	pub speed_bucket_dur: i64,
	pub speed_bucket_factor: f32,
	pub speed_short_term_limit: i32,
	pub speed_short_term_ticks: i32,
	pub speed_actions: ActionList,

	// Special flags
	pub yaw_rate_check: bool,
	pub cancel_dead: bool,
	pub knockback_velocity_pvp: bool,

	pub loop_max_latency_ticks: i64,
}

impl FightConfig {
	/// Read and validate every fight setting from `data`
	///
	/// Ranged values are clamped, never rejected. Errors only come from `data`.
	pub fn from_source(data: &dyn SettingsSource, env: &dyn Environment) -> ClResult<Self> {
		// Reach distances depend on each other: survival -> reduce distance -> reduce step
		let (survival_min, survival_max, survival_default) = REACH_SURVIVAL_DISTANCE;
		let reach_survival_distance = data.get_double_in_range(
			FIGHT_REACH_SURVIVALDISTANCE,
			survival_min,
			survival_max,
			survival_default,
		)?;
		let (reduce_min, reduce_default) = REACH_REDUCE_DISTANCE;
		let reach_reduce_distance = data.get_double_in_range(
			FIGHT_REACH_REDUCEDISTANCE,
			reduce_min,
			reach_survival_distance,
			reduce_default,
		)?;
		let (step_min, step_default) = REACH_REDUCE_STEP;
		let reach_reduce_step = data.get_double_in_range(
			FIGHT_REACH_REDUCESTEP,
			step_min,
			reach_reduce_distance,
			step_default,
		)?;

		let fast_heal_check = resolve_version_gated(env, &FAST_HEAL_RETIRED_AT, || {
			data.get_bool(FIGHT_FASTHEAL_CHECK, None)
		})?;

		let knockback = data.get_almost_boolean(FIGHT_PVP_KNOCKBACKVELOCITY, AlmostBoolean::Maybe)?;
		let knockback_velocity_pvp = resolve_tri_state(knockback, env, Bug::PvpKnockBackVelocity);

		Ok(Self {
			debug: data.get_bool(FIGHT_DEBUG, Some(false))?,

			angle_check: data.get_bool(FIGHT_ANGLE_CHECK, None)?,
			angle_threshold: data.get_double(FIGHT_ANGLE_THRESHOLD, None)?,
			angle_actions: data.get_action_list(FIGHT_ANGLE_ACTIONS, permissions::FIGHT_ANGLE)?,

			tool_change_attack_penalty: data.get_long(FIGHT_TOOLCHANGEPENALTY, None)?,

			critical_check: data.get_bool(FIGHT_CRITICAL_CHECK, None)?,
			critical_fall_distance: data.get_double(FIGHT_CRITICAL_FALLDISTANCE, None)?,
			critical_actions: data
				.get_action_list(FIGHT_CRITICAL_ACTIONS, permissions::FIGHT_CRITICAL)?,

			direction_check: data.get_bool(FIGHT_DIRECTION_CHECK, None)?,
			direction_strict: data.get_bool(FIGHT_DIRECTION_STRICT, None)?,
			direction_penalty: data.get_long(FIGHT_DIRECTION_PENALTY, None)?,
			direction_actions: data
				.get_action_list(FIGHT_DIRECTION_ACTIONS, permissions::FIGHT_DIRECTION)?,

			fast_heal_check,
			fast_heal_interval: data.get_long(FIGHT_FASTHEAL_INTERVAL, None)?,
			fast_heal_buffer: data.get_long(FIGHT_FASTHEAL_BUFFER, None)?,
			fast_heal_actions: data
				.get_action_list(FIGHT_FASTHEAL_ACTIONS, permissions::FIGHT_FASTHEAL)?,

			god_mode_check: data.get_bool(FIGHT_GODMODE_CHECK, None)?,
			god_mode_lag_min_age: data.get_long(FIGHT_GODMODE_LAGMINAGE, None)?,
			god_mode_lag_max_age: data.get_long(FIGHT_GODMODE_LAGMAXAGE, None)?,
			god_mode_actions: data
				.get_action_list(FIGHT_GODMODE_ACTIONS, permissions::FIGHT_GODMODE)?,

			no_swing_check: data.get_bool(FIGHT_NOSWING_CHECK, None)?,
			no_swing_actions: data
				.get_action_list(FIGHT_NOSWING_ACTIONS, permissions::FIGHT_NOSWING)?,

			reach_check: data.get_bool(FIGHT_REACH_CHECK, None)?,
			reach_penalty: data.get_long(FIGHT_REACH_PENALTY, None)?,
			reach_precision: data.get_bool(FIGHT_REACH_PRECISION, None)?,
			reach_reduce: data.get_bool(FIGHT_REACH_REDUCE, None)?,
			reach_survival_distance,
			reach_reduce_distance,
			reach_reduce_step,
			reach_actions: data.get_action_list(FIGHT_REACH_ACTIONS, permissions::FIGHT_REACH)?,

			self_hit_check: data.get_bool(FIGHT_SELFHIT_CHECK, None)?,
			self_hit_actions: data
				.get_action_list(FIGHT_SELFHIT_ACTIONS, permissions::FIGHT_SELFHIT)?,

			speed_check: data.get_bool(FIGHT_SPEED_CHECK, None)?,
			speed_limit: data.get_int(FIGHT_SPEED_LIMIT, None)?,
			speed_buckets: data.get_int(FIGHT_SPEED_BUCKETS_N, Some(DEFAULT_SPEED_BUCKETS))?,
			speed_bucket_dur: data
				.get_long(FIGHT_SPEED_BUCKETS_DUR, Some(DEFAULT_SPEED_BUCKET_DUR))?,
			speed_bucket_factor: data
				.get_float(FIGHT_SPEED_BUCKETS_FACTOR, Some(DEFAULT_SPEED_BUCKET_FACTOR))?,
			speed_short_term_limit: data.get_int(FIGHT_SPEED_SHORTTERM_LIMIT, None)?,
			speed_short_term_ticks: data.get_int(FIGHT_SPEED_SHORTTERM_TICKS, None)?,
			speed_actions: data.get_action_list(FIGHT_SPEED_ACTIONS, permissions::FIGHT_SPEED)?,

			yaw_rate_check: data.get_bool(FIGHT_YAWRATE_CHECK, Some(true))?,
			cancel_dead: data.get_bool(FIGHT_CANCELDEAD, None)?,
			knockback_velocity_pvp,

			loop_max_latency_ticks: LOOP_MAX_LATENCY_TICKS,
		})
	}

	/// Whether `check` is enabled in this world
	///
	/// Checks without a flag here (other families, groups, newly added checks)
	/// are enabled.
	pub fn is_enabled(&self, check: CheckType) -> bool {
		match check {
			CheckType::FightAngle => self.angle_check,
			CheckType::FightCritical => self.critical_check,
			CheckType::FightDirection => self.direction_check,
			CheckType::FightGodMode => self.god_mode_check,
			CheckType::FightNoSwing => self.no_swing_check,
			CheckType::FightReach => self.reach_check,
			CheckType::FightSpeed => self.speed_check,
			CheckType::FightSelfHit => self.self_hit_check,
			CheckType::FightFastHeal => self.fast_heal_check,
			_ => true,
		}
	}
}

impl CheckConfig for FightConfig {
	fn is_enabled(&self, check: CheckType) -> bool {
		FightConfig::is_enabled(self, check)
	}

	fn debug(&self) -> bool {
		self.debug
	}
}


// vim: ts=4
