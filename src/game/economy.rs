//! Economy formulas. Pure functions of player state and the catalogs, recomputed on demand.

use super::catalog::{
    self, LEVEL_NAMES, LEVEL_THRESHOLDS, REBIRTH_BOOST_PER, REBIRTH_COST_BASE, REBIRTH_COST_MULT,
    REBIRTH_COST_MULT_PER, TRIVIA_REWARD_AP_BASE, TRIVIA_REWARD_PTS_BASE, TRIVIA_REWARD_SCALE,
};
use super::state::PlayerState;

/// Product of every owned AP upgrade's multiplier. Unknown ids count as 1.
pub fn ap_bonus_mult(state: &PlayerState) -> f64 {
    state
        .bought_ap_upgrades
        .iter()
        .filter_map(|id| catalog::find_ap_upgrade(id))
        .map(|u| u.mult)
        .product()
}

/// Product of every owned prestige upgrade's multiplier. Unknown ids count as 1.
pub fn prestige_mult(state: &PlayerState) -> f64 {
    state
        .bought_prestige_upgrades
        .iter()
        .filter_map(|id| catalog::find_prestige_upgrade(id))
        .map(|u| u.mult)
        .product()
}

pub fn rebirth_boost(rebirths: u32) -> f64 {
    1.0 + rebirths as f64 * REBIRTH_BOOST_PER
}

/// Multiplier applied to every point-denominated price.
pub fn cost_mult(rebirths: u32) -> f64 {
    1.0 + rebirths as f64 * REBIRTH_COST_MULT_PER
}

/// `tier × ball × AP × rebirth × prestige`, multiplied left to right.
fn apply_multipliers(tier: f64, state: &PlayerState) -> f64 {
    tier * catalog::ball_or_default(&state.current_ball).multiplier
        * ap_bonus_mult(state)
        * rebirth_boost(state.rebirths)
        * prestige_mult(state)
}

/// Points earned per tap.
pub fn click_value(state: &PlayerState) -> f64 {
    apply_multipliers(state.click_mult, state).floor()
}

/// Points earned per one-second auto tick. Not floored.
pub fn auto_gain_per_tick(state: &PlayerState) -> f64 {
    apply_multipliers(state.auto_per_sec, state)
}

/// Effective price of a point-denominated item.
pub fn scaled_cost(base_cost: f64, rebirths: u32) -> f64 {
    (base_cost * cost_mult(rebirths)).floor()
}

/// Score required for the next rebirth.
pub fn rebirth_cost(rebirths: u32) -> f64 {
    (REBIRTH_COST_BASE * REBIRTH_COST_MULT.powi(rebirths as i32)).floor()
}

pub fn trivia_reward_points(reward_index: usize) -> f64 {
    (TRIVIA_REWARD_PTS_BASE * (1.0 + reward_index as f64 * TRIVIA_REWARD_SCALE)).floor()
}

pub fn trivia_reward_ap(reward_index: usize) -> u64 {
    (TRIVIA_REWARD_AP_BASE * (1.0 + reward_index as f64 * TRIVIA_REWARD_SCALE)).floor() as u64
}

/// Largest level whose threshold `total_score` has reached.
pub fn level_index(total_score: f64) -> usize {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|t| total_score >= *t)
        .unwrap_or(0)
}

pub fn level_name(total_score: f64) -> &'static str {
    LEVEL_NAMES[level_index(total_score).min(LEVEL_NAMES.len() - 1)]
}
