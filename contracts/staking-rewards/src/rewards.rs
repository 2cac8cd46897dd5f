use crate::math::{self, ArithmeticError, SCALE};
use crate::storage::{PoolState, StakerInfo};

/// Rewards stop accruing at `period_finish`.
pub fn last_time_reward_applicable(pool: &PoolState, now: u64) -> u64 {
    math::min_u64(now, pool.period_finish)
}

/// Current value of the accumulator, projected to `now` without writing it.
///
/// ```text
/// rpt = stored + (min(now, finish) - last_update) * rate * SCALE / total_staked
/// ```
///
/// An empty pool returns the stored value: nothing accrues while no one is staked.
pub fn reward_per_token(pool: &PoolState, now: u64) -> Result<u128, ArithmeticError> {
    if pool.total_staked == 0 {
        return Ok(pool.reward_per_token_stored);
    }

    let elapsed = math::sub(
        last_time_reward_applicable(pool, now) as u128,
        pool.last_update_time as u128,
    )?;
    let emitted = math::mul(math::mul(elapsed, pool.reward_rate)?, SCALE)?;
    let delta = math::div(emitted, pool.total_staked)?;

    math::add(pool.reward_per_token_stored, delta)
}

/// Rewards owed to `staker` as of `now`, settled and unsettled.
///
/// ```text
/// earned = balance * (rpt - paid) / SCALE + accrued
/// ```
pub fn earned(pool: &PoolState, staker: &StakerInfo, now: u64) -> Result<u128, ArithmeticError> {
    let rpt = reward_per_token(pool, now)?;
    earned_at(staker, rpt)
}

fn earned_at(staker: &StakerInfo, rpt: u128) -> Result<u128, ArithmeticError> {
    let delta = math::sub(rpt, staker.reward_per_token_paid)?;
    let fresh = math::mul_scaled(staker.balance, delta)?;
    math::add(fresh, staker.accrued_reward)
}

/// Freeze the accumulator and the clock at `now`, then settle `staker` if given.
///
/// Runs before any balance or rate change so that the elapsed interval is
/// priced at the totals in effect during it.
pub fn checkpoint(
    pool: &mut PoolState,
    staker: Option<&mut StakerInfo>,
    now: u64,
) -> Result<(), ArithmeticError> {
    let rpt = reward_per_token(pool, now)?;
    let settled = match staker.as_deref() {
        Some(info) => Some(earned_at(info, rpt)?),
        None => None,
    };

    pool.reward_per_token_stored = rpt;
    pool.last_update_time = last_time_reward_applicable(pool, now);

    if let (Some(info), Some(accrued)) = (staker, settled) {
        info.accrued_reward = accrued;
        info.reward_per_token_paid = rpt;
    }
    Ok(())
}

/// Total reward emitted over one full period at the current rate.
pub fn reward_for_duration(pool: &PoolState) -> Result<u128, ArithmeticError> {
    math::mul(pool.reward_rate, pool.rewards_duration as u128)
}
