use crate::errors::ContractError;
use crate::math::{self, ArithmeticError, SCALE};
use crate::rewards;
use crate::storage::PoolState;

/// Rate for a newly funded period starting at `now`.
///
/// Mid-period top-ups carry the undistributed remainder of the running
/// period into the new one.
pub fn next_reward_rate(pool: &PoolState, reward: u128, now: u64) -> Result<u128, ArithmeticError> {
    let duration = pool.rewards_duration as u128;
    if now >= pool.period_finish {
        return math::div(reward, duration);
    }

    let remaining = math::sub(pool.period_finish as u128, now as u128)?;
    let leftover = math::mul(remaining, pool.reward_rate)?;
    math::div(math::add(reward, leftover)?, duration)
}

/// Reject rates the contract cannot pay out over a full period.
pub fn ensure_funded(rate: u128, reward_balance: u128, duration: u64) -> Result<(), ContractError> {
    let ceiling = math::div(reward_balance, duration as u128)?;
    if rate > ceiling {
        return Err(ContractError::InvalidReward);
    }
    Ok(())
}

/// Reject rates whose full-period emission, priced against a single staked
/// unit, would push the accumulator past `u128::MAX`.
///
/// `elapsed` can never exceed `duration` before the next notify, so a period
/// accepted here cannot make `reward_per_token` overflow later.
pub fn ensure_accumulator_headroom(
    stored: u128,
    rate: u128,
    duration: u64,
) -> Result<(), ContractError> {
    math::mul(rate, duration as u128)
        .and_then(|emitted| math::mul(emitted, SCALE))
        .and_then(|scaled| math::add(stored, scaled))
        .map(|_| ())
        .map_err(|_| ContractError::InvalidReward)
}

/// Start a new reward period of `reward` on top of whatever is left.
///
/// `reward_balance` is the reward-asset balance the contract holds right now.
/// `pool` is only written when every check passes.
pub fn notify_reward_amount(
    pool: &mut PoolState,
    reward: u128,
    reward_balance: u128,
    now: u64,
) -> Result<(), ContractError> {
    let mut next = pool.clone();
    rewards::checkpoint(&mut next, None, now)?;

    let rate = next_reward_rate(&next, reward, now)?;
    ensure_funded(rate, reward_balance, next.rewards_duration)?;
    ensure_accumulator_headroom(next.reward_per_token_stored, rate, next.rewards_duration)?;

    next.reward_rate = rate;
    next.last_update_time = now;
    next.period_finish = now
        .checked_add(next.rewards_duration)
        .ok_or(ContractError::Overflow)?;

    *pool = next;
    Ok(())
}

/// Change the period length. Only allowed once the running period is over.
pub fn set_rewards_duration(
    pool: &mut PoolState,
    duration: u64,
    now: u64,
) -> Result<(), ContractError> {
    if now <= pool.period_finish {
        return Err(ContractError::PeriodNotFinished);
    }
    if duration == 0 {
        return Err(ContractError::InvalidParameter);
    }
    pool.rewards_duration = duration;
    Ok(())
}
