use crate::errors::ContractError;
use crate::math;
use crate::storage::{PoolState, StakerInfo};

pub fn stake_of(staker: &StakerInfo) -> u128 {
    staker.balance
}

pub fn total_staked(pool: &PoolState) -> u128 {
    pool.total_staked
}

/// Add `amount` to a staker's balance and the pool total.
/// Must run after the accrual checkpoint for the same staker.
pub fn credit(
    pool: &mut PoolState,
    staker: &mut StakerInfo,
    amount: u128,
) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidAmount);
    }
    let balance = math::add(staker.balance, amount)?;
    let total = math::add(pool.total_staked, amount)?;

    staker.balance = balance;
    pool.total_staked = total;
    Ok(())
}

/// Remove `amount` from a staker's balance and the pool total.
/// Must run after the accrual checkpoint for the same staker.
pub fn debit(
    pool: &mut PoolState,
    staker: &mut StakerInfo,
    amount: u128,
) -> Result<(), ContractError> {
    if amount == 0 {
        return Err(ContractError::InvalidAmount);
    }
    let balance = math::sub(staker.balance, amount)?;
    let total = math::sub(pool.total_staked, amount)?;

    staker.balance = balance;
    pool.total_staked = total;
    Ok(())
}
