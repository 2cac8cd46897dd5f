use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::access;
use crate::errors::ContractError;
use crate::events;
use crate::period;
use crate::storage;

/// Length of a reward period in seconds.
pub const DURATION: Symbol = symbol_short!("duration");

/// Admin-only named setter. Each name carries its own validation.
pub fn set_parameter(
    env: &Env,
    caller: &Address,
    name: Symbol,
    value: u64,
) -> Result<(), ContractError> {
    access::require_admin(env, caller)?;

    if name == DURATION {
        apply_rewards_duration(env, value)?;
    } else {
        return Err(ContractError::InvalidParameter);
    }

    events::publish_parameter_set(env, name, value);
    Ok(())
}

/// Shared by `set_parameter(duration)` and the dedicated setter.
pub fn apply_rewards_duration(env: &Env, duration: u64) -> Result<(), ContractError> {
    let mut pool = storage::get_pool(env)?;
    period::set_rewards_duration(&mut pool, duration, env.ledger().timestamp())?;
    storage::set_pool(env, &pool);

    events::publish_duration_updated(env, duration);
    Ok(())
}
