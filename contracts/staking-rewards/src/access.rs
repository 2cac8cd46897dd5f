use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::events;
use crate::storage;

pub fn is_admin(env: &Env, principal: &Address) -> bool {
    storage::is_admin(env, principal)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !storage::is_admin(env, caller) {
        return Err(ContractError::NotAuthorized);
    }
    Ok(())
}

/// The rewards distribution address, or any administrator.
pub fn require_distributor_or_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let config = storage::get_config(env)?;
    if *caller == config.rewards_distribution || storage::is_admin(env, caller) {
        return Ok(());
    }
    Err(ContractError::NotAuthorized)
}

pub fn grant_admin(env: &Env, caller: &Address, target: &Address) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    if storage::is_admin(env, target) {
        return Ok(());
    }
    storage::set_admin(env, target);
    events::publish_admin_granted(env, caller.clone(), target.clone());
    Ok(())
}

/// Revoking the last administrator is permitted and locks every admin-gated
/// entry point for good.
pub fn revoke_admin(env: &Env, caller: &Address, target: &Address) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    if !storage::is_admin(env, target) {
        return Ok(());
    }
    storage::remove_admin(env, target);
    events::publish_admin_revoked(env, caller.clone(), target.clone());
    Ok(())
}
