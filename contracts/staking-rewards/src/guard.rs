use soroban_sdk::{Address, Env};

use crate::access;
use crate::errors::ContractError;
use crate::events;
use crate::storage::{self, PauseState};

// ── Single-flight lock ───────────────────────────────────────────────────────

/// Take the lock for the rest of the invocation. A nested call fails fast.
///
/// A failed invocation rolls back its storage writes, so the lock only needs
/// an explicit `exit` on the success path.
pub fn enter(env: &Env) -> Result<(), ContractError> {
    if storage::is_locked(env) {
        return Err(ContractError::Reentrant);
    }
    storage::set_locked(env, true);
    Ok(())
}

pub fn exit(env: &Env) {
    storage::set_locked(env, false);
}

// ── Pause gate ───────────────────────────────────────────────────────────────

pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if storage::get_pause(env).paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Open or close the gate. Re-applying the current state is a no-op.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), ContractError> {
    access::require_admin(env, caller)?;

    let current = storage::get_pause(env);
    if current.paused == paused {
        return Ok(());
    }

    let last_pause_time = if paused {
        env.ledger().timestamp()
    } else {
        current.last_pause_time
    };
    storage::set_pause(
        env,
        &PauseState {
            paused,
            last_pause_time,
        },
    );

    events::publish_pause_changed(env, caller.clone(), paused);
    Ok(())
}
