use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub staking_token: Address,
    pub reward_token: Address,
    pub rewards_distribution: Address,
    pub rewards_duration: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: u128,
    pub new_total_staked: u128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub amount: u128,
    pub new_total_staked: u128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub reward: u128,
    pub timestamp: u64,
}

/// Fired when a reward period is (re)started.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAddedEvent {
    pub reward: u128,
    pub reward_rate: u128,
    pub period_finish: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationUpdatedEvent {
    pub rewards_duration: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionSetEvent {
    pub rewards_distribution: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub paused: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEvent {
    pub caller: Address,
    pub target: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveredEvent {
    pub token: Address,
    pub amount: u128,
    pub recipient: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParameterSetEvent {
    pub name: Symbol,
    pub value: u64,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    staking_token: Address,
    reward_token: Address,
    rewards_distribution: Address,
    rewards_duration: u64,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            staking_token,
            reward_token,
            rewards_distribution,
            rewards_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: u128, new_total_staked: u128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, staker: Address, amount: u128, new_total_staked: u128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone()),
        WithdrawnEvent {
            staker,
            amount,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, reward: u128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), staker.clone()),
        RewardPaidEvent {
            staker,
            reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_added(env: &Env, reward: u128, reward_rate: u128, period_finish: u64) {
    env.events().publish(
        (symbol_short!("RWD_ADDED"),),
        RewardAddedEvent {
            reward,
            reward_rate,
            period_finish,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_duration_updated(env: &Env, rewards_duration: u64) {
    env.events().publish(
        (symbol_short!("DUR_SET"),),
        DurationUpdatedEvent {
            rewards_duration,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_distribution_set(env: &Env, rewards_distribution: Address) {
    env.events().publish(
        (symbol_short!("DIST_SET"),),
        DistributionSetEvent {
            rewards_distribution,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pause_changed(env: &Env, caller: Address, paused: bool) {
    env.events().publish(
        (symbol_short!("PAUSED"), caller.clone()),
        PauseChangedEvent {
            caller,
            paused,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_granted(env: &Env, caller: Address, target: Address) {
    env.events().publish(
        (symbol_short!("ADM_GRANT"), target.clone()),
        AdminChangedEvent {
            caller,
            target,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_revoked(env: &Env, caller: Address, target: Address) {
    env.events().publish(
        (symbol_short!("ADM_REVK"), target.clone()),
        AdminChangedEvent {
            caller,
            target,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_recovered(env: &Env, token: Address, amount: u128, recipient: Address) {
    env.events().publish(
        (symbol_short!("RECOVERED"), token.clone()),
        RecoveredEvent {
            token,
            amount,
            recipient,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_parameter_set(env: &Env, name: Symbol, value: u64) {
    env.events().publish(
        (symbol_short!("PARAM_SET"), name.clone()),
        ParameterSetEvent {
            name,
            value,
            timestamp: env.ledger().timestamp(),
        },
    );
}
