use soroban_sdk::{contracttype, Address, Env};

use crate::errors::ContractError;

// Storage TTL constants (in ledgers, ~5 seconds each)
const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17_280; // ~1 day
const PERSISTENT_TTL_EXTEND: u32 = 518_400; // ~30 days

/// Default length of a reward period: 7 days.
pub const DEFAULT_REWARDS_DURATION: u64 = 604_800;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Pool,
    Pause,
    Locked,
    Admin(Address),
    Staker(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub staking_token: Address,
    pub reward_token: Address,
    pub rewards_distribution: Address,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub total_staked: u128,
    pub reward_rate: u128,
    pub reward_per_token_stored: u128, // scaled by math::SCALE
    pub last_update_time: u64,
    pub period_finish: u64,
    pub rewards_duration: u64,
}

impl PoolState {
    pub fn new(rewards_duration: u64) -> Self {
        PoolState {
            rewards_duration,
            ..PoolState::default()
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerInfo {
    pub balance: u128,
    pub reward_per_token_paid: u128,
    pub accrued_reward: u128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PauseState {
    pub paused: bool,
    pub last_pause_time: u64,
}

// --- Instance storage helpers (Config, Pool, Pause, Locked) ---

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_pool(env: &Env) -> Result<PoolState, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn get_pause(env: &Env) -> PauseState {
    env.storage()
        .instance()
        .get(&DataKey::Pause)
        .unwrap_or_default()
}

pub fn set_pause(env: &Env, pause: &PauseState) {
    env.storage().instance().set(&DataKey::Pause, pause);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// --- Persistent storage helpers (Admin, Staker) ---

pub fn is_admin(env: &Env, principal: &Address) -> bool {
    let key = DataKey::Admin(principal.clone());
    let granted: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if granted {
        extend_persistent(env, &key);
    }
    granted
}

pub fn set_admin(env: &Env, principal: &Address) {
    let key = DataKey::Admin(principal.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
}

pub fn remove_admin(env: &Env, principal: &Address) {
    let key = DataKey::Admin(principal.clone());
    env.storage().persistent().remove(&key);
}

/// Unknown stakers read as an all-zero record; it is only written on first mutation.
pub fn get_staker(env: &Env, user: &Address) -> StakerInfo {
    let key = DataKey::Staker(user.clone());
    match env.storage().persistent().get::<DataKey, StakerInfo>(&key) {
        Some(info) => {
            extend_persistent(env, &key);
            info
        }
        None => StakerInfo::default(),
    }
}

pub fn set_staker(env: &Env, user: &Address, info: &StakerInfo) {
    let key = DataKey::Staker(user.clone());
    env.storage().persistent().set(&key, info);
    extend_persistent(env, &key);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
