#![no_std]

mod access;
mod errors;
mod events;
mod guard;
mod ledger;
mod math;
mod params;
mod period;
mod rewards;
mod storage;


pub use errors::ContractError;
pub use storage::{Config, PauseState, PoolState, StakerInfo, DEFAULT_REWARDS_DURATION};

use soroban_sdk::{contract, contractimpl, token, Address, Env, Symbol};

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ========== Admin Functions ==========

    /// One-time initialization. `admin` becomes the first administrator.
    pub fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        reward_token: Address,
        rewards_distribution: Address,
    ) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if staking_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }

        storage::set_config(
            &env,
            &Config {
                staking_token: staking_token.clone(),
                reward_token: reward_token.clone(),
                rewards_distribution: rewards_distribution.clone(),
            },
        );
        storage::set_pool(&env, &PoolState::new(DEFAULT_REWARDS_DURATION));
        storage::set_pause(&env, &PauseState::default());
        storage::set_admin(&env, &admin);
        storage::extend_instance_ttl(&env);

        events::publish_initialized(
            &env,
            admin,
            staking_token,
            reward_token,
            rewards_distribution,
            DEFAULT_REWARDS_DURATION,
        );

        Ok(())
    }

    /// Start or top up a reward period with `reward` units of the reward asset.
    /// The reward must already be held by the contract.
    pub fn notify_reward_amount(
        env: Env,
        caller: Address,
        reward: u128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        access::require_distributor_or_admin(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        let config = storage::get_config(&env)?;
        let reward_balance = Self::held_balance(&env, &config.reward_token)?;

        let mut pool = storage::get_pool(&env)?;
        period::notify_reward_amount(&mut pool, reward, reward_balance, env.ledger().timestamp())?;
        storage::set_pool(&env, &pool);

        events::publish_reward_added(&env, reward, pool.reward_rate, pool.period_finish);
        Ok(())
    }

    /// Change the period length. Fails while a period is still running.
    pub fn set_rewards_duration(
        env: Env,
        caller: Address,
        duration: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        storage::extend_instance_ttl(&env);
        params::apply_rewards_duration(&env, duration)
    }

    /// Named parameter setter. See `params` for the accepted names.
    pub fn set_parameter(
        env: Env,
        caller: Address,
        name: Symbol,
        value: u64,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);
        params::set_parameter(&env, &caller, name, value)
    }

    /// Replace the address allowed to fund reward periods.
    pub fn set_rewards_distribution(
        env: Env,
        caller: Address,
        rewards_distribution: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        let mut config = storage::get_config(&env)?;
        config.rewards_distribution = rewards_distribution.clone();
        storage::set_config(&env, &config);

        events::publish_distribution_set(&env, rewards_distribution);
        Ok(())
    }

    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);
        guard::set_paused(&env, &caller, paused)
    }

    pub fn grant_admin(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);
        access::grant_admin(&env, &caller, &target)
    }

    pub fn revoke_admin(env: Env, caller: Address, target: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        storage::extend_instance_ttl(&env);
        access::revoke_admin(&env, &caller, &target)
    }

    /// Sweep a stray token balance to the calling administrator.
    /// The staking asset is never recoverable.
    pub fn recover_asset(
        env: Env,
        caller: Address,
        token: Address,
        amount: u128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        access::require_admin(&env, &caller)?;
        storage::extend_instance_ttl(&env);

        let config = storage::get_config(&env)?;
        if token == config.staking_token {
            return Err(ContractError::AssetNotAllowed);
        }
        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        Self::transfer(&env, &token, &env.current_contract_address(), &caller, amount)?;

        events::publish_recovered(&env, token, amount, caller);
        Ok(())
    }

    // ========== User Functions ==========

    /// Deposit `amount` of the staking asset and start earning.
    pub fn stake(env: Env, staker: Address, amount: u128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        storage::extend_instance_ttl(&env);

        guard::enter(&env)?;
        Self::stake_locked(&env, &staker, amount)?;
        guard::exit(&env);
        Ok(())
    }

    /// Return `amount` of the staking asset. Accrued rewards stay claimable.
    pub fn withdraw(env: Env, staker: Address, amount: u128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        storage::extend_instance_ttl(&env);

        guard::enter(&env)?;
        Self::withdraw_locked(&env, &staker, amount)?;
        guard::exit(&env);
        Ok(())
    }

    /// Pay out everything accrued so far. Returns the amount paid (0 if none).
    pub fn get_reward(env: Env, staker: Address) -> Result<u128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        storage::extend_instance_ttl(&env);

        guard::enter(&env)?;
        let paid = Self::claim_locked(&env, &staker)?;
        guard::exit(&env);
        Ok(paid)
    }

    /// Withdraw the full balance, then claim. Returns the reward paid.
    pub fn exit(env: Env, staker: Address) -> Result<u128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        storage::extend_instance_ttl(&env);

        guard::enter(&env)?;
        let balance = ledger::stake_of(&storage::get_staker(&env, &staker));
        Self::withdraw_locked(&env, &staker, balance)?;
        let paid = Self::claim_locked(&env, &staker)?;
        guard::exit(&env);
        Ok(paid)
    }

    // ========== View Functions ==========

    pub fn last_time_reward_applicable(env: Env) -> Result<u64, ContractError> {
        let pool = storage::get_pool(&env)?;
        Ok(rewards::last_time_reward_applicable(
            &pool,
            env.ledger().timestamp(),
        ))
    }

    /// Accumulator value projected to the current ledger time.
    pub fn reward_per_token(env: Env) -> Result<u128, ContractError> {
        let pool = storage::get_pool(&env)?;
        Ok(rewards::reward_per_token(&pool, env.ledger().timestamp())?)
    }

    /// Claimable reward for `staker` at the current ledger time.
    pub fn earned(env: Env, staker: Address) -> Result<u128, ContractError> {
        let pool = storage::get_pool(&env)?;
        let info = storage::get_staker(&env, &staker);
        Ok(rewards::earned(&pool, &info, env.ledger().timestamp())?)
    }

    pub fn get_reward_for_duration(env: Env) -> Result<u128, ContractError> {
        let pool = storage::get_pool(&env)?;
        Ok(rewards::reward_for_duration(&pool)?)
    }

    pub fn total_staked(env: Env) -> Result<u128, ContractError> {
        let pool = storage::get_pool(&env)?;
        Ok(ledger::total_staked(&pool))
    }

    pub fn balance_of(env: Env, staker: Address) -> u128 {
        ledger::stake_of(&storage::get_staker(&env, &staker))
    }

    pub fn get_pool_state(env: Env) -> Result<PoolState, ContractError> {
        storage::get_pool(&env)
    }

    pub fn get_staker_info(env: Env, staker: Address) -> StakerInfo {
        storage::get_staker(&env, &staker)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env)
    }

    pub fn get_pause_state(env: Env) -> PauseState {
        storage::get_pause(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::get_pause(&env).paused
    }

    pub fn is_admin(env: Env, principal: Address) -> bool {
        access::is_admin(&env, &principal)
    }

    /// Contract's reward-asset balance, including rewards owed but not yet claimed.
    pub fn reward_balance(env: Env) -> Result<u128, ContractError> {
        let config = storage::get_config(&env)?;
        Self::held_balance(&env, &config.reward_token)
    }

    // ========== Internal Helpers ==========

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::has_config(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn stake_locked(env: &Env, staker: &Address, amount: u128) -> Result<(), ContractError> {
        guard::require_not_paused(env)?;
        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = storage::get_config(env)?;
        let mut pool = storage::get_pool(env)?;
        let mut info = storage::get_staker(env, staker);

        rewards::checkpoint(&mut pool, Some(&mut info), env.ledger().timestamp())?;
        ledger::credit(&mut pool, &mut info, amount)?;
        storage::set_pool(env, &pool);
        storage::set_staker(env, staker, &info);

        Self::transfer(
            env,
            &config.staking_token,
            staker,
            &env.current_contract_address(),
            amount,
        )?;

        events::publish_staked(env, staker.clone(), amount, pool.total_staked);
        Ok(())
    }

    fn withdraw_locked(env: &Env, staker: &Address, amount: u128) -> Result<(), ContractError> {
        if amount == 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = storage::get_config(env)?;
        let mut pool = storage::get_pool(env)?;
        let mut info = storage::get_staker(env, staker);

        rewards::checkpoint(&mut pool, Some(&mut info), env.ledger().timestamp())?;
        ledger::debit(&mut pool, &mut info, amount)?;
        storage::set_pool(env, &pool);
        storage::set_staker(env, staker, &info);

        Self::transfer(
            env,
            &config.staking_token,
            &env.current_contract_address(),
            staker,
            amount,
        )?;

        events::publish_withdrawn(env, staker.clone(), amount, pool.total_staked);
        Ok(())
    }

    fn claim_locked(env: &Env, staker: &Address) -> Result<u128, ContractError> {
        let config = storage::get_config(env)?;
        let mut pool = storage::get_pool(env)?;
        let mut info = storage::get_staker(env, staker);

        rewards::checkpoint(&mut pool, Some(&mut info), env.ledger().timestamp())?;
        let reward = info.accrued_reward;
        info.accrued_reward = 0;
        storage::set_pool(env, &pool);
        storage::set_staker(env, staker, &info);

        if reward == 0 {
            return Ok(0);
        }

        Self::transfer(
            env,
            &config.reward_token,
            &env.current_contract_address(),
            staker,
            reward,
        )?;

        events::publish_reward_paid(env, staker.clone(), reward);
        Ok(reward)
    }

    /// Token transfer through the collaborator. Any failure aborts the call.
    fn transfer(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), ContractError> {
        let amount = math::to_token_amount(amount)?;
        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }

    fn held_balance(env: &Env, token: &Address) -> Result<u128, ContractError> {
        let balance = token::Client::new(env, token).balance(&env.current_contract_address());
        Ok(math::from_token_amount(balance)?)
    }
}
