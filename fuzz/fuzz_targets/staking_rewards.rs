#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: u64 },
    Withdraw { who: u8, amount: u64 },
    GetReward { who: u8 },
    Exit { who: u8 },
    Notify { amount: u64 },
    Advance { seconds: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let issuer = Address::generate(&env);
    let staking_token = env
        .register_stellar_asset_contract_v2(issuer.clone())
        .address();
    let reward_token = env.register_stellar_asset_contract_v2(issuer).address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);
    client.initialize(&admin, &staking_token, &reward_token, &admin);

    let staking_minter = token::StellarAssetClient::new(&env, &staking_token);
    let reward_minter = token::StellarAssetClient::new(&env, &reward_token);

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        staking_minter.mint(&user, &(u64::MAX as i128));
        users.push(user);
    }

    // Every call may fail with a typed error; none may panic or break the
    // balance invariant.
    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let _ = client.try_stake(&users[who as usize % users.len()], &(amount as u128));
            }
            FuzzAction::Withdraw { who, amount } => {
                let _ = client.try_withdraw(&users[who as usize % users.len()], &(amount as u128));
            }
            FuzzAction::GetReward { who } => {
                let _ = client.try_get_reward(&users[who as usize % users.len()]);
            }
            FuzzAction::Exit { who } => {
                let _ = client.try_exit(&users[who as usize % users.len()]);
            }
            FuzzAction::Notify { amount } => {
                reward_minter.mint(&contract_id, &(amount as i128));
                let _ = client.try_notify_reward_amount(&admin, &(amount as u128));
            }
            FuzzAction::Advance { seconds } => {
                env.ledger().with_mut(|li| li.timestamp += seconds as u64);
            }
        }

        let sum: u128 = users.iter().map(|u| client.balance_of(u)).sum();
        assert_eq!(sum, client.total_staked());
    }
});
