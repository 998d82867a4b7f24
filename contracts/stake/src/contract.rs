use accesspass::{
    pass_collection::PassCollectionClient,
    ttl::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
    validate_non_negative,
};
use num_integer::Integer;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env, Vec,
};

use crate::{
    errors::ErrorCode,
    events::StakeEvents,
    msg::ConfigResponse,
    stake::StakeTrait,
    storage::{
        get_config, get_shares, get_staked_tokens, get_staker_addresses, get_token_depositor,
        get_total_shares, get_treasury_balance, is_initialized, remove_token_depositor,
        save_config, save_shares, save_staked_tokens, save_staker_addresses, save_token_depositor,
        save_total_shares, save_treasury_balance, set_initialized, Config,
    },
};

contractmeta!(
    key = "Description",
    val = "Custodial access pass staking pool backed by a shared rent treasury"
);

#[contract]
pub struct Stake;

#[contractimpl]
impl StakeTrait for Stake {
    fn initialize(env: Env, admin: Address, payment_token: Address) {
        if is_initialized(&env) {
            log!(
                &env,
                "Stake: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                payment_token,
                pass_collection: None,
                rent_contract: None,
            },
        );

        StakeEvents::initialize(&env, admin);
    }

    fn set_pass_collection_address(env: Env, address: Address) {
        let mut config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        config.pass_collection = Some(address);
        save_config(&env, config);
    }

    fn set_rent_contract_address(env: Env, address: Address) {
        let mut config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        config.rent_contract = Some(address);
        save_config(&env, config);
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn stake_purchase_treasury_stock(env: Env, sender: Address, token_id: u64, payment: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        validate_non_negative!(payment);

        let config = get_config(&env);
        let pass_collection = match config.pass_collection {
            Some(address) => address,
            None => {
                log!(
                    &env,
                    "Stake: Stake and purchase: pass collection address has not been set"
                );
                panic_with_error!(&env, ErrorCode::PassCollectionNotSet);
            }
        };

        let pool = env.current_contract_address();
        let pass_client = PassCollectionClient::new(&env, &pass_collection);

        if pass_client.owner_of(&token_id) != sender {
            log!(
                &env,
                "Stake: Stake and purchase: sender does not own this access pass"
            );
            panic_with_error!(&env, ErrorCode::NotTokenOwner);
        }
        if !pass_client.is_approved_for_all(&sender, &pool) {
            log!(
                &env,
                "Stake: Stake and purchase: pool is not approved to move the sender's passes"
            );
            panic_with_error!(&env, ErrorCode::NotApproved);
        }

        // price of one share before this deposit mints a new one
        let price = current_share_price(&env);
        if payment < price {
            log!(
                &env,
                "Stake: Stake and purchase: payment does not cover the current share price"
            );
            panic_with_error!(&env, ErrorCode::InsufficientPayment);
        }

        if get_token_depositor(&env, token_id).is_some() {
            log!(
                &env,
                "Stake: Stake and purchase: access pass is already staked"
            );
            panic_with_error!(&env, ErrorCode::TokenAlreadyStaked);
        }

        pass_client.transfer_from(&pool, &sender, &pool, &token_id);
        if payment > 0 {
            token::Client::new(&env, &config.payment_token).transfer(&sender, &pool, &payment);
        }

        save_treasury_balance(&env, get_treasury_balance(&env) + payment);
        record_stake(&env, &sender, token_id);

        StakeEvents::stake(&env, sender, token_id, payment);
    }

    fn unstake_access_pass(env: Env, sender: Address, token_id: u64) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let pass_collection = match config.pass_collection {
            Some(address) => address,
            None => {
                log!(
                    &env,
                    "Stake: Unstake: pass collection address has not been set"
                );
                panic_with_error!(&env, ErrorCode::PassCollectionNotSet);
            }
        };

        // the pool is the on-record owner while staked; the depositor is the
        // only wallet allowed to pull the pass back out
        match get_token_depositor(&env, token_id) {
            Some(depositor) if depositor == sender => (),
            _ => {
                log!(
                    &env,
                    "Stake: Unstake: access pass was not staked by the sender"
                );
                panic_with_error!(&env, ErrorCode::NotOwnerOrNotStaked);
            }
        }

        // payout at the share price before this share is retired
        let payout = current_share_price(&env);

        record_unstake(&env, &sender, token_id);
        withdraw_from_treasury(&env, payout);

        let pool = env.current_contract_address();
        if payout > 0 {
            token::Client::new(&env, &config.payment_token).transfer(&pool, &sender, &payout);
        }
        PassCollectionClient::new(&env, &pass_collection).transfer_from(
            &pool, &pool, &sender, &token_id,
        );

        StakeEvents::unstake(&env, sender, token_id, payout);
    }

    // ################################################################
    //                         Rent contract
    // ################################################################

    fn deposit_rent_proceeds(env: Env, sender: Address, amount: i128) {
        sender.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        let rent_contract = match config.rent_contract {
            Some(address) => address,
            None => {
                log!(
                    &env,
                    "Stake: Deposit rent proceeds: rent contract address has not been set"
                );
                panic_with_error!(&env, ErrorCode::RentContractNotSet);
            }
        };
        if sender != rent_contract {
            log!(
                &env,
                "Stake: Deposit rent proceeds: only the linked rent contract may deposit"
            );
            panic_with_error!(&env, ErrorCode::Unauthorized);
        }
        if amount <= 0 {
            log!(&env, "Stake: Deposit rent proceeds: amount must be positive");
            panic_with_error!(&env, ErrorCode::InvalidAmount);
        }

        save_treasury_balance(&env, get_treasury_balance(&env) + amount);

        StakeEvents::deposit(&env, sender, amount);
    }

    // ################################################################
    //                             Admin
    // ################################################################

    fn payout_stakers(env: Env) {
        let config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        // fixed snapshot: transfers must not shift the share price mid sweep
        let balance = get_treasury_balance(&env);
        let total_shares = get_total_shares(&env) as i128;

        save_treasury_balance(&env, 0);

        let token_client = token::Client::new(&env, &config.payment_token);
        let pool = env.current_contract_address();

        let mut distributed: i128 = 0;
        if total_shares > 0 {
            for staker in get_staker_addresses(&env).iter() {
                let shares = get_shares(&env, &staker) as i128;
                let amount = Integer::div_floor(&(balance * shares), &total_shares);
                if amount > 0 {
                    token_client.transfer(&pool, &staker, &amount);
                    distributed += amount;
                }
            }
        }

        // rounding dust goes to the operator so the treasury zeroes exactly
        let remainder = balance - distributed;
        if remainder > 0 {
            token_client.transfer(&pool, &config.admin, &remainder);
        }

        StakeEvents::payout(&env, config.admin, distributed, remainder);
    }

    // ################################################################
    //                            Queries
    // ################################################################

    fn query_config(env: Env) -> ConfigResponse {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ConfigResponse {
            config: get_config(&env),
        }
    }

    fn query_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env).admin
    }

    fn query_share_price(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        current_share_price(&env)
    }

    fn query_shares(env: Env, wallet: Address) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_shares(&env, &wallet)
    }

    fn query_total_outstanding_shares(env: Env) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_total_shares(&env)
    }

    fn query_staked_tokens(env: Env, wallet: Address) -> Vec<u64> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_staked_tokens(&env, &wallet)
    }

    fn query_treasury_balance(env: Env) -> i128 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_treasury_balance(&env)
    }

    fn query_all_staker_addresses(env: Env) -> Vec<Address> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_staker_addresses(&env)
    }
}

/// Price of one share: treasury value over outstanding shares, floored.
/// Entry is free while no shares are outstanding.
fn current_share_price(env: &Env) -> i128 {
    let total_shares = get_total_shares(env);
    if total_shares == 0 {
        return 0;
    }
    Integer::div_floor(&get_treasury_balance(env), &(total_shares as i128))
}

fn record_stake(env: &Env, wallet: &Address, token_id: u64) {
    let mut staked = get_staked_tokens(env, wallet);
    staked.push_back(token_id);
    save_staked_tokens(env, wallet, &staked);
    save_token_depositor(env, token_id, wallet);

    let shares = get_shares(env, wallet);
    if shares == 0 {
        let mut stakers = get_staker_addresses(env);
        if !stakers.contains(wallet.clone()) {
            stakers.push_back(wallet.clone());
            save_staker_addresses(env, &stakers);
        }
    }
    save_shares(env, wallet, shares + 1);
    save_total_shares(env, get_total_shares(env) + 1);
}

fn record_unstake(env: &Env, wallet: &Address, token_id: u64) {
    let mut staked = get_staked_tokens(env, wallet);
    match staked.iter().position(|id| id == token_id) {
        Some(index) => {
            staked.remove(index as u32);
        }
        None => {
            log!(
                env,
                "Stake: Unstake: access pass not found in the sender's staked set"
            );
            panic_with_error!(env, ErrorCode::NotOwnerOrNotStaked);
        }
    }
    save_staked_tokens(env, wallet, &staked);
    remove_token_depositor(env, token_id);
    save_shares(env, wallet, get_shares(env, wallet) - 1);
    save_total_shares(env, get_total_shares(env) - 1);
}

fn withdraw_from_treasury(env: &Env, amount: i128) {
    let balance = get_treasury_balance(env);
    if amount > balance {
        log!(
            env,
            "Stake: Withdraw: payout exceeds the treasury, accounting invariant violated"
        );
        panic_with_error!(env, ErrorCode::InsufficientTreasury);
    }
    save_treasury_balance(env, balance - amount);
}
