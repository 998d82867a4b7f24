use accesspass::ttl::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Shares(Address),
    StakedTokens(Address),
    TokenDepositor(u64),
    StakerAddresses,
    TotalShares,
    TreasuryBalance,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub payment_token: Address,
    /// Collection holding the access passes. Must be linked before staking.
    pub pass_collection: Option<Address>,
    /// The only address allowed to push rent proceeds into the treasury.
    pub rent_contract: Option<Address>,
}

pub fn save_config(env: &Env, config: Config) {
    env.storage().persistent().set(&DataKey::Config, &config);
    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_config(env: &Env) -> Config {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .expect("Stake: Config not set");

    env.storage().persistent().extend_ttl(
        &DataKey::Config,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );

    config
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    env.storage().persistent().extend_ttl(
        &DataKey::Initialized,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                          SHARE LEDGER
// ################################################################

pub fn get_shares(env: &Env, wallet: &Address) -> u32 {
    let key = DataKey::Shares(wallet.clone());
    let shares = env.storage().persistent().get(&key).unwrap_or(0u32);
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    shares
}

pub fn save_shares(env: &Env, wallet: &Address, shares: u32) {
    let key = DataKey::Shares(wallet.clone());
    env.storage().persistent().set(&key, &shares);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_staked_tokens(env: &Env, wallet: &Address) -> Vec<u64> {
    let key = DataKey::StakedTokens(wallet.clone());
    let tokens = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(env));
    if env.storage().persistent().has(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    tokens
}

pub fn save_staked_tokens(env: &Env, wallet: &Address, tokens: &Vec<u64>) {
    let key = DataKey::StakedTokens(wallet.clone());
    env.storage().persistent().set(&key, tokens);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_token_depositor(env: &Env, token_id: u64) -> Option<Address> {
    let key = DataKey::TokenDepositor(token_id);
    let depositor = env.storage().persistent().get(&key);
    if depositor.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    depositor
}

pub fn save_token_depositor(env: &Env, token_id: u64, wallet: &Address) {
    let key = DataKey::TokenDepositor(token_id);
    env.storage().persistent().set(&key, wallet);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_token_depositor(env: &Env, token_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::TokenDepositor(token_id));
}

/// Every wallet that ever held a nonzero share count, in first-stake order.
/// The list is append-once and is not pruned when a wallet unstakes to zero.
pub fn get_staker_addresses(env: &Env) -> Vec<Address> {
    let addresses = env
        .storage()
        .persistent()
        .get(&DataKey::StakerAddresses)
        .unwrap_or_else(|| Vec::new(env));
    if env.storage().persistent().has(&DataKey::StakerAddresses) {
        env.storage().persistent().extend_ttl(
            &DataKey::StakerAddresses,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    addresses
}

pub fn save_staker_addresses(env: &Env, addresses: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::StakerAddresses, addresses);
    env.storage().persistent().extend_ttl(
        &DataKey::StakerAddresses,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_total_shares(env: &Env) -> u32 {
    let total = env
        .storage()
        .persistent()
        .get(&DataKey::TotalShares)
        .unwrap_or(0u32);
    if env.storage().persistent().has(&DataKey::TotalShares) {
        env.storage().persistent().extend_ttl(
            &DataKey::TotalShares,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    total
}

pub fn save_total_shares(env: &Env, total: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::TotalShares, &total);
    env.storage().persistent().extend_ttl(
        &DataKey::TotalShares,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

// ################################################################
//                            TREASURY
// ################################################################

pub fn get_treasury_balance(env: &Env) -> i128 {
    let balance = env
        .storage()
        .persistent()
        .get(&DataKey::TreasuryBalance)
        .unwrap_or(0i128);
    if env.storage().persistent().has(&DataKey::TreasuryBalance) {
        env.storage().persistent().extend_ttl(
            &DataKey::TreasuryBalance,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    balance
}

pub fn save_treasury_balance(env: &Env, balance: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::TreasuryBalance, &balance);
    env.storage().persistent().extend_ttl(
        &DataKey::TreasuryBalance,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}
