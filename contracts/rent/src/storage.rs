use accesspass::ttl::{PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Rental(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub payment_token: Address,
    /// Staker contract the staged fees are swept into. Must be linked
    /// before the sweep can run.
    pub stake_contract: Option<Address>,
    /// Fixed fee for one rental period, in the smallest token unit.
    pub rent_fee: i128,
    /// Length of one rental period in seconds.
    pub rent_duration: u64,
    pub is_rentable: bool,
}

/// One record per renter; a renter is active until `expires_at`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalRecord {
    pub expires_at: u64,
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
        .expect("Rent: Config not set");

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

pub fn get_rental(env: &Env, renter: &Address) -> Option<RentalRecord> {
    let key = DataKey::Rental(renter.clone());
    let rental = env.storage().persistent().get(&key);
    if rental.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    rental
}

pub fn save_rental(env: &Env, renter: &Address, rental: &RentalRecord) {
    let key = DataKey::Rental(renter.clone());
    env.storage().persistent().set(&key, rental);
    env.storage().persistent().extend_ttl(
        &key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove_rental(env: &Env, renter: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Rental(renter.clone()));
}
