use soroban_sdk::{Address, Env, Symbol};

pub struct RentEvents {}

impl RentEvents {
    /// Emitted when the rent gate is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[rent_fee: i128, rent_duration: u64]`
    pub fn initialize(env: &Env, admin: Address, rent_fee: i128, rent_duration: u64) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (rent_fee, rent_duration));
    }

    /// Emitted when a renter pays for a rental period
    ///
    /// - topics - `["rent", renter: Address]`
    /// - data - `[payment: i128, expires_at: u64]`
    pub fn rent(env: &Env, renter: Address, payment: i128, expires_at: u64) {
        let topics = (Symbol::new(env, "rent"), renter);
        env.events().publish(topics, (payment, expires_at));
    }

    /// Emitted when the staged fees are swept into the staker contract
    ///
    /// - topics - `["sweep", stake_contract: Address]`
    /// - data - `[amount: i128]`
    pub fn sweep(env: &Env, stake_contract: Address, amount: i128) {
        let topics = (Symbol::new(env, "sweep"), stake_contract);
        env.events().publish(topics, amount);
    }

    /// Emitted when a rental is administratively reset
    ///
    /// - topics - `["reset", renter: Address]`
    /// - data - ()
    pub fn reset(env: &Env, renter: Address) {
        let topics = (Symbol::new(env, "reset"), renter);
        env.events().publish(topics, ());
    }
}
