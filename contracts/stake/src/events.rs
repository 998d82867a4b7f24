use soroban_sdk::{Address, Env, Symbol};

pub struct StakeEvents {}

impl StakeEvents {
    /// Emitted when the pool is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, ());
    }

    /// Emitted when an access pass is staked and a treasury share purchased
    ///
    /// - topics - `["stake", staker: Address]`
    /// - data - `[token_id: u64, payment: i128]`
    pub fn stake(env: &Env, staker: Address, token_id: u64, payment: i128) {
        let topics = (Symbol::new(env, "stake"), staker);
        env.events().publish(topics, (token_id, payment));
    }

    /// Emitted when an access pass is unstaked and its share retired
    ///
    /// - topics - `["unstake", staker: Address]`
    /// - data - `[token_id: u64, payout: i128]`
    pub fn unstake(env: &Env, staker: Address, token_id: u64, payout: i128) {
        let topics = (Symbol::new(env, "unstake"), staker);
        env.events().publish(topics, (token_id, payout));
    }

    /// Emitted when rent proceeds are deposited into the treasury
    ///
    /// - topics - `["deposit", rent_contract: Address]`
    /// - data - `[amount: i128]`
    pub fn deposit(env: &Env, rent_contract: Address, amount: i128) {
        let topics = (Symbol::new(env, "deposit"), rent_contract);
        env.events().publish(topics, amount);
    }

    /// Emitted when the treasury is swept to the current shareholders
    ///
    /// - topics - `["payout", operator: Address]`
    /// - data - `[distributed: i128, remainder: i128]`
    pub fn payout(env: &Env, operator: Address, distributed: i128, remainder: i128) {
        let topics = (Symbol::new(env, "payout"), operator);
        env.events().publish(topics, (distributed, remainder));
    }
}
