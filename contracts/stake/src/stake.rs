use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::msg::ConfigResponse;

#[contractclient(name = "StakeClient")]
pub trait StakeTrait {
    fn initialize(env: Env, admin: Address, payment_token: Address);

    fn set_pass_collection_address(env: Env, address: Address);

    fn set_rent_contract_address(env: Env, address: Address);

    // ################################################################
    //                             Users
    // ################################################################

    fn stake_purchase_treasury_stock(env: Env, sender: Address, token_id: u64, payment: i128);

    fn unstake_access_pass(env: Env, sender: Address, token_id: u64);

    // ################################################################
    //                         Rent contract
    // ################################################################

    fn deposit_rent_proceeds(env: Env, sender: Address, amount: i128);

    // ################################################################
    //                             Admin
    // ################################################################

    fn payout_stakers(env: Env);

    // ################################################################
    //                            Queries
    // ################################################################

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_share_price(env: Env) -> i128;

    fn query_shares(env: Env, wallet: Address) -> u32;

    fn query_total_outstanding_shares(env: Env) -> u32;

    fn query_staked_tokens(env: Env, wallet: Address) -> Vec<u64>;

    fn query_treasury_balance(env: Env) -> i128;

    fn query_all_staker_addresses(env: Env) -> Vec<Address>;
}
