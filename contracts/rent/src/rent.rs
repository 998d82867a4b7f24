use soroban_sdk::{contractclient, Address, Env};

use crate::{msg::ConfigResponse, storage::RentalRecord};

#[contractclient(name = "RentClient")]
pub trait RentTrait {
    fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        rent_fee: i128,
        rent_duration: u64,
    );

    fn set_stake_contract_address(env: Env, address: Address);

    fn set_is_rentable(env: Env, value: bool);

    // ################################################################
    //                             Users
    // ################################################################

    fn rent(env: Env, renter: Address, payment: i128);

    // ################################################################
    //                             Admin
    // ################################################################

    fn sweep_funds_to_staker_contract(env: Env);

    fn reset_rental(env: Env, renter: Address);

    // ################################################################
    //                            Queries
    // ################################################################

    fn is_rent_active(env: Env, renter: Address) -> bool;

    fn query_config(env: Env) -> ConfigResponse;

    fn query_admin(env: Env) -> Address;

    fn query_rental(env: Env, renter: Address) -> Option<RentalRecord>;
}
