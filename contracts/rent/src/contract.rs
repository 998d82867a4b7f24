use accesspass::{
    treasury::TreasuryClient,
    ttl::{INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD},
};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, token, Address, Env,
};

use crate::{
    errors::ErrorCode,
    events::RentEvents,
    msg::ConfigResponse,
    rent::RentTrait,
    storage::{
        get_config, get_rental, is_initialized, remove_rental, save_config, save_rental,
        set_initialized, Config, RentalRecord,
    },
};

contractmeta!(
    key = "Description",
    val = "Time boxed access pass rentals funding the staker treasury"
);

#[contract]
pub struct Rent;

#[contractimpl]
impl RentTrait for Rent {
    fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        rent_fee: i128,
        rent_duration: u64,
    ) {
        if is_initialized(&env) {
            log!(
                &env,
                "Rent: Initialize: initializing contract twice is not allowed"
            );
            panic_with_error!(&env, ErrorCode::AlreadyInitialized);
        }
        if rent_fee <= 0 {
            log!(&env, "Rent: Initialize: rent fee must be positive");
            panic_with_error!(&env, ErrorCode::InvalidRentFee);
        }
        if rent_duration == 0 {
            log!(&env, "Rent: Initialize: rent duration must be positive");
            panic_with_error!(&env, ErrorCode::InvalidRentDuration);
        }

        set_initialized(&env);

        save_config(
            &env,
            Config {
                admin: admin.clone(),
                payment_token,
                stake_contract: None,
                rent_fee,
                rent_duration,
                is_rentable: false,
            },
        );

        RentEvents::initialize(&env, admin, rent_fee, rent_duration);
    }

    fn set_stake_contract_address(env: Env, address: Address) {
        let mut config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        config.stake_contract = Some(address);
        save_config(&env, config);
    }

    fn set_is_rentable(env: Env, value: bool) {
        let mut config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        config.is_rentable = value;
        save_config(&env, config);
    }

    // ################################################################
    //                             Users
    // ################################################################

    fn rent(env: Env, renter: Address, payment: i128) {
        renter.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let config = get_config(&env);
        if !config.is_rentable {
            log!(&env, "Rent: Rent: renting is currently closed");
            panic_with_error!(&env, ErrorCode::RentingClosed);
        }
        if config.stake_contract.is_none() {
            log!(&env, "Rent: Rent: stake contract address has not been set");
            panic_with_error!(&env, ErrorCode::StakeContractNotSet);
        }
        // the fee is validated positive at initialize, so this also rejects
        // every free rental attempt
        if payment != config.rent_fee {
            log!(&env, "Rent: Rent: payment must equal the rent fee");
            panic_with_error!(&env, ErrorCode::IncorrectPayment);
        }

        let now = env.ledger().timestamp();
        if let Some(rental) = get_rental(&env, &renter) {
            if rental.expires_at > now {
                log!(&env, "Rent: Rent: sender already has an active rental");
                panic_with_error!(&env, ErrorCode::AlreadyRenting);
            }
        }

        let expires_at = now + config.rent_duration;
        save_rental(&env, &renter, &RentalRecord { expires_at });

        token::Client::new(&env, &config.payment_token).transfer(
            &renter,
            &env.current_contract_address(),
            &payment,
        );

        RentEvents::rent(&env, renter, payment, expires_at);
    }

    // ################################################################
    //                             Admin
    // ################################################################

    fn sweep_funds_to_staker_contract(env: Env) {
        let config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let stake_contract = match config.stake_contract {
            Some(address) => address,
            None => {
                log!(&env, "Rent: Sweep: stake contract address has not been set");
                panic_with_error!(&env, ErrorCode::StakeContractNotSet);
            }
        };

        let rent_address = env.current_contract_address();
        let token_client = token::Client::new(&env, &config.payment_token);
        let amount = token_client.balance(&rent_address);
        if amount == 0 {
            return;
        }

        token_client.transfer(&rent_address, &stake_contract, &amount);
        TreasuryClient::new(&env, &stake_contract).deposit_rent_proceeds(&rent_address, &amount);

        RentEvents::sweep(&env, stake_contract, amount);
    }

    fn reset_rental(env: Env, renter: Address) {
        let config = get_config(&env);
        config.admin.require_auth();
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        remove_rental(&env, &renter);

        RentEvents::reset(&env, renter);
    }

    // ################################################################
    //                            Queries
    // ################################################################

    fn is_rent_active(env: Env, renter: Address) -> bool {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        match get_rental(&env, &renter) {
            Some(rental) => rental.expires_at > env.ledger().timestamp(),
            None => false,
        }
    }

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

    fn query_rental(env: Env, renter: Address) -> Option<RentalRecord> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_rental(&env, &renter)
    }
}
