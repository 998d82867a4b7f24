extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    vec,
    Address, Env, IntoVal, Symbol,
};
use test_case::test_case;

use super::setup::{
    deploy_pass_collection, deploy_stake_contract, deploy_token_contract, fund_treasury, RENT_FEE,
};

#[test]
fn staking_two_passes_for_free_into_empty_treasury() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);

    passes.mint(&alice, &16);
    passes.mint(&bob, &17);
    passes.set_approval_for_all(&alice, &stake.address, &true);
    passes.set_approval_for_all(&bob, &stake.address, &true);

    // shares are worth 0 while the treasury is empty, so entry is free
    stake.stake_purchase_treasury_stock(&alice, &16, &0);
    stake.stake_purchase_treasury_stock(&bob, &17, &0);

    assert_eq!(passes.owner_of(&16), stake.address);
    assert_eq!(passes.owner_of(&17), stake.address);

    assert_eq!(stake.query_total_outstanding_shares(), 2);
    assert_eq!(stake.query_shares(&alice), 1);
    assert_eq!(stake.query_shares(&bob), 1);
    assert_eq!(stake.query_staked_tokens(&alice), vec![&env, 16]);
    assert_eq!(stake.query_staked_tokens(&bob), vec![&env, 17]);
    assert_eq!(stake.query_treasury_balance(), 0);
    assert_eq!(
        stake.query_all_staker_addresses(),
        vec![&env, alice, bob]
    );
}

#[test_case(0 ; "paying the exact price")]
#[test_case(100_000 ; "paying the price with slack")]
fn staking_pays_the_current_share_price(slack: i128) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let rent_contract = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, token_admin_client) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);
    stake.set_rent_contract_address(&rent_contract);

    passes.mint(&alice, &1);
    passes.mint(&bob, &2);
    passes.set_approval_for_all(&alice, &stake.address, &true);
    passes.set_approval_for_all(&bob, &stake.address, &true);

    stake.stake_purchase_treasury_stock(&alice, &1, &0);
    fund_treasury(&token_admin_client, &stake, &rent_contract, RENT_FEE);

    // one share outstanding backed by the full rent fee
    let price = stake.query_share_price();
    assert_eq!(price, RENT_FEE);

    let payment = price + slack;
    token_admin_client.mint(&bob, &payment);
    stake.stake_purchase_treasury_stock(&bob, &2, &payment);

    assert_eq!(stake.query_total_outstanding_shares(), 2);
    assert_eq!(stake.query_shares(&bob), 1);
    assert_eq!(stake.query_treasury_balance(), RENT_FEE + payment);
    assert_eq!(token.balance(&bob), 0);
    assert_eq!(token.balance(&stake.address), RENT_FEE + payment);
}

#[test]
fn staking_authorizes_the_payment_pull() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let rent_contract = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, token_admin_client) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);
    stake.set_rent_contract_address(&rent_contract);

    passes.mint(&alice, &1);
    passes.mint(&bob, &2);
    passes.set_approval_for_all(&alice, &stake.address, &true);
    passes.set_approval_for_all(&bob, &stake.address, &true);

    stake.stake_purchase_treasury_stock(&alice, &1, &0);
    fund_treasury(&token_admin_client, &stake, &rent_contract, RENT_FEE);

    let payment = stake.query_share_price();
    token_admin_client.mint(&bob, &payment);
    stake.stake_purchase_treasury_stock(&bob, &2, &payment);

    assert_eq!(
        env.auths(),
        [(
            bob.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    stake.address.clone(),
                    Symbol::new(&env, "stake_purchase_treasury_stock"),
                    (&bob, 2u64, payment).into_val(&env),
                )),
                sub_invocations: std::vec![AuthorizedInvocation {
                    function: AuthorizedFunction::Contract((
                        token.address.clone(),
                        symbol_short!("transfer"),
                        (&bob, &stake.address, payment).into_val(&env),
                    )),
                    sub_invocations: std::vec![],
                }],
            },
        ),]
    );
}

#[test]
#[should_panic(expected = "Stake: Stake and purchase: payment does not cover the current share price")]
fn staking_below_the_share_price_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let rent_contract = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, token_admin_client) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);
    stake.set_rent_contract_address(&rent_contract);

    passes.mint(&alice, &1);
    passes.mint(&bob, &2);
    passes.set_approval_for_all(&alice, &stake.address, &true);
    passes.set_approval_for_all(&bob, &stake.address, &true);

    stake.stake_purchase_treasury_stock(&alice, &1, &0);
    fund_treasury(&token_admin_client, &stake, &rent_contract, RENT_FEE);

    let price = stake.query_share_price();
    token_admin_client.mint(&bob, &price);
    stake.stake_purchase_treasury_stock(&bob, &2, &(price - 1));
}

#[test]
#[should_panic(expected = "Stake: Stake and purchase: sender does not own this access pass")]
fn staking_a_pass_owned_by_someone_else_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);

    passes.mint(&alice, &16);
    passes.set_approval_for_all(&bob, &stake.address, &true);

    stake.stake_purchase_treasury_stock(&bob, &16, &0);
}

#[test]
#[should_panic(expected = "Stake: Stake and purchase: pool is not approved to move the sender's passes")]
fn staking_without_operator_approval_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);

    passes.mint(&alice, &16);

    stake.stake_purchase_treasury_stock(&alice, &16, &0);
}

#[test]
#[should_panic(expected = "Stake: Stake and purchase: pass collection address has not been set")]
fn staking_before_pass_collection_is_linked_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &token_admin);

    let stake = deploy_stake_contract(&env, admin, &token.address);

    stake.stake_purchase_treasury_stock(&alice, &16, &0);
}

#[test]
#[should_panic(expected = "value cannot be negative")]
fn staking_with_negative_payment_should_fail() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let alice = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (token, _) = deploy_token_contract(&env, &token_admin);
    let passes = deploy_pass_collection(&env);

    let stake = deploy_stake_contract(&env, admin, &token.address);
    stake.set_pass_collection_address(&passes.address);

    passes.mint(&alice, &16);
    passes.set_approval_for_all(&alice, &stake.address, &true);

    stake.stake_purchase_treasury_stock(&alice, &16, &-1);
}
