use soroban_sdk::{contractclient, Address, Env};

/// The part of the stake contract surface the rent contract invokes when it
/// forwards staged rent fees into the pooled treasury.
#[contractclient(name = "TreasuryClient")]
pub trait TreasuryInterface {
    fn deposit_rent_proceeds(env: Env, sender: Address, amount: i128);
}
