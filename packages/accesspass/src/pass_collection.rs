use soroban_sdk::{contractclient, Address, Env};

/// The slice of the access pass collection the pool depends on. Ownership
/// queries, operator approval checks and custody transfers only; minting,
/// sale and metadata stay with the collection contract.
#[contractclient(name = "PassCollectionClient")]
pub trait PassCollectionInterface {
    fn owner_of(env: Env, token_id: u64) -> Address;

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;

    /// Moves `token_id` from `from` to `to`. The collection rejects the
    /// transfer when `from` is not the current owner or `spender` is neither
    /// `from` nor an operator approved by `from`.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, token_id: u64);
}
