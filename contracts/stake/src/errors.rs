use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    PassCollectionNotSet = 3,
    RentContractNotSet = 4,
    NotTokenOwner = 5,
    NotApproved = 6,
    InsufficientPayment = 7,
    TokenAlreadyStaked = 8,
    NotOwnerOrNotStaked = 9,
    InvalidAmount = 10,
    InsufficientTreasury = 11,
}
