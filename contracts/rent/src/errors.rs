use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    StakeContractNotSet = 3,
    RentingClosed = 4,
    AlreadyRenting = 5,
    IncorrectPayment = 6,
    InvalidRentFee = 7,
    InvalidRentDuration = 8,
}
