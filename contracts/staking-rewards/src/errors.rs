use soroban_sdk::contracterror;

use crate::math::ArithmeticError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidAmount = 4,
    Overflow = 5,
    Underflow = 6,
    DivideByZero = 7,
    InvalidReward = 8,
    PeriodNotFinished = 9,
    Paused = 10,
    Reentrant = 11,
    TransferFailed = 12,
    AssetNotAllowed = 13,
    TokensIdentical = 14,
    InvalidParameter = 15,
}

impl From<ArithmeticError> for ContractError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::Overflow => ContractError::Overflow,
            ArithmeticError::Underflow => ContractError::Underflow,
            ArithmeticError::DivideByZero => ContractError::DivideByZero,
        }
    }
}
