//! Crowdsale error types

use thiserror::Error;

/// Every failure of a public sale operation. The first failing check in an
/// operation's fixed check order is the error the caller sees; state is
/// unchanged on any of these.
#[derive(Error, Debug, PartialEq)]
pub enum SaleError {
    #[error("Caller is not the owner")]
    Unauthorized,

    #[error("The crowdsale is closed")]
    SaleClosed,

    #[error("Caller is not on the whitelist")]
    NotWhitelisted,

    #[error("Tokens amount is below minimum required: {amount} < {minimum}")]
    BelowMinimum { amount: u128, minimum: u128 },

    #[error("Tokens amount is above maximum allowed: {amount} > {maximum}")]
    AboveMaximum { amount: u128, maximum: u128 },

    #[error("Insufficient ETH: required {required}, provided {provided}")]
    InsufficientPayment { required: u128, provided: u128 },

    #[error("Supply exceeded: requested {requested}, available {available}")]
    SupplyExceeded { requested: u128, available: u128 },

    #[error("Token transfer failed")]
    TransferFailed,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Sale already finalized")]
    AlreadyFinalized,
}

pub type Result<T> = std::result::Result<T, SaleError>;
