//! OWL Token Ledger
//!
//! Fixed-supply fungible token ledger consumed by the crowdsale. Exposes:
//! - The `Ledger` capability trait (`balance_of` / `transfer`) the sale
//!   core is written against
//! - `Token`, an in-memory 18-decimal implementation with the whole supply
//!   minted to the deployer at construction

pub mod ledger;

pub use ledger::{Ledger, Token, TokenError};

/// Token constants
pub mod constants {
    /// Smallest-unit scale: one whole token (18 decimal places)
    pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

    /// Decimal places of the token
    pub const DECIMALS: u8 = 18;
}

pub use constants::TOKEN_UNIT;
