//! Price and contribution-bound configuration
//!
//! Amounts are 18-decimal base units; `price` is currency base units per
//! whole token. Conversions floor at the base-unit scale and all arithmetic
//! is checked.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaleError};
use owl_token::TOKEN_UNIT;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pricing {
    price: u128,
    min_contribution: u128,
    max_contribution: u128,
}

impl Pricing {
    /// Bounds are token base units per single purchase, immutable after
    /// construction. Only `price` mutates over the sale's lifetime.
    pub fn new(price: u128, min_contribution: u128, max_contribution: u128) -> Self {
        Self {
            price,
            min_contribution,
            max_contribution,
        }
    }

    pub fn price(&self) -> u128 {
        self.price
    }

    pub fn min_contribution(&self) -> u128 {
        self.min_contribution
    }

    pub fn max_contribution(&self) -> u128 {
        self.max_contribution
    }

    /// Unconditional overwrite; owner gating happens in the orchestrator.
    /// A zero price is accepted and makes the derived-purchase path fail.
    pub fn set_price(&mut self, new_price: u128) {
        self.price = new_price;
    }

    /// Currency owed for `token_amount` base units:
    /// `token_amount * price / TOKEN_UNIT`, floored.
    pub fn required_payment(&self, token_amount: u128) -> Result<u128> {
        mul_div(token_amount, self.price, TOKEN_UNIT)
    }

    /// Token base units a plain payment of `paid` buys:
    /// `paid * TOKEN_UNIT / price`, floored. Fails on a zero price.
    pub fn tokens_for_payment(&self, paid: u128) -> Result<u128> {
        mul_div(paid, TOKEN_UNIT, self.price)
    }

    pub fn validate_bounds(&self, token_amount: u128) -> Result<()> {
        if token_amount < self.min_contribution {
            return Err(SaleError::BelowMinimum {
                amount: token_amount,
                minimum: self.min_contribution,
            });
        }
        if token_amount > self.max_contribution {
            return Err(SaleError::AboveMaximum {
                amount: token_amount,
                maximum: self.max_contribution,
            });
        }
        Ok(())
    }
}

/// floor(amount * mul / div) without overflowing the intermediate product:
/// split `amount` into whole and remainder parts of `div` first. The
/// remainder product still overflowing (or `div == 0`) is a fatal
/// arithmetic error, never a wrap.
fn mul_div(amount: u128, mul: u128, div: u128) -> Result<u128> {
    if div == 0 {
        return Err(SaleError::ArithmeticOverflow);
    }

    let whole = (amount / div)
        .checked_mul(mul)
        .ok_or(SaleError::ArithmeticOverflow)?;
    let part = (amount % div)
        .checked_mul(mul)
        .ok_or(SaleError::ArithmeticOverflow)?
        / div;

    whole.checked_add(part).ok_or(SaleError::ArithmeticOverflow)
}
