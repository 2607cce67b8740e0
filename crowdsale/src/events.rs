//! Sale event log
//!
//! Append-only, ordered record of successful operations, kept separate from
//! the accounting state so observers (UI, tests) can assert on it without
//! reaching into the sale's internals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SaleEvent {
    /// A purchase succeeded: `amount` token base units went to `buyer`.
    Buy { amount: u128, buyer: String },

    /// The sale was finalized. `currency_raised` is the full currency
    /// balance swept to the owner, which can differ from
    /// `tokens_sold * price` after mid-sale price changes or overpayments.
    Finalize {
        tokens_sold: u128,
        currency_raised: u128,
    },
}
