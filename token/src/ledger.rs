//! Balance storage and transfer semantics

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::constants::TOKEN_UNIT;

#[derive(Error, Debug, PartialEq)]
pub enum TokenError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u128, available: u128 },

    #[error("Balance overflow crediting {0}")]
    BalanceOverflow(String),

    #[error("Total supply overflow: {0} whole tokens")]
    SupplyOverflow(u128),
}

pub type Result<T> = std::result::Result<T, TokenError>;

/// Capability surface consumed by the crowdsale.
///
/// `transfer` is atomic: when it returns `false` no balance has changed.
pub trait Ledger {
    fn balance_of(&self, address: &str) -> u128;
    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> bool;
}

/// In-memory fixed-supply token ledger.
///
/// The entire supply is minted to the deployer at construction; no further
/// minting or burning exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    total_supply: u128,
    balances: HashMap<String, u128>,
}

impl Token {
    /// Creates the token with `whole_supply` whole tokens (scaled by
    /// `TOKEN_UNIT`) credited to `deployer`. Fails when the scaled supply
    /// does not fit the base-unit type.
    pub fn new(name: &str, symbol: &str, whole_supply: u128, deployer: &str) -> Result<Self> {
        let total_supply = whole_supply
            .checked_mul(TOKEN_UNIT)
            .ok_or(TokenError::SupplyOverflow(whole_supply))?;
        let mut balances = HashMap::new();
        balances.insert(deployer.to_string(), total_supply);

        Ok(Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            total_supply,
            balances,
        })
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn balance_of(&self, address: &str) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Moves `amount` base units from `from` to `to`.
    ///
    /// Fails without touching either balance when `from` cannot cover the
    /// amount. A zero-amount transfer is a no-op success.
    pub fn transfer(&mut self, from: &str, to: &str, amount: u128) -> Result<()> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                requested: amount,
                available,
            });
        }

        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or_else(|| TokenError::BalanceOverflow(to.to_string()))?;

        self.balances.insert(from.to_string(), available - amount);
        self.balances.insert(to.to_string(), credited);

        log::debug!("token transfer: {} -> {} ({} units)", from, to, amount);
        Ok(())
    }
}

impl Ledger for Token {
    fn balance_of(&self, address: &str) -> u128 {
        Token::balance_of(self, address)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: u128) -> bool {
        Token::transfer(self, from, to, amount).is_ok()
    }
}
