//! Sale accounting orchestrator
//!
//! `Crowdsale` is the single shared state object. Each public operation runs
//! every guard before the first mutation, so a failure at any step leaves
//! the sale (and the token ledger) exactly as it found them. The token
//! ledger is an external collaborator handed in per call; the sale only
//! relies on its `transfer` being atomic.

use serde::{Deserialize, Serialize};

use crate::access::OwnerGate;
use crate::error::{Result, SaleError};
use crate::events::SaleEvent;
use crate::pricing::Pricing;
use crate::schedule::SaleSchedule;
use crate::whitelist::Whitelist;
use owl_token::Ledger;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crowdsale {
    /// The sale's own holding address on the token ledger. The deployer
    /// funds it with the sale allotment before trading opens.
    address: String,
    gate: OwnerGate,
    whitelist: Whitelist,
    schedule: SaleSchedule,
    pricing: Pricing,
    max_tokens: u128,
    tokens_sold: u128,
    currency_balance: u128,
    finalized: bool,
    events: Vec<SaleEvent>,
}

impl Crowdsale {
    /// Deadline, cap, and contribution bounds are fixed for the sale's
    /// lifetime; only `price` and whitelist membership mutate afterwards.
    pub fn new(
        address: &str,
        owner: &str,
        price: u128,
        max_tokens: u128,
        deadline: u64,
        min_contribution: u128,
        max_contribution: u128,
    ) -> Self {
        Self {
            address: address.to_string(),
            gate: OwnerGate::new(owner),
            whitelist: Whitelist::new(),
            schedule: SaleSchedule::new(deadline),
            pricing: Pricing::new(price, min_contribution, max_contribution),
            max_tokens,
            tokens_sold: 0,
            currency_balance: 0,
            finalized: false,
            events: Vec::new(),
        }
    }

    /// Purchases `token_amount` base units for `paid` currency units.
    ///
    /// Checks run in a fixed order (closed, whitelist, bounds, payment,
    /// supply, transfer) so the reported error is deterministic. Overpayment
    /// above the required price is retained, not refunded.
    pub fn buy_tokens(
        &mut self,
        ledger: &mut impl Ledger,
        caller: &str,
        token_amount: u128,
        paid: u128,
        now: u64,
    ) -> Result<()> {
        if self.finalized || !self.schedule.is_open(now) {
            return Err(SaleError::SaleClosed);
        }
        if !self.whitelist.contains(caller) {
            return Err(SaleError::NotWhitelisted);
        }
        self.pricing.validate_bounds(token_amount)?;

        let required = self.pricing.required_payment(token_amount)?;
        if paid < required {
            return Err(SaleError::InsufficientPayment {
                required,
                provided: paid,
            });
        }

        // An overflowing counter necessarily exceeds the cap, so it reports
        // the same error as any other oversupply.
        let sold = self
            .tokens_sold
            .checked_add(token_amount)
            .ok_or(SaleError::SupplyExceeded {
                requested: token_amount,
                available: self.max_tokens - self.tokens_sold,
            })?;
        if sold > self.max_tokens {
            return Err(SaleError::SupplyExceeded {
                requested: token_amount,
                available: self.max_tokens - self.tokens_sold,
            });
        }
        let balance = self
            .currency_balance
            .checked_add(paid)
            .ok_or(SaleError::ArithmeticOverflow)?;

        // Sole external effect; everything after it is local and infallible.
        if !ledger.transfer(&self.address, caller, token_amount) {
            return Err(SaleError::TransferFailed);
        }

        self.tokens_sold = sold;
        self.currency_balance = balance;
        self.events.push(SaleEvent::Buy {
            amount: token_amount,
            buyer: caller.to_string(),
        });

        log::info!(
            "buy: {} bought {} token units for {} (sold {}/{})",
            caller,
            token_amount,
            paid,
            self.tokens_sold,
            self.max_tokens
        );
        Ok(())
    }

    /// Plain currency transfer to the sale: the token amount is derived
    /// from the current price, then the normal purchase pipeline applies.
    /// Non-buyers are rejected before any computation.
    pub fn receive_payment(
        &mut self,
        ledger: &mut impl Ledger,
        caller: &str,
        paid: u128,
        now: u64,
    ) -> Result<()> {
        if !self.whitelist.contains(caller) {
            return Err(SaleError::NotWhitelisted);
        }

        let token_amount = self.pricing.tokens_for_payment(paid)?;
        self.buy_tokens(ledger, caller, token_amount, paid, now)
    }

    /// Owner-only. The new price takes effect for every later purchase;
    /// zero is accepted (it only breaks the derived-amount path).
    pub fn set_price(&mut self, caller: &str, new_price: u128) -> Result<()> {
        self.gate.authorize(caller)?;

        self.pricing.set_price(new_price);
        log::info!("price updated to {}", new_price);
        Ok(())
    }

    /// Owner-only, idempotent.
    pub fn whitelist_address(&mut self, caller: &str, address: &str) -> Result<()> {
        self.gate.authorize(caller)?;

        if self.whitelist.add(address) {
            log::info!("whitelisted {}", address);
        }
        Ok(())
    }

    /// Owner-only, once. Sweeps the sale's entire remaining token balance
    /// and held currency to the owner and closes the sale for good.
    /// Returns `(tokens_returned, currency_raised)`.
    pub fn finalize(&mut self, ledger: &mut impl Ledger, caller: &str) -> Result<(u128, u128)> {
        self.gate.authorize(caller)?;
        if self.finalized {
            return Err(SaleError::AlreadyFinalized);
        }

        let remaining = ledger.balance_of(&self.address);
        if remaining > 0 && !ledger.transfer(&self.address, self.gate.owner(), remaining) {
            return Err(SaleError::TransferFailed);
        }

        let currency_raised = self.currency_balance;
        self.currency_balance = 0;
        self.finalized = true;
        self.events.push(SaleEvent::Finalize {
            tokens_sold: self.tokens_sold,
            currency_raised,
        });

        log::info!(
            "finalized: {} token units sold, {} currency raised, {} token units returned",
            self.tokens_sold,
            currency_raised,
            remaining
        );
        Ok((remaining, currency_raised))
    }

    // Read-only views

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn owner(&self) -> &str {
        self.gate.owner()
    }

    pub fn price(&self) -> u128 {
        self.pricing.price()
    }

    pub fn max_tokens(&self) -> u128 {
        self.max_tokens
    }

    pub fn tokens_sold(&self) -> u128 {
        self.tokens_sold
    }

    pub fn deadline(&self) -> u64 {
        self.schedule.deadline()
    }

    pub fn min_contribution(&self) -> u128 {
        self.pricing.min_contribution()
    }

    pub fn max_contribution(&self) -> u128 {
        self.pricing.max_contribution()
    }

    pub fn is_whitelisted(&self, address: &str) -> bool {
        self.whitelist.contains(address)
    }

    pub fn finalized(&self) -> bool {
        self.finalized
    }

    pub fn currency_balance(&self) -> u128 {
        self.currency_balance
    }

    pub fn events(&self) -> &[SaleEvent] {
        &self.events
    }
}
