//! OWL Crowdsale Module
//!
//! Sells a fixed allotment of OWL tokens for native currency at an
//! owner-adjustable price, gated by a hard deadline, a whitelist of eligible
//! buyers, and per-purchase minimum/maximum bounds. Every public operation
//! is all-or-nothing: the first failing check aborts the call and leaves the
//! sale state untouched.

pub mod access;
pub mod error;
pub mod events;
pub mod pricing;
pub mod sale;
pub mod schedule;
pub mod whitelist;

pub use access::OwnerGate;
pub use error::{Result, SaleError};
pub use events::SaleEvent;
pub use pricing::Pricing;
pub use sale::Crowdsale;
pub use schedule::SaleSchedule;
pub use whitelist::Whitelist;

pub use owl_token::{Ledger, TOKEN_UNIT};
