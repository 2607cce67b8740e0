//! Single-owner authorization gate

use serde::{Deserialize, Serialize};

use crate::error::{Result, SaleError};

/// Holds the one address allowed to call admin operations. Fixed at
/// construction; there is no ownership transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerGate {
    owner: String,
}

impl OwnerGate {
    pub fn new(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Must be the first statement of every owner-gated operation so that a
    /// rejected caller never observes a partial mutation.
    pub fn authorize(&self, caller: &str) -> Result<()> {
        if caller != self.owner {
            return Err(SaleError::Unauthorized);
        }
        Ok(())
    }
}
