//! Buyer eligibility set

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Addresses permitted to purchase. Membership only grows: the sale has no
/// removal path. Owner gating of `add` lives in the orchestrator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Whitelist {
    members: HashSet<String>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: re-adding a member is a no-op success. Returns whether
    /// the address was newly added.
    pub fn add(&mut self, address: &str) -> bool {
        self.members.insert(address.to_string())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.members.contains(address)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
