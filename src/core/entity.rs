//! Card instance identification.
//!
//! Every card that leaves a deck (drawn into a hand or revealed into the
//! hero pool) is stamped with an `InstanceId`. Ids come from a monotonically
//! increasing counter owned by the game state, so two instances of the same
//! card definition are always distinguishable.
//!
//! ```
//! use cosmic_trials::core::InstanceIdAllocator;
//!
//! let mut ids = InstanceIdAllocator::default();
//! let a = ids.next_id();
//! let b = ids.next_id();
//! assert!(b > a);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Issues fresh `InstanceId`s. Never reuses a value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InstanceIdAllocator {
    next: u32,
}

impl InstanceIdAllocator {
    /// Allocate the next id.
    pub fn next_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next
    }
}
