//! Card instance identification.
//!
//! Every card instance in a game has a unique `InstanceId`. Ids are handed out
//! monotonically from `GameState::next_id` and are never reused, so an id read
//! from one state can always be re-resolved against a later state.
//!
//! ## Usage
//!
//! ```
//! use rust_ccg_cascade::core::InstanceId;
//!
//! let first = InstanceId::new(0);
//! let second = first.next();
//!
//! assert_eq!(second.raw(), 1);
//! assert!(second > first);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Ordering follows allocation order: a larger id was instantiated later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create an instance ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
