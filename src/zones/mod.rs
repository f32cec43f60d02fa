//! Zone system for card locations.
//!
//! The zone set is closed (`Zone`, from `core::config`). Order matters only
//! in the Deck, whose top is index 0.
//!
//! ## Key Types
//!
//! - `Zone`: The fixed set of card containers
//! - `ZoneStore`: Card storage, lookup and movement

pub mod store;

pub use store::ZoneStore;

// Re-export zone type from core for convenience
pub use crate::core::config::Zone;
