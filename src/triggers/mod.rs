//! Trigger system for move-driven abilities.
//!
//! Triggered abilities fire when their card moves between zones. Every
//! move atom the engine applies is scanned; matching abilities become
//! pending triggers that the resolution engine drains.
//!
//! ## Key Components
//!
//! - [`discover`]: Match move atoms against triggered abilities
//! - [`PendingTrigger`]: A (card, ability) pair waiting to resolve
//! - [`PendingTriggers`]: The work list, drained in a fixed [`TriggerOrder`]
//!
//! ## Ordering
//!
//! The drain order is observable through the effect log, so it is fixed per
//! engine. The default, `TriggerOrder::Stack`, resolves the most recently
//! discovered trigger first.
//!
//! [`TriggerOrder`]: crate::core::TriggerOrder

mod discovery;
mod pending;

pub use discovery::{discover, PendingTrigger};
pub use pending::PendingTriggers;
