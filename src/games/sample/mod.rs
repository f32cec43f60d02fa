//! Sample content for exercising the engine.
//!
//! A seven-card catalog with a shared "Tide" tag. Between them the cards
//! print every effect kind, both trigger directions and each kind of gate
//! condition, so it doubles as a fixture for integration tests and benches.

mod cards;

pub use cards::{
    all, brine_chalice, drowned_archivist, gull_omen, ids, reef_scout, registry, shoal_lantern,
    silt_walker, starter_deck, undertow, TIDE,
};
