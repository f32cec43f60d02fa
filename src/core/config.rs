//! Zones and engine configuration.
//!
//! - `Zone`: the fixed set of card containers
//! - `TriggerOrder`: how pending triggers are drained during a cascade
//! - `EngineConfig`: tunables for game setup and resolution
//!
//! Unlike a fully generic engine, the zone set is closed: every match over
//! `Zone` is exhaustive, so adding a zone forces every consumer to handle it.

use serde::{Deserialize, Serialize};

/// A named container of card instances.
///
/// Every card instance lives in exactly one zone. Order only matters for the
/// `Deck`, where index 0 is the top card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The draw pile. Index 0 is the top.
    Deck,
    /// Cards held by the player.
    Hand,
    /// Cards in play.
    Field,
    /// Side zone for cards that are summoned from outside the deck.
    Extra,
    /// Discard pile.
    Graveyard,
    /// Exile. Cards here are out of the game but still tracked.
    Removed,
}

impl Zone {
    /// Number of zones.
    pub const COUNT: usize = 6;

    /// All zones in scan order.
    ///
    /// Lookups walk zones in this order, which keeps them deterministic.
    pub const ALL: [Zone; Zone::COUNT] = [
        Zone::Deck,
        Zone::Hand,
        Zone::Field,
        Zone::Extra,
        Zone::Graveyard,
        Zone::Removed,
    ];

    /// Position of this zone in `Zone::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Zone::Deck => 0,
            Zone::Hand => 1,
            Zone::Field => 2,
            Zone::Extra => 3,
            Zone::Graveyard => 4,
            Zone::Removed => 5,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Deck => "Deck",
            Zone::Hand => "Hand",
            Zone::Field => "Field",
            Zone::Extra => "Extra",
            Zone::Graveyard => "GY",
            Zone::Removed => "Removed",
        }
    }

    /// Whether card order within this zone is meaningful.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, Zone::Deck)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Order in which pending triggers are drained.
///
/// The order is observable through the effect log, so it is fixed per engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerOrder {
    /// Last in, first out. The most recently discovered trigger resolves first.
    #[default]
    Stack,
    /// First in, first out. Triggers resolve in discovery order.
    Queue,
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use rust_ccg_cascade::core::{EngineConfig, TriggerOrder};
///
/// let config = EngineConfig::new()
///     .with_starting_hand_size(7)
///     .with_max_cascade_steps(32)
///     .with_trigger_order(TriggerOrder::Queue);
///
/// assert_eq!(config.starting_hand_size, 7);
/// assert_eq!(config.max_cascade_steps, 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cards drawn when a game starts.
    pub starting_hand_size: usize,

    /// Maximum number of triggers a single resolution may drain before
    /// aborting with `CascadeOverflow`.
    pub max_cascade_steps: usize,

    /// Order in which pending triggers are drained.
    pub trigger_order: TriggerOrder,
}

impl EngineConfig {
    /// Default opening hand size.
    pub const DEFAULT_HAND_SIZE: usize = 5;

    /// Default cascade guard.
    pub const DEFAULT_MAX_CASCADE_STEPS: usize = 256;

    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_hand_size: Self::DEFAULT_HAND_SIZE,
            max_cascade_steps: Self::DEFAULT_MAX_CASCADE_STEPS,
            trigger_order: TriggerOrder::default(),
        }
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the cascade guard.
    #[must_use]
    pub fn with_max_cascade_steps(mut self, steps: usize) -> Self {
        self.max_cascade_steps = steps;
        self
    }

    /// Set the trigger drain order.
    #[must_use]
    pub fn with_trigger_order(mut self, order: TriggerOrder) -> Self {
        self.trigger_order = order;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
