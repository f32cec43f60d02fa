//! Game state.
//!
//! `GameState` is the aggregate root: move counter, id allocator, zone
//! contents, resource pool and effect log. Zones and log are `im`
//! persistent structures, so cloning is cheap and every transition takes
//! `&GameState` and returns a new value. A failed transition leaves the
//! caller's state exactly as it was.

use std::sync::Arc;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::Zone;
use super::entity::InstanceId;
use super::error::{EngineError, Result};
use super::resources::ResourcePool;
use crate::cards::{CardDefinition, CardInstance, CardPatch};
use crate::effects::EffectAtom;
use crate::zones::ZoneStore;

/// Full game state.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::cards::{CardDefinition, CardId};
/// use rust_ccg_cascade::core::{GameState, Zone};
///
/// let def = Arc::new(CardDefinition::new(CardId::new(1), "Pebble"));
/// let (state, id) = GameState::new().spawn_card(def, Zone::Hand);
///
/// let moved = state.move_card(id, Zone::Field).unwrap();
/// assert_eq!(moved.zone_of(id).unwrap(), Zone::Field);
///
/// // The original is untouched
/// assert_eq!(state.zone_of(id).unwrap(), Zone::Hand);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Activated abilities resolved so far.
    moves: u32,

    /// Next instance id to allocate. Greater than every id ever issued.
    next_id: InstanceId,

    /// Card locations.
    pub(crate) zones: ZoneStore,

    /// Shared resource pool.
    pool: ResourcePool,

    /// Every atom applied by a settled resolution, in order.
    log: Vector<EffectAtom>,
}

impl GameState {
    /// Create an empty game state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource pool (builder pattern).
    #[must_use]
    pub fn with_pool(mut self, pool: ResourcePool) -> Self {
        self.pool = pool;
        self
    }

    /// Number of activated abilities resolved.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Id the next spawned card will receive.
    #[must_use]
    pub fn next_id(&self) -> InstanceId {
        self.next_id
    }

    /// Shared resource pool.
    #[must_use]
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Effect log.
    #[must_use]
    pub fn log(&self) -> &Vector<EffectAtom> {
        &self.log
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardInstance> {
        self.zones.cards(zone)
    }

    /// Instance ids in a zone, in order.
    #[must_use]
    pub fn zone_ids(&self, zone: Zone) -> Vec<InstanceId> {
        self.zones.ids(zone)
    }

    /// Every instance id, in zone scan order.
    #[must_use]
    pub fn instance_ids(&self) -> Vec<InstanceId> {
        self.zones.iter().map(|(_, c)| c.id).collect()
    }

    /// Total number of card instances.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.zones.len()
    }

    // === Zone Store ===

    /// Look up a card by id.
    pub fn card_by_id(&self, id: InstanceId) -> Result<&CardInstance> {
        self.zones.card(id).ok_or(EngineError::NotFound(id))
    }

    /// Zone currently holding a card.
    pub fn zone_of(&self, id: InstanceId) -> Result<Zone> {
        self.zones.zone_of(id).ok_or(EngineError::NotFound(id))
    }

    /// Move a card to the end of `dest`.
    ///
    /// Moving a card within its own zone is a no-op.
    pub fn move_card(&self, id: InstanceId, dest: Zone) -> Result<GameState> {
        let mut next = self.clone();
        next.zones.move_to(id, dest)?;
        Ok(next)
    }

    /// Replace a card with a patched copy, keeping its position.
    pub fn mutate_card(&self, id: InstanceId, patch: &CardPatch) -> Result<GameState> {
        let patched = patch.apply(self.card_by_id(id)?)?;
        let mut next = self.clone();
        next.zones.replace(patched)?;
        Ok(next)
    }

    /// Instantiate a definition at the end of `zone`.
    ///
    /// Returns the new state and the id assigned to the card.
    #[must_use]
    pub fn spawn_card(&self, definition: Arc<CardDefinition>, zone: Zone) -> (GameState, InstanceId) {
        let id = self.next_id;
        let mut next = self.clone();
        // next_id is above every issued id, so the append cannot collide
        next.zones.append(zone, CardInstance::new(id, definition));
        next.next_id = id.next();
        (next, id)
    }

    /// A state whose Deck holds `deck`, top first, and nothing else.
    ///
    /// Fails if two cards share an id.
    pub(crate) fn from_deck(deck: Vec<CardInstance>) -> Result<GameState> {
        let mut state = GameState::new();
        for card in deck {
            state.next_id = state.next_id.max(card.id.next());
            state.zones.push(Zone::Deck, card)?;
        }
        Ok(state)
    }

    // === Crate-internal bookkeeping ===

    pub(crate) fn set_pool(&mut self, pool: ResourcePool) {
        self.pool = pool;
    }

    pub(crate) fn bump_moves(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn extend_log(&mut self, atoms: impl IntoIterator<Item = EffectAtom>) {
        self.log.extend(atoms);
    }
}
