//! Zone store for card locations and movement.
//!
//! The `ZoneStore` owns every card instance in the game, one persistent list
//! per zone. It supports:
//! - Card lookup by instance id, scanning zones in `Zone::ALL` order
//! - Atomic moves that append to the destination
//! - In-place replacement of a card with a patched copy
//!
//! Every card is in exactly one list. Methods that could break that take
//! `&mut self` but leave the store unchanged when they return an error.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{EngineError, InstanceId, Result, Zone};

/// Card lists for every zone.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::cards::{CardDefinition, CardId, CardInstance};
/// use rust_ccg_cascade::core::{InstanceId, Zone};
/// use rust_ccg_cascade::zones::ZoneStore;
///
/// let def = Arc::new(CardDefinition::new(CardId::new(1), "Pebble"));
/// let mut store = ZoneStore::new();
/// store.push(Zone::Hand, CardInstance::new(InstanceId(0), def)).unwrap();
///
/// assert_eq!(store.zone_of(InstanceId(0)), Some(Zone::Hand));
/// store.move_to(InstanceId(0), Zone::Field).unwrap();
/// assert_eq!(store.ids(Zone::Field), vec![InstanceId(0)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneStore {
    zones: [Vector<CardInstance>; Zone::COUNT],
}

impl ZoneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &Vector<CardInstance> {
        &self.zones[zone.index()]
    }

    /// Instance ids in a zone, in order.
    #[must_use]
    pub fn ids(&self, zone: Zone) -> Vec<InstanceId> {
        self.cards(zone).iter().map(|c| c.id).collect()
    }

    /// Locate a card: its zone and position within that zone.
    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<(Zone, usize)> {
        Zone::ALL.iter().find_map(|&zone| {
            self.cards(zone)
                .iter()
                .position(|c| c.id == id)
                .map(|index| (zone, index))
        })
    }

    /// Get a card by id.
    #[must_use]
    pub fn card(&self, id: InstanceId) -> Option<&CardInstance> {
        self.find(id)
            .and_then(|(zone, index)| self.cards(zone).get(index))
    }

    /// Zone currently holding a card.
    #[must_use]
    pub fn zone_of(&self, id: InstanceId) -> Option<Zone> {
        self.find(id).map(|(zone, _)| zone)
    }

    /// Append a new card to a zone.
    ///
    /// Fails if a card with the same id is already stored.
    pub fn push(&mut self, zone: Zone, card: CardInstance) -> Result<()> {
        if let Some(existing) = self.zone_of(card.id) {
            return Err(EngineError::InvariantViolation(format!(
                "card {} is already in {existing}",
                card.id
            )));
        }
        self.zones[zone.index()].push_back(card);
        Ok(())
    }

    /// Append a card whose id is known to be fresh.
    pub(crate) fn append(&mut self, zone: Zone, card: CardInstance) {
        self.zones[zone.index()].push_back(card);
    }

    /// Move a card to the end of `dest`.
    ///
    /// Returns the zone the card left. Moving a card to the zone it is
    /// already in leaves the order unchanged.
    pub fn move_to(&mut self, id: InstanceId, dest: Zone) -> Result<Zone> {
        let (source, index) = self.find(id).ok_or(EngineError::NotFound(id))?;
        if source == dest {
            return Ok(source);
        }
        let card = self.zones[source.index()].remove(index);
        self.zones[dest.index()].push_back(card);
        Ok(source)
    }

    /// Replace a stored card with a new value for the same id.
    pub fn replace(&mut self, card: CardInstance) -> Result<()> {
        let (zone, index) = self.find(card.id).ok_or(EngineError::NotFound(card.id))?;
        self.zones[zone.index()].set(index, card);
        Ok(())
    }

    /// Iterate over every card with its zone, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &CardInstance)> + '_ {
        Zone::ALL
            .iter()
            .flat_map(move |&zone| self.cards(zone).iter().map(move |c| (zone, c)))
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.iter().map(Vector::len).sum()
    }

    /// Check if no zone holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.iter().all(Vector::is_empty)
    }
}
