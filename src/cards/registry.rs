//! Card registry for definition lookup.
//!
//! The `CardRegistry` is the catalog the game is built from. It rejects
//! definitions whose ability names collide, since the ability name is the
//! usage-counter key on every instance.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::definition::{CardDefinition, CardId};

/// Errors raised while building or querying the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A definition with this collection number is already registered.
    #[error("{0} is already registered")]
    DuplicateCard(CardId),

    /// A definition uses the same ability name twice.
    #[error("{card} declares ability \"{ability}\" more than once")]
    DuplicateAbility { card: CardId, ability: String },

    /// No definition with this collection number.
    #[error("{0} is not registered")]
    UnknownCard(CardId),
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_ccg_cascade::cards::{CardDefinition, CardId, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(CardId::new(1), "Ember Scout")).unwrap();
///
/// let deck = registry.decklist(&[CardId::new(1), CardId::new(1)]).unwrap();
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck[0].name, "Ember Scout");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<CardDefinition>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<Arc<CardDefinition>, RegistryError> {
        if self.cards.contains_key(&card.id) {
            return Err(RegistryError::DuplicateCard(card.id));
        }
        if let Some(name) = card.duplicate_ability_name() {
            return Err(RegistryError::DuplicateAbility {
                card: card.id,
                ability: name.to_string(),
            });
        }
        let card = Arc::new(card);
        self.cards.insert(card.id, Arc::clone(&card));
        Ok(card)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id)
    }

    /// Find a definition by name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<CardDefinition>> {
        self.cards.values().find(|c| c.name == name)
    }

    /// Build a decklist from collection numbers, in the given order.
    pub fn decklist(&self, ids: &[CardId]) -> Result<Vec<Arc<CardDefinition>>, RegistryError> {
        ids.iter()
            .map(|&id| self.get(id).cloned().ok_or(RegistryError::UnknownCard(id)))
            .collect()
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }
}
