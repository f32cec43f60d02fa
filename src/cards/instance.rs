//! Card instances - runtime card state.
//!
//! `CardInstance` is a specific copy of a card in a game. It shares its
//! definition through an `Arc` and adds a unique id plus per-ability usage
//! counters. Instances never leave the game; they only move between zones.
//!
//! Changes go through `CardPatch`, which can never alter the id.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::CardDefinition;
use crate::core::{EngineError, InstanceId, Result};

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id for this instance.
    pub id: InstanceId,

    /// Shared definition.
    pub definition: Arc<CardDefinition>,

    /// Times each ability has been used this game, keyed by ability name.
    #[serde(default)]
    pub usages: FxHashMap<String, u32>,
}

impl CardInstance {
    /// Instantiate a definition with the given id.
    ///
    /// Every ability starts with a usage count of zero.
    #[must_use]
    pub fn new(id: InstanceId, definition: Arc<CardDefinition>) -> Self {
        let usages = definition
            .abilities
            .iter()
            .map(|ability| (ability.name().to_string(), 0))
            .collect();
        Self {
            id,
            definition,
            usages,
        }
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Times an ability has been used. Unknown names count as zero.
    #[must_use]
    pub fn usage(&self, ability: &str) -> u32 {
        self.usages.get(ability).copied().unwrap_or(0)
    }
}

/// A partial update to a card instance.
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::cards::{CardDefinition, CardId, CardInstance, CardPatch};
/// use rust_ccg_cascade::core::InstanceId;
///
/// let def = Arc::new(CardDefinition::new(CardId::new(1), "Plain"));
/// let card = CardInstance::new(InstanceId(4), def);
///
/// let patched = CardPatch::new().with_usage("Rush", 2).apply(&card).unwrap();
/// assert_eq!(patched.usage("Rush"), 2);
///
/// // Ids are immutable
/// assert!(CardPatch::new().with_id(InstanceId(5)).apply(&card).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardPatch {
    id: Option<InstanceId>,
    usages: SmallVec<[(String, u32); 1]>,
}

impl CardPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to set the id. Applying a patch that changes the id fails.
    #[must_use]
    pub fn with_id(mut self, id: InstanceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set an ability's usage count.
    #[must_use]
    pub fn with_usage(mut self, ability: impl Into<String>, count: u32) -> Self {
        self.usages.push((ability.into(), count));
        self
    }

    /// Produce the patched copy of `card`.
    pub fn apply(&self, card: &CardInstance) -> Result<CardInstance> {
        if let Some(id) = self.id.filter(|&id| id != card.id) {
            return Err(EngineError::InvariantViolation(format!(
                "attempted to change id of card {} to {id}",
                card.id
            )));
        }
        let mut patched = card.clone();
        for (ability, count) in &self.usages {
            patched.usages.insert(ability.clone(), *count);
        }
        Ok(patched)
    }
}
