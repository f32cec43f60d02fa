//! Ability context and player selections.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use crate::cards::CardInstance;
use crate::core::{Element, EngineError, GameState, InstanceId, Result};

/// The state, acting card and ability an activation is evaluated against.
///
/// All three borrow from the same `GameState`; after any transition a new
/// context must be built from the new state.
#[derive(Clone, Copy, Debug)]
pub struct AbilityContext<'a> {
    pub state: &'a GameState,
    pub card: &'a CardInstance,
    pub ability: &'a Ability,
}

impl<'a> AbilityContext<'a> {
    /// Resolve a card and one of its abilities by name.
    pub fn resolve(state: &'a GameState, card: InstanceId, ability: &str) -> Result<Self> {
        let instance = state.card_by_id(card)?;
        let found = instance
            .definition
            .ability(ability)
            .ok_or_else(|| EngineError::UnknownAbility {
                card,
                ability: ability.to_string(),
            })?;
        Ok(Self {
            state,
            card: instance,
            ability: found,
        })
    }

    /// Same card and ability against a newer state.
    ///
    /// The card is re-fetched by id since it may have moved.
    pub fn refresh(&self, state: &'a GameState) -> Result<Self> {
        Self::resolve(state, self.card.id, self.ability.name())
    }
}

/// Choices supplied by the caller for an activation.
///
/// Triggered abilities always resolve with `Selections::none()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selections {
    pub card: Option<InstanceId>,
    pub element: Option<Element>,
}

impl Selections {
    /// No selection.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Select a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: InstanceId) -> Self {
        self.card = Some(card);
        self
    }

    /// Select an element (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }
}
