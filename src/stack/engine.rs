//! The resolution engine.
//!
//! `Engine` bundles the configuration and the game's condition hooks, and
//! is the entry point callers use: `activate` gates and validates an
//! activation before resolving it, `resolve` runs the cascade directly.

use tracing::debug;

use super::cascade::{Cascade, Resolution};
use crate::abilities::{self, AbilityContext, ConditionHooks, SelectionSpec, Selections};
use crate::core::{EngineConfig, EngineError, GameState, InstanceId, Result};
use crate::effects::matches;

/// Resolves abilities against game states.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::abilities::{Ability, Selections, UsageLimit};
/// use rust_ccg_cascade::cards::{CardDefinition, CardId};
/// use rust_ccg_cascade::core::{EngineConfig, GameState, Zone};
/// use rust_ccg_cascade::effects::Effect;
/// use rust_ccg_cascade::stack::Engine;
///
/// let def = CardDefinition::new(CardId::new(1), "Relic").with_ability(
///     Ability::activated("Discard", UsageLimit::Times(1))
///         .with_effect(Effect::MoveThis { to: Zone::Graveyard })
///         .build(),
/// );
/// let (state, id) = GameState::new().spawn_card(Arc::new(def), Zone::Hand);
/// let engine = Engine::new(EngineConfig::default());
///
/// let first = engine.activate(&state, id, "Discard", Selections::none()).unwrap();
/// assert_eq!(first.state.zone_of(id).unwrap(), Zone::Graveyard);
///
/// // Once per game
/// assert!(engine.activate(&first.state, id, "Discard", Selections::none()).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Engine<'a> {
    config: EngineConfig,
    hooks: ConditionHooks<'a>,
}

impl<'a> Engine<'a> {
    /// Create an engine with no custom condition hooks.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            hooks: ConditionHooks::new(),
        }
    }

    /// Set the condition hooks (builder pattern).
    #[must_use]
    pub fn with_hooks(mut self, hooks: ConditionHooks<'a>) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn hooks(&self) -> &ConditionHooks<'a> {
        &self.hooks
    }

    /// Run the gate for an ability.
    pub fn check(&self, state: &GameState, card: InstanceId, ability: &str) -> Result<()> {
        let ctx = AbilityContext::resolve(state, card, ability)?;
        abilities::check(&ctx, &self.hooks).map_err(|rejection| {
            debug!(card = %card, ability, %rejection, "activation rejected");
            EngineError::Rejected(rejection)
        })
    }

    /// Check whether an ability may be activated now.
    #[must_use]
    pub fn can_activate(&self, state: &GameState, card: InstanceId, ability: &str) -> bool {
        self.check(state, card, ability).is_ok()
    }

    /// Resolve an ability and its trigger cascade without gating.
    pub fn resolve(
        &self,
        state: &GameState,
        card: InstanceId,
        ability: &str,
        selections: Selections,
    ) -> Result<Resolution> {
        Cascade::new(state, card, ability, selections, &self.config)?.run()
    }

    /// Gate, validate the selections, then resolve.
    pub fn activate(
        &self,
        state: &GameState,
        card: InstanceId,
        ability: &str,
        selections: Selections,
    ) -> Result<Resolution> {
        self.check(state, card, ability)?;
        validate_selections(state, card, ability, &selections)?;
        self.resolve(state, card, ability, selections)
    }
}

/// Check the caller's selections against what the ability asks for.
fn validate_selections(
    state: &GameState,
    card: InstanceId,
    ability: &str,
    selections: &Selections,
) -> Result<()> {
    let ctx = AbilityContext::resolve(state, card, ability)?;
    let Some(spec) = ctx.ability.as_activated().and_then(|a| a.selection.as_ref()) else {
        return Ok(());
    };

    let missing = || EngineError::MissingSelection {
        ability: ability.to_string(),
    };
    let invalid = || EngineError::InvalidSelection {
        ability: ability.to_string(),
    };

    match spec {
        SelectionSpec::Card(criteria) => {
            let target = selections.card.ok_or_else(missing)?;
            let target = state.card_by_id(target).map_err(|_| invalid())?;
            if !matches(state, target, criteria)? {
                return Err(invalid());
            }
        }
        SelectionSpec::Element(_) => {
            let element = selections.element.ok_or_else(missing)?;
            if !spec.admits_element(element) {
                return Err(invalid());
            }
        }
    }
    Ok(())
}
