//! Abilities and the activation gate.
//!
//! ## Key Types
//!
//! - `Ability`: Activated or triggered, with a usage limit and effect list
//! - `UsageLimit`: Per-game use cap
//! - `SelectionSpec`: What the player chooses when activating
//! - `StateCheck`: Extra activation predicates
//! - `AbilityContext`: State, card and ability under evaluation
//! - `Selections`: The caller's choices
//! - `ConditionHooks`: Game-provided evaluation of custom checks
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use rust_ccg_cascade::abilities::{
//!     can_activate, Ability, AbilityContext, ConditionHooks, UsageLimit, ZoneRequirement,
//! };
//! use rust_ccg_cascade::cards::{CardDefinition, CardId};
//! use rust_ccg_cascade::core::{GameState, Zone};
//! use rust_ccg_cascade::effects::Effect;
//!
//! let def = CardDefinition::new(CardId::new(1), "Scout").with_ability(
//!     Ability::activated("Rush", UsageLimit::Times(1))
//!         .from_zone(ZoneRequirement::In(Zone::Hand))
//!         .with_effect(Effect::SummonThis)
//!         .build(),
//! );
//! let (state, id) = GameState::new().spawn_card(Arc::new(def), Zone::Hand);
//!
//! let ctx = AbilityContext::resolve(&state, id, "Rush").unwrap();
//! assert!(can_activate(&ctx, &ConditionHooks::default()));
//! ```

mod ability;
mod context;
mod gate;

pub use ability::{
    Ability, ActivatedAbility, SelectionSpec, StateCheck, TriggeredAbility, UsageLimit,
    ZoneRequirement,
};
pub use context::{AbilityContext, Selections};
pub use gate::{can_activate, check, ConditionHooks, GateRejection};
