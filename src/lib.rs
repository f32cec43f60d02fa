//! # rust-ccg-cascade
//!
//! An ability resolution engine for a single-player, zone-based card game.
//!
//! Cards print abilities. Activated abilities are used by the player when a
//! gate of conditions holds; triggered abilities fire when a card moves
//! between zones. Resolving one ability can set off triggers, which can set
//! off more: the engine drains that cascade to completion and hands back a
//! new state plus the log of every transition it applied.
//!
//! ## Design Principles
//!
//! 1. **Persistent State**: `GameState` is built on `im-rs`, so every
//!    operation returns a new state in O(1) clones and a failed resolution
//!    leaves the caller's state untouched.
//!
//! 2. **Atoms, Not Effects**: Effects compile into `EffectAtom`s (one card
//!    move or one resource change). Atoms are what get applied, logged and
//!    scanned for triggers.
//!
//! 3. **Identity by Id**: Cards are looked up by `InstanceId` after every
//!    transition, never held across one.
//!
//! 4. **Injected Collaborators**: Randomness comes from a `RandomSource`,
//!    selections from the caller, custom conditions from `ConditionHooks`.
//!
//! ## Modules
//!
//! - `core`: Ids, zones, resources, errors, configuration, RNG, game state
//! - `zones`: Zone storage
//! - `cards`: Card definitions, instances and the catalog registry
//! - `abilities`: Ability definitions and the activation gate
//! - `effects`: Effects, criteria and the effect compiler
//! - `triggers`: Trigger discovery and the pending work list
//! - `stack`: Cascade resolution and the `Engine` entry point
//! - `rules`: Game setup, drawing and legal activation enumeration
//! - `games`: Sample card content

pub mod core;
pub mod zones;
pub mod cards;
pub mod abilities;
pub mod effects;
pub mod triggers;
pub mod stack;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    InstanceId, Zone, Element, ResourceCost, ResourcePool,
    EngineConfig, TriggerOrder, EngineError, Result,
    GameRng, GameRngState, RandomSource, ScriptedSource, shuffle,
    GameState,
};

pub use crate::zones::ZoneStore;

pub use crate::cards::{
    CardId, CardDefinition, CardInstance, CardPatch, CardRegistry, RegistryError, Tag,
};

pub use crate::abilities::{
    Ability, ActivatedAbility, TriggeredAbility, UsageLimit, ZoneRequirement,
    SelectionSpec, StateCheck, Selections, AbilityContext,
    ConditionHooks, GateRejection, can_activate, check,
};

pub use crate::effects::{
    Effect, EffectAtom, ResourceTarget, CardCriterion,
    compile, apply_atom, thread_effects, matches, cards_matching,
};

pub use crate::triggers::{discover, PendingTrigger, PendingTriggers};

pub use crate::stack::{Cascade, Engine, Resolution, ResolutionPhase};

pub use crate::rules::{draw_card, legal_activations, start_game, Activation, Targets};
