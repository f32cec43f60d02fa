//! Ability resolution.
//!
//! Resolving an ability runs its effects, then drains every trigger those
//! effects set off, then settles the bookkeeping. The work is done by a
//! [`Cascade`], a small state machine over [`ResolutionPhase`]; the
//! [`Engine`] drives it and adds gating and selection checks.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use rust_ccg_cascade::abilities::{Ability, Selections, UsageLimit};
//! use rust_ccg_cascade::cards::{CardDefinition, CardId};
//! use rust_ccg_cascade::core::{EngineConfig, GameState, Zone};
//! use rust_ccg_cascade::effects::Effect;
//! use rust_ccg_cascade::stack::Engine;
//!
//! // "When this card is sent to the GY: mill 3"
//! let def = CardDefinition::new(CardId::new(1), "Grave Caller")
//!     .with_ability(
//!         Ability::activated("Sacrifice", UsageLimit::Unlimited)
//!             .with_effect(Effect::MoveThis { to: Zone::Graveyard })
//!             .build(),
//!     )
//!     .with_ability(
//!         Ability::triggered("Wake", UsageLimit::Unlimited, Zone::Graveyard)
//!             .with_effect(Effect::Mill)
//!             .with_effect(Effect::Mill)
//!             .with_effect(Effect::Mill)
//!             .build(),
//!     );
//! let filler = Arc::new(CardDefinition::new(CardId::new(2), "Filler"));
//!
//! let (mut state, caller) = GameState::new().spawn_card(Arc::new(def), Zone::Field);
//! for _ in 0..3 {
//!     state = state.spawn_card(Arc::clone(&filler), Zone::Deck).0;
//! }
//!
//! let engine = Engine::new(EngineConfig::default());
//! let resolution = engine.activate(&state, caller, "Sacrifice", Selections::none()).unwrap();
//!
//! assert_eq!(resolution.atoms.len(), 4);
//! assert_eq!(resolution.state.zone(Zone::Graveyard).len(), 4);
//! ```

mod cascade;
mod engine;

pub use cascade::{Cascade, Resolution, ResolutionPhase};
pub use engine::Engine;
