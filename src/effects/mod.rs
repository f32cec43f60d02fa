//! Effect system for card abilities.
//!
//! Effects are the building blocks of abilities:
//! - `Effect`: What an ability does, as written on the card
//! - `EffectAtom`: A single applied transition (a move or a pool change)
//! - `CardCriterion`: Conjunctive card predicates used by effects and selections
//!
//! ## Compilation
//!
//! Effects are never applied directly. `compile` turns an effect into atoms
//! against the current state, `apply_atom` applies one atom, and
//! `thread_effects` runs a whole effect list so each effect sees the state
//! produced by the ones before it.

mod compiler;
mod criteria;
mod effect;

pub use compiler::{apply_atom, compile, thread_effects};
pub use criteria::{cards_matching, matches, CardCriterion};
pub use effect::{Effect, EffectAtom, ResourceTarget};
