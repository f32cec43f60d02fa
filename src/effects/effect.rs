//! Effect definitions.
//!
//! Effects are what an ability does, written against the state at
//! compile time. The compiler turns each one into zero or more
//! `EffectAtom`s: the single-step transitions that are actually applied,
//! logged and scanned for triggers.

use serde::{Deserialize, Serialize};

use super::criteria::CardCriterion;
use crate::core::{Element, InstanceId, Zone};

/// An ability effect.
///
/// ## This Card
///
/// - `SummonThis`: Move the acting card to the Field
/// - `MoveThis`: Move the acting card anywhere
///
/// ## Other Cards
///
/// - `MoveSelected`: Move the card the player selected
/// - `MoveAll`: Move every card matching the criteria
///
/// ## Deck
///
/// - `Draw` / `DrawMatching`: First (matching) Deck card to Hand
/// - `Mill` / `MillMatching`: First (matching) Deck card to the Graveyard
///
/// ## Resources
///
/// - `AdjustResource`: Add to or remove from the shared pool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    // === This Card ===

    SummonThis,

    MoveThis { to: Zone },

    // === Other Cards ===

    /// Requires a card selection.
    MoveSelected { to: Zone },

    /// Matches are taken from the state before the effect applies.
    MoveAll { criteria: Vec<CardCriterion>, to: Zone },

    // === Deck ===

    Draw,

    DrawMatching { criteria: Vec<CardCriterion> },

    Mill,

    MillMatching { criteria: Vec<CardCriterion> },

    // === Resources ===

    AdjustResource { element: ResourceTarget, delta: i64 },
}

/// Which element a resource effect changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceTarget {
    Fixed(Element),
    /// The element the player selected.
    Selected,
}

/// A single applied transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectAtom {
    /// A card moved between zones.
    Move { id: InstanceId, from: Zone, to: Zone },

    /// The pool changed by `delta` of `element`.
    Resource { element: Element, delta: i64 },
}

impl EffectAtom {
    /// The card, source and destination of a move atom.
    #[must_use]
    pub fn as_move(&self) -> Option<(InstanceId, Zone, Zone)> {
        match *self {
            EffectAtom::Move { id, from, to } => Some((id, from, to)),
            EffectAtom::Resource { .. } => None,
        }
    }
}

impl std::fmt::Display for EffectAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectAtom::Move { id, from, to } => write!(f, "move {id} {from} -> {to}"),
            EffectAtom::Resource { element, delta } => write!(f, "{element} {delta:+}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_move() {
        let atom = EffectAtom::Move {
            id: InstanceId(2),
            from: Zone::Deck,
            to: Zone::Hand,
        };
        assert_eq!(atom.as_move(), Some((InstanceId(2), Zone::Deck, Zone::Hand)));

        let resource = EffectAtom::Resource {
            element: Element::Holy,
            delta: 1,
        };
        assert_eq!(resource.as_move(), None);
    }

    #[test]
    fn test_atom_display() {
        let atom = EffectAtom::Move {
            id: InstanceId(2),
            from: Zone::Field,
            to: Zone::Graveyard,
        };
        assert_eq!(atom.to_string(), "move #2 Field -> GY");

        let resource = EffectAtom::Resource {
            element: Element::Fire,
            delta: -2,
        };
        assert_eq!(resource.to_string(), "Fire -2");
    }
}
