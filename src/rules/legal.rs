//! Legal activation enumeration.
//!
//! Lists everything the player could do right now, for a UI or an AI
//! driving the engine. Each entry names a card, an ability the gate
//! approves, and the legal choices for its selection.

use crate::abilities::{self, AbilityContext, SelectionSpec, Selections};
use crate::core::{Element, GameState, InstanceId};
use crate::effects::cards_matching;
use crate::stack::Engine;

/// Legal choices for an ability's selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Targets {
    /// The ability takes no selection.
    None,
    /// Any of these cards, in zone scan order.
    Cards(Vec<InstanceId>),
    /// Any of these elements.
    Elements(Vec<Element>),
}

/// An ability the player may activate now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub card: InstanceId,
    pub ability: String,
    pub targets: Targets,
}

impl Activation {
    /// Every concrete `Selections` this activation can be made with.
    #[must_use]
    pub fn selections(&self) -> Vec<Selections> {
        match &self.targets {
            Targets::None => vec![Selections::none()],
            Targets::Cards(ids) => ids.iter().map(|&id| Selections::none().with_card(id)).collect(),
            Targets::Elements(elements) => elements
                .iter()
                .map(|&e| Selections::none().with_element(e))
                .collect(),
        }
    }
}

/// Every activation the gate approves, cards in zone scan order and
/// abilities in printed order.
#[must_use]
pub fn legal_activations(engine: &Engine<'_>, state: &GameState) -> Vec<Activation> {
    let mut legal = Vec::new();

    for (_, instance) in state.zones.iter() {
        for ability in instance.definition.abilities.iter().filter(|a| a.is_activated()) {
            let ctx = AbilityContext {
                state,
                card: instance,
                ability,
            };
            if abilities::check(&ctx, engine.hooks()).is_err() {
                continue;
            }
            let targets = match ability.as_activated().and_then(|a| a.selection.as_ref()) {
                None => Targets::None,
                Some(SelectionSpec::Card(criteria)) => {
                    Targets::Cards(cards_matching(state, criteria).iter().map(|c| c.id).collect())
                }
                Some(spec @ SelectionSpec::Element(_)) => Targets::Elements(
                    Element::ALL
                        .iter()
                        .copied()
                        .filter(|&e| spec.admits_element(e))
                        .collect(),
                ),
            };
            legal.push(Activation {
                card: instance.id,
                ability: ability.name().to_string(),
                targets,
            });
        }
    }

    legal
}
