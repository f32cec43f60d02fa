//! Effect compilation and application.
//!
//! `compile` reads the state and produces atoms; `apply_atom` performs one
//! atom. `thread_effects` chains the two over an ability's effect list so
//! every effect sees the state left by the effects before it. Two
//! consecutive `Draw`s therefore draw two different cards.

use tracing::trace;

use super::criteria::{located_matching, CardCriterion};
use super::effect::{Effect, EffectAtom, ResourceTarget};
use crate::abilities::{AbilityContext, Selections};
use crate::core::{EngineError, GameState, InstanceId, Result, Zone};

/// Compile one effect against the context's state.
///
/// A move onto the zone the card already occupies still produces its atom,
/// so triggers watching that zone fire. Applying it leaves the zone order
/// untouched.
pub fn compile(
    ctx: &AbilityContext<'_>,
    effect: &Effect,
    selections: &Selections,
) -> Result<Vec<EffectAtom>> {
    let state = ctx.state;
    let this = ctx.card.id;

    let atoms = match effect {
        Effect::SummonThis => vec![move_atom(this, state.zone_of(this)?, Zone::Field)],

        Effect::MoveThis { to } => vec![move_atom(this, state.zone_of(this)?, *to)],

        Effect::MoveSelected { to } => {
            let target = selections.card.ok_or_else(|| missing_selection(ctx))?;
            vec![move_atom(target, state.zone_of(target)?, *to)]
        }

        Effect::MoveAll { criteria, to } => located_matching(state, criteria)
            .map(|(zone, card)| move_atom(card.id, zone, *to))
            .collect(),

        Effect::Draw => from_deck(state, &[], Zone::Hand),
        Effect::DrawMatching { criteria } => from_deck(state, criteria, Zone::Hand),
        Effect::Mill => from_deck(state, &[], Zone::Graveyard),
        Effect::MillMatching { criteria } => from_deck(state, criteria, Zone::Graveyard),

        Effect::AdjustResource { element, delta } => {
            let element = match element {
                ResourceTarget::Fixed(element) => *element,
                ResourceTarget::Selected => {
                    selections.element.ok_or_else(|| missing_selection(ctx))?
                }
            };
            vec![EffectAtom::Resource {
                element,
                delta: *delta,
            }]
        }
    };

    Ok(atoms)
}

/// Apply one atom, returning the new state.
///
/// A move fails if the card is no longer in the recorded source zone. A
/// resource change fails if it would leave a negative count.
pub fn apply_atom(state: &GameState, atom: &EffectAtom) -> Result<GameState> {
    trace!(%atom, "applying atom");
    match *atom {
        EffectAtom::Move { id, from, to } => {
            let actual = state.zone_of(id)?;
            if actual != from {
                return Err(EngineError::stale_move(id, from, actual));
            }
            state.move_card(id, to)
        }
        EffectAtom::Resource { element, delta } => {
            let pool = state.pool().apply_delta(element, delta)?;
            let mut next = state.clone();
            next.set_pool(pool);
            Ok(next)
        }
    }
}

/// Compile and apply an ability's effects in order.
///
/// The acting card is re-fetched by id before each effect, since an
/// earlier effect may have moved it. Returns the final state and every
/// atom applied.
pub fn thread_effects(
    state: &GameState,
    card: InstanceId,
    ability: &str,
    selections: &Selections,
) -> Result<(GameState, Vec<EffectAtom>)> {
    let count = AbilityContext::resolve(state, card, ability)?
        .ability
        .effects()
        .len();

    let mut current = state.clone();
    let mut applied = Vec::new();

    for index in 0..count {
        let atoms = {
            let ctx = AbilityContext::resolve(&current, card, ability)?;
            match ctx.ability.effects().get(index) {
                Some(effect) => compile(&ctx, effect, selections)?,
                None => break,
            }
        };
        for atom in &atoms {
            current = apply_atom(&current, atom)?;
        }
        applied.extend(atoms);
    }

    Ok((current, applied))
}

fn move_atom(id: InstanceId, from: Zone, to: Zone) -> EffectAtom {
    EffectAtom::Move { id, from, to }
}

/// First Deck card (from the top) matching the criteria, moved to `to`.
fn from_deck(state: &GameState, criteria: &[CardCriterion], to: Zone) -> Vec<EffectAtom> {
    located_matching(state, criteria)
        .find(|(zone, _)| *zone == Zone::Deck)
        .map(|(_, card)| move_atom(card.id, Zone::Deck, to))
        .into_iter()
        .collect()
}

fn missing_selection(ctx: &AbilityContext<'_>) -> EngineError {
    EngineError::MissingSelection {
        ability: ctx.ability.name().to_string(),
    }
}
