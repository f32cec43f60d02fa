//! Activation gate integration tests, run against the sample catalog.

use std::sync::Arc;

use rust_ccg_cascade::abilities::{
    can_activate, check, AbilityContext, ConditionHooks, GateRejection, Selections, StateCheck,
};
use rust_ccg_cascade::cards::CardDefinition;
use rust_ccg_cascade::core::{Element, EngineError, GameState, InstanceId, ResourcePool, Zone};
use rust_ccg_cascade::effects::{apply_atom, EffectAtom};
use rust_ccg_cascade::games::sample;
use rust_ccg_cascade::rules::{legal_activations, Targets};
use rust_ccg_cascade::stack::Engine;
use rust_ccg_cascade::triggers::discover;

fn spawn(state: &GameState, card: CardDefinition, zone: Zone) -> (GameState, InstanceId) {
    state.spawn_card(Arc::new(card), zone)
}

fn gate(state: &GameState, card: InstanceId, ability: &str) -> Result<(), GateRejection> {
    let ctx = AbilityContext::resolve(state, card, ability).unwrap();
    check(&ctx, &ConditionHooks::default())
}

#[test]
fn test_cost_must_be_affordable() {
    let (state, lantern) = spawn(&GameState::new(), sample::shoal_lantern(), Zone::Hand);

    assert_eq!(
        gate(&state, lantern, "Kindle"),
        Err(GateRejection::InsufficientResource {
            element: Element::Water,
            required: 1,
            available: 0,
        })
    );

    let funded = state.with_pool(ResourcePool::empty().with(Element::Water, 1));
    assert_eq!(gate(&funded, lantern, "Kindle"), Ok(()));
}

/// Paying the cost comes first; the summon trigger refunds it.
#[test]
fn test_cost_paid_then_refunded() {
    let (state, lantern) = spawn(&GameState::new(), sample::shoal_lantern(), Zone::Hand);
    let state = state.with_pool(ResourcePool::empty().with(Element::Water, 1));

    let resolution = Engine::default()
        .activate(&state, lantern, "Kindle", Selections::none())
        .unwrap();

    assert_eq!(
        resolution.atoms,
        vec![
            EffectAtom::Resource {
                element: Element::Water,
                delta: -1,
            },
            EffectAtom::Move {
                id: lantern,
                from: Zone::Hand,
                to: Zone::Field,
            },
            EffectAtom::Resource {
                element: Element::Water,
                delta: 1,
            },
        ]
    );
    assert_eq!(resolution.state.pool().get(Element::Water), 1);
}

#[test]
fn test_resolve_without_gate_reports_shortfall() {
    let (state, lantern) = spawn(&GameState::new(), sample::shoal_lantern(), Zone::Hand);

    let err = Engine::default()
        .resolve(&state, lantern, "Kindle", Selections::none())
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::InsufficientResource {
            element: Element::Water,
            required: 1,
            available: 0,
        }
    );
}

#[test]
fn test_wrong_zone() {
    let (state, omen) = spawn(&GameState::new(), sample::gull_omen(), Zone::Hand);

    assert_eq!(
        gate(&state, omen, "Depart"),
        Err(GateRejection::WrongZone {
            required: Zone::Field,
            actual: Zone::Hand,
        })
    );
}

#[test]
fn test_triggered_abilities_cannot_be_activated() {
    let (state, omen) = spawn(&GameState::new(), sample::gull_omen(), Zone::Field);
    assert_eq!(gate(&state, omen, "Portent"), Err(GateRejection::NotActivated));
}

#[test]
fn test_state_check_and_targets() {
    let (state, archivist) = spawn(&GameState::new(), sample::drowned_archivist(), Zone::Field);

    assert_eq!(
        gate(&state, archivist, "Dredge"),
        Err(GateRejection::StateCheckFailed(StateCheck::ZoneSizeAtLeast {
            zone: Zone::Graveyard,
            count: 1,
        }))
    );

    let (state, wreck) = spawn(&state, sample::undertow(), Zone::Graveyard);
    assert_eq!(gate(&state, archivist, "Dredge"), Ok(()));

    let legal = legal_activations(&Engine::default(), &state);
    assert_eq!(legal.len(), 1);
    assert_eq!(legal[0].targets, Targets::Cards(vec![wreck]));
}

#[test]
fn test_hand_size_cap() {
    let (mut state, omen) = spawn(&GameState::new(), sample::gull_omen(), Zone::Field);
    let ctx = AbilityContext::resolve(&state, omen, "Depart").unwrap();
    assert!(can_activate(&ctx, &ConditionHooks::default()));

    for _ in 0..7 {
        state = spawn(&state, sample::reef_scout(), Zone::Hand).0;
    }
    let ctx = AbilityContext::resolve(&state, omen, "Depart").unwrap();
    assert!(!can_activate(&ctx, &ConditionHooks::default()));
}

#[test]
fn test_banish_trigger_needs_field_origin() {
    let engine = Engine::default();
    let (state, omen) = spawn(&GameState::new(), sample::gull_omen(), Zone::Field);
    let (state, _) = spawn(&state, sample::reef_scout(), Zone::Deck);
    let (state, _) = spawn(&state, sample::reef_scout(), Zone::Deck);

    let resolution = engine.activate(&state, omen, "Depart", Selections::none()).unwrap();
    assert_eq!(resolution.triggers_resolved, 1);
    assert_eq!(resolution.state.zone(Zone::Hand).len(), 1);
    assert_eq!(resolution.state.zone(Zone::Graveyard).len(), 1);

    // Banished straight from the Hand: no trigger
    let (state, omen) = spawn(&GameState::new(), sample::gull_omen(), Zone::Hand);
    let atom = EffectAtom::Move {
        id: omen,
        from: Zone::Hand,
        to: Zone::Removed,
    };
    let moved = apply_atom(&state, &atom).unwrap();
    assert!(discover(&moved, &[atom]).unwrap().is_empty());
}
