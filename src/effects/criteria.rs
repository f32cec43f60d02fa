//! Card criteria.
//!
//! A criteria list is a conjunction: a card matches when every criterion
//! holds. The empty list matches every card.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, Tag};
use crate::core::{GameState, Result, Zone};

/// A predicate over a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCriterion {
    /// The card is currently in this zone.
    InZone(Zone),

    /// The card's definition carries this tag.
    HasTag(Tag),

    /// The card's definition has exactly this name.
    NameIs(String),
}

impl CardCriterion {
    fn holds(&self, zone: Zone, card: &CardInstance) -> bool {
        match self {
            CardCriterion::InZone(required) => *required == zone,
            CardCriterion::HasTag(tag) => card.definition.has_tag(tag),
            CardCriterion::NameIs(name) => card.name() == name,
        }
    }
}

/// Check whether a card satisfies every criterion.
///
/// Fails with `NotFound` if the card is not in `state`.
pub fn matches(state: &GameState, card: &CardInstance, criteria: &[CardCriterion]) -> Result<bool> {
    let zone = state.zone_of(card.id)?;
    Ok(criteria.iter().all(|c| c.holds(zone, card)))
}

/// Every card satisfying the criteria, in zone scan order.
#[must_use]
pub fn cards_matching<'s>(state: &'s GameState, criteria: &[CardCriterion]) -> Vec<&'s CardInstance> {
    located_matching(state, criteria).map(|(_, card)| card).collect()
}

/// Matching cards paired with their zone, in scan order.
pub(crate) fn located_matching<'s, 'c>(
    state: &'s GameState,
    criteria: &'c [CardCriterion],
) -> impl Iterator<Item = (Zone, &'s CardInstance)> + 'c
where
    's: 'c,
{
    state
        .zones
        .iter()
        .filter(move |(zone, card)| criteria.iter().all(|c| c.holds(*zone, card)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::{EngineError, InstanceId};

    fn setup() -> GameState {
        let eggs = Arc::new(CardDefinition::new(CardId::new(1), "Egg").with_tag("Eggs"));
        let tears = Arc::new(CardDefinition::new(CardId::new(2), "Tear").with_tag("Tears"));

        let state = GameState::new();
        let (state, _) = state.spawn_card(Arc::clone(&eggs), Zone::Deck);
        let (state, _) = state.spawn_card(Arc::clone(&tears), Zone::Deck);
        let (state, _) = state.spawn_card(eggs, Zone::Hand);
        let (state, _) = state.spawn_card(tears, Zone::Graveyard);
        state
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let state = setup();
        let all = cards_matching(&state, &[]);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_conjunction() {
        let state = setup();
        let criteria = [
            CardCriterion::InZone(Zone::Deck),
            CardCriterion::HasTag(Tag::new("Eggs")),
        ];

        let found: Vec<_> = cards_matching(&state, &criteria)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(found, vec![InstanceId(0)]);
    }

    #[test]
    fn test_scan_order() {
        let state = setup();
        let found: Vec<_> = cards_matching(&state, &[CardCriterion::NameIs("Tear".to_string())])
            .iter()
            .map(|c| c.id)
            .collect();
        // Deck before Graveyard
        assert_eq!(found, vec![InstanceId(1), InstanceId(3)]);
    }

    #[test]
    fn test_results_outlive_criteria() {
        let state = setup();
        let found = {
            let criteria = vec![CardCriterion::HasTag(Tag::new("Eggs"))];
            cards_matching(&state, &criteria)
        };
        let ids: Vec<_> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![InstanceId(0), InstanceId(2)]);
    }

    #[test]
    fn test_matches_single_card() {
        let state = setup();
        let card = state.card_by_id(InstanceId(2)).unwrap();

        assert!(matches(&state, card, &[CardCriterion::InZone(Zone::Hand)]).unwrap());
        assert!(!matches(&state, card, &[CardCriterion::HasTag(Tag::new("Tears"))]).unwrap());
    }

    #[test]
    fn test_matches_card_from_other_state() {
        let state = setup();
        let def = Arc::new(CardDefinition::new(CardId::new(9), "X"));
        let mut stranger = GameState::new();
        for _ in 0..5 {
            stranger = stranger.spawn_card(Arc::clone(&def), Zone::Hand).0;
        }
        let card = stranger.card_by_id(InstanceId(4)).unwrap();

        let err = matches(&state, card, &[]).unwrap_err();
        assert_eq!(err, EngineError::NotFound(InstanceId(4)));
    }
}
