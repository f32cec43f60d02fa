//! Game setup and drawing.

use std::sync::Arc;

use crate::cards::{CardDefinition, CardInstance};
use crate::core::{
    shuffle, EngineConfig, EngineError, GameState, InstanceId, RandomSource, Result, Zone,
};

/// Start a game from a decklist.
///
/// Cards are instantiated with ids `0..n` in decklist order, the Deck is
/// shuffled with `rng`, and `config.starting_hand_size` cards are drawn.
/// The opening draw is not logged and does not count as a move.
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::cards::{CardDefinition, CardId};
/// use rust_ccg_cascade::core::{EngineConfig, GameRng, Zone};
/// use rust_ccg_cascade::rules::start_game;
///
/// let card = Arc::new(CardDefinition::new(CardId::new(1), "Filler"));
/// let decklist = vec![card; 8];
///
/// let state = start_game(&decklist, &EngineConfig::default(), &mut GameRng::new(7)).unwrap();
/// assert_eq!(state.zone(Zone::Hand).len(), 5);
/// assert_eq!(state.zone(Zone::Deck).len(), 3);
/// ```
pub fn start_game(
    decklist: &[Arc<CardDefinition>],
    config: &EngineConfig,
    rng: &mut impl RandomSource,
) -> Result<GameState> {
    let mut deck = decklist
        .iter()
        .enumerate()
        .map(|(index, definition)| {
            let id = u32::try_from(index).map_err(|_| {
                EngineError::InvariantViolation(format!("decklist too large: {}", decklist.len()))
            })?;
            Ok(CardInstance::new(InstanceId(id), Arc::clone(definition)))
        })
        .collect::<Result<Vec<_>>>()?;

    shuffle(&mut deck, rng);

    let mut state = GameState::from_deck(deck)?;
    for _ in 0..config.starting_hand_size {
        state = draw_card(&state)?;
    }
    Ok(state)
}

/// Move the top card of the Deck to the Hand.
///
/// With an empty Deck the state is returned unchanged.
pub fn draw_card(state: &GameState) -> Result<GameState> {
    match state.zone(Zone::Deck).front() {
        Some(top) => state.move_card(top.id, Zone::Hand),
        None => Ok(state.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::{GameRng, ScriptedSource};

    fn decklist(names: &[&str]) -> Vec<Arc<CardDefinition>> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Arc::new(CardDefinition::new(CardId::new(i as i32), *name)))
            .collect()
    }

    fn names(state: &GameState, zone: Zone) -> Vec<String> {
        state.zone(zone).iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_start_game_identity_shuffle() {
        let decklist = decklist(&["A", "B", "C", "D", "E", "F", "G"]);
        let state =
            start_game(&decklist, &EngineConfig::default(), &mut ScriptedSource::identity()).unwrap();

        assert_eq!(names(&state, Zone::Hand), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(names(&state, Zone::Deck), vec!["F", "G"]);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.next_id(), InstanceId(7));
        assert!(state.log().is_empty());
    }

    #[test]
    fn test_start_game_short_deck() {
        let decklist = decklist(&["A", "B"]);
        let state =
            start_game(&decklist, &EngineConfig::default(), &mut ScriptedSource::identity()).unwrap();

        assert_eq!(names(&state, Zone::Hand), vec!["A", "B"]);
        assert!(state.zone(Zone::Deck).is_empty());
    }

    #[test]
    fn test_start_game_is_seeded() {
        let decklist = decklist(&["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]);
        let config = EngineConfig::default().with_starting_hand_size(0);

        let a = start_game(&decklist, &config, &mut GameRng::new(3)).unwrap();
        let b = start_game(&decklist, &config, &mut GameRng::new(3)).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.card_count(), 10);
    }

    #[test]
    fn test_draw_card() {
        let decklist = decklist(&["A", "B"]);
        let config = EngineConfig::default().with_starting_hand_size(0);
        let state = start_game(&decklist, &config, &mut ScriptedSource::identity()).unwrap();

        let once = draw_card(&state).unwrap();
        assert_eq!(names(&once, Zone::Hand), vec!["A"]);

        let twice = draw_card(&once).unwrap();
        let thrice = draw_card(&twice).unwrap();
        assert_eq!(twice, thrice);
    }
}
