//! Trigger discovery.
//!
//! Triggers watch card moves. For every move atom, each triggered ability
//! of the moved card whose `to` matches the destination (and whose `from`,
//! if set, matches the source) becomes a `PendingTrigger`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, InstanceId, Result};
use crate::effects::EffectAtom;

/// A triggered ability waiting to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingTrigger {
    /// The card owning the ability.
    pub card: InstanceId,
    /// The ability name.
    pub ability: String,
}

impl PendingTrigger {
    /// Create a pending trigger.
    pub fn new(card: InstanceId, ability: impl Into<String>) -> Self {
        Self {
            card,
            ability: ability.into(),
        }
    }
}

/// Find every trigger fired by `atoms`, in atom order.
///
/// Within one atom, triggers follow the card's ability order. Resource
/// atoms never fire triggers.
pub fn discover(state: &GameState, atoms: &[EffectAtom]) -> Result<Vec<PendingTrigger>> {
    let mut found = Vec::new();

    for (id, from, to) in atoms.iter().filter_map(EffectAtom::as_move) {
        let card = state.card_by_id(id)?;
        for trigger in card
            .definition
            .abilities
            .iter()
            .filter_map(|ability| ability.as_triggered())
            .filter(|trigger| trigger.fires_on(from, to))
        {
            debug!(card = %id, ability = %trigger.name, %from, %to, "trigger discovered");
            found.push(PendingTrigger::new(id, trigger.name.clone()));
        }
    }

    Ok(found)
}
