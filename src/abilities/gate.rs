//! Activation gate.
//!
//! The gate decides whether an ability may be activated right now. Checks
//! run in a fixed order and the first failure is reported:
//!
//! 1. The ability is activated, not triggered
//! 2. Its usage count is below the limit
//! 3. The card is in the required zone
//! 4. The pool covers the cost, element by element
//! 5. Every state check holds
//! 6. A card selection has at least one legal target
//!
//! Custom state checks are evaluated by the game through `ConditionHooks`.
//! Without a hook they fail.

use thiserror::Error;

use super::ability::{StateCheck, ZoneRequirement};
use super::context::AbilityContext;
use crate::core::{Element, Zone};
use crate::effects::cards_matching;

/// Why the gate refused an activation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GateRejection {
    #[error("triggered abilities cannot be activated")]
    NotActivated,

    #[error("usage limit reached")]
    UsageLimitReached,

    #[error("card must be in {required} but is in {actual}")]
    WrongZone { required: Zone, actual: Zone },

    #[error("card is not in any zone")]
    CardMissing,

    #[error("cost needs {required} {element}, pool has {available}")]
    InsufficientResource {
        element: Element,
        required: u32,
        available: u32,
    },

    #[error("state check failed: {0:?}")]
    StateCheckFailed(StateCheck),

    #[error("no legal target for the selection")]
    NoLegalTargets,
}

/// Game-provided evaluation of `StateCheck::Custom`.
///
/// ```
/// use rust_ccg_cascade::abilities::ConditionHooks;
///
/// let hooks = ConditionHooks::new()
///     .with_custom_check(|name, ctx| name == "HandNotEmpty" && ctx.card.usage("Rush") == 0);
/// # let _ = hooks;
/// ```
pub struct ConditionHooks<'a> {
    /// Evaluate a named custom check.
    pub eval_custom: Box<dyn Fn(&str, &AbilityContext<'_>) -> bool + 'a>,
}

impl<'a> ConditionHooks<'a> {
    /// Hooks that reject every custom check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            eval_custom: Box::new(|_, _| false),
        }
    }

    /// Add a custom check evaluator.
    #[must_use]
    pub fn with_custom_check(
        mut self,
        eval: impl Fn(&str, &AbilityContext<'_>) -> bool + 'a,
    ) -> Self {
        self.eval_custom = Box::new(eval);
        self
    }
}

impl Default for ConditionHooks<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConditionHooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionHooks").finish_non_exhaustive()
    }
}

/// Run every gate check, reporting the first failure.
pub fn check(ctx: &AbilityContext<'_>, hooks: &ConditionHooks<'_>) -> Result<(), GateRejection> {
    let ability = ctx.ability.as_activated().ok_or(GateRejection::NotActivated)?;

    if !ability.limit.allows(ctx.card.usage(&ability.name)) {
        return Err(GateRejection::UsageLimitReached);
    }

    let zone = ctx
        .state
        .zone_of(ctx.card.id)
        .map_err(|_| GateRejection::CardMissing)?;
    if let ZoneRequirement::In(required) = ability.source {
        if required != zone {
            return Err(GateRejection::WrongZone {
                required,
                actual: zone,
            });
        }
    }

    if let Some((element, required, available)) = ctx.state.pool().shortfall(&ability.cost) {
        return Err(GateRejection::InsufficientResource {
            element,
            required,
            available,
        });
    }

    if let Some(failed) = ability
        .state_checks
        .iter()
        .find(|check| !state_check_holds(check, ctx, hooks))
    {
        return Err(GateRejection::StateCheckFailed(failed.clone()));
    }

    if let Some(criteria) = ability.card_criteria() {
        if cards_matching(ctx.state, criteria).is_empty() {
            return Err(GateRejection::NoLegalTargets);
        }
    }

    Ok(())
}

/// Check whether an ability may be activated.
#[must_use]
pub fn can_activate(ctx: &AbilityContext<'_>, hooks: &ConditionHooks<'_>) -> bool {
    check(ctx, hooks).is_ok()
}

fn state_check_holds(
    check: &StateCheck,
    ctx: &AbilityContext<'_>,
    hooks: &ConditionHooks<'_>,
) -> bool {
    match check {
        StateCheck::ZoneSizeAtLeast { zone, count } => ctx.state.zone(*zone).len() >= *count,
        StateCheck::ZoneSizeAtMost { zone, count } => ctx.state.zone(*zone).len() <= *count,
        StateCheck::ResourceAtLeast { element, amount } => {
            ctx.state.pool().get(*element) >= *amount
        }
        StateCheck::Custom(name) => (hooks.eval_custom)(name, ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::abilities::{Ability, SelectionSpec, UsageLimit};
    use crate::cards::{CardDefinition, CardId, CardPatch};
    use crate::core::{GameState, InstanceId, ResourceCost, ResourcePool};
    use crate::effects::{CardCriterion, Effect};

    fn spawn(state: &GameState, ability: Ability, zone: Zone) -> (GameState, InstanceId) {
        let def = CardDefinition::new(CardId::new(1), "Subject").with_ability(ability);
        state.spawn_card(Arc::new(def), zone)
    }

    fn gate(state: &GameState, id: InstanceId) -> Result<(), GateRejection> {
        let ctx = AbilityContext::resolve(state, id, "Use").unwrap();
        check(&ctx, &ConditionHooks::new())
    }

    fn basic() -> crate::abilities::ActivatedAbility {
        Ability::activated("Use", UsageLimit::Times(1)).with_effect(Effect::SummonThis)
    }

    #[test]
    fn test_basic_activation_passes() {
        let (state, id) = spawn(&GameState::new(), basic().build(), Zone::Hand);
        assert_eq!(gate(&state, id), Ok(()));
    }

    #[test]
    fn test_triggered_never_activates() {
        let trigger = Ability::triggered("Use", UsageLimit::Unlimited, Zone::Graveyard).build();
        let (state, id) = spawn(&GameState::new(), trigger, Zone::Hand);
        assert_eq!(gate(&state, id), Err(GateRejection::NotActivated));
    }

    #[test]
    fn test_usage_limit() {
        let (state, id) = spawn(&GameState::new(), basic().build(), Zone::Hand);
        let used = state
            .mutate_card(id, &CardPatch::new().with_usage("Use", 1))
            .unwrap();

        assert_eq!(gate(&used, id), Err(GateRejection::UsageLimitReached));
    }

    #[test]
    fn test_wrong_zone() {
        let ability = basic().from_zone(ZoneRequirement::In(Zone::Hand)).build();
        let (state, id) = spawn(&GameState::new(), ability, Zone::Field);

        assert_eq!(
            gate(&state, id),
            Err(GateRejection::WrongZone {
                required: Zone::Hand,
                actual: Zone::Field,
            })
        );
    }

    #[test]
    fn test_cost_is_category_wise() {
        let ability = basic()
            .with_cost(ResourceCost::free().with(Element::Water, 1))
            .build();
        let base = GameState::new().with_pool(ResourcePool::empty().with(Element::Fire, 9));
        let (state, id) = spawn(&base, ability, Zone::Hand);

        assert_eq!(
            gate(&state, id),
            Err(GateRejection::InsufficientResource {
                element: Element::Water,
                required: 1,
                available: 0,
            })
        );
    }

    #[test]
    fn test_state_checks() {
        let ability = basic()
            .with_check(StateCheck::ZoneSizeAtLeast {
                zone: Zone::Deck,
                count: 1,
            })
            .build();
        let (state, id) = spawn(&GameState::new(), ability, Zone::Hand);

        assert!(matches!(
            gate(&state, id),
            Err(GateRejection::StateCheckFailed(StateCheck::ZoneSizeAtLeast { .. }))
        ));
    }

    #[test]
    fn test_custom_check_uses_hooks() {
        let ability = basic()
            .with_check(StateCheck::Custom("Always".to_string()))
            .build();
        let (state, id) = spawn(&GameState::new(), ability, Zone::Hand);
        let ctx = AbilityContext::resolve(&state, id, "Use").unwrap();

        // Unhooked custom checks fail
        assert!(!can_activate(&ctx, &ConditionHooks::default()));

        let hooks = ConditionHooks::new().with_custom_check(|name, _| name == "Always");
        assert!(can_activate(&ctx, &hooks));
    }

    #[test]
    fn test_selection_needs_a_target() {
        let ability = basic()
            .with_selection(SelectionSpec::Card(vec![CardCriterion::InZone(Zone::Graveyard)]))
            .build();
        let (state, id) = spawn(&GameState::new(), ability, Zone::Hand);
        assert_eq!(gate(&state, id), Err(GateRejection::NoLegalTargets));

        // The acting card itself becomes a legal target once in the graveyard
        let ability = basic()
            .with_selection(SelectionSpec::Card(vec![CardCriterion::InZone(Zone::Graveyard)]))
            .build();
        let (state, id) = spawn(&GameState::new(), ability, Zone::Graveyard);
        assert_eq!(gate(&state, id), Ok(()));
    }

    #[test]
    fn test_rejection_message() {
        let rejection = GateRejection::WrongZone {
            required: Zone::Hand,
            actual: Zone::Graveyard,
        };
        assert_eq!(rejection.to_string(), "card must be in Hand but is in GY");
    }
}
