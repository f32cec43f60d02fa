//! The resolution state machine.
//!
//! A `Cascade` resolves one ability and every trigger it sets off:
//!
//! 1. `ResolvingPrimary`: pay the cost, thread the ability's effects, and
//!    discover triggers from the resulting atoms
//! 2. `DrainingTriggers`: resolve one pending trigger per step, discovering
//!    further triggers from only the atoms it produced
//! 3. `Settled`: count the move, append the atoms to the log and record the
//!    ability's use
//!
//! The cascade works on its own copy of the state. If any step fails the
//! caller's state is unaffected.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::abilities::{AbilityContext, Selections};
use crate::cards::CardPatch;
use crate::core::{EngineConfig, EngineError, GameState, InstanceId, Result};
use crate::effects::{apply_atom, thread_effects, EffectAtom};
use crate::triggers::{discover, PendingTrigger, PendingTriggers};

/// Where a cascade is in its resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionPhase {
    ResolvingPrimary,
    DrainingTriggers,
    Settled,
}

/// Outcome of a settled resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The state after settlement.
    pub state: GameState,
    /// Atoms applied by this resolution, in order. Also appended to the log.
    pub atoms: Vec<EffectAtom>,
    /// Triggered abilities that resolved during the cascade.
    pub triggers_resolved: usize,
}

/// A resolution in progress.
///
/// ## Usage
///
/// ```
/// use std::sync::Arc;
/// use rust_ccg_cascade::abilities::{Ability, Selections, UsageLimit};
/// use rust_ccg_cascade::cards::{CardDefinition, CardId};
/// use rust_ccg_cascade::core::{EngineConfig, GameState, Zone};
/// use rust_ccg_cascade::effects::Effect;
/// use rust_ccg_cascade::stack::{Cascade, ResolutionPhase};
///
/// let def = CardDefinition::new(CardId::new(1), "Scout").with_ability(
///     Ability::activated("Rush", UsageLimit::Unlimited)
///         .with_effect(Effect::SummonThis)
///         .build(),
/// );
/// let (state, id) = GameState::new().spawn_card(Arc::new(def), Zone::Hand);
///
/// let mut cascade =
///     Cascade::new(&state, id, "Rush", Selections::none(), &EngineConfig::default()).unwrap();
/// assert_eq!(cascade.step().unwrap(), ResolutionPhase::DrainingTriggers);
/// assert_eq!(cascade.step().unwrap(), ResolutionPhase::Settled);
///
/// let resolution = cascade.finish().unwrap();
/// assert_eq!(resolution.state.zone_of(id).unwrap(), Zone::Field);
/// assert_eq!(resolution.state.moves(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cascade {
    phase: ResolutionPhase,
    card: InstanceId,
    ability: String,
    activated: bool,
    selections: Selections,
    state: GameState,
    atoms: Vec<EffectAtom>,
    pending: PendingTriggers,
    triggers_resolved: usize,
    max_steps: usize,
}

impl Cascade {
    /// Prepare to resolve `ability` on `card`.
    ///
    /// Fails if the card or the ability does not exist. No gate checks are
    /// made here.
    pub fn new(
        state: &GameState,
        card: InstanceId,
        ability: &str,
        selections: Selections,
        config: &EngineConfig,
    ) -> Result<Self> {
        let ctx = AbilityContext::resolve(state, card, ability)?;
        Ok(Self {
            phase: ResolutionPhase::ResolvingPrimary,
            card,
            ability: ability.to_string(),
            activated: ctx.ability.is_activated(),
            selections,
            state: state.clone(),
            atoms: Vec::new(),
            pending: PendingTriggers::new(config.trigger_order),
            triggers_resolved: 0,
            max_steps: config.max_cascade_steps,
        })
    }

    #[must_use]
    pub fn phase(&self) -> ResolutionPhase {
        self.phase
    }

    /// The working state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Atoms applied so far.
    #[must_use]
    pub fn atoms(&self) -> &[EffectAtom] {
        &self.atoms
    }

    /// Number of triggers waiting to resolve.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Advance by one step and return the new phase.
    ///
    /// Stepping a settled cascade does nothing.
    pub fn step(&mut self) -> Result<ResolutionPhase> {
        match self.phase {
            ResolutionPhase::ResolvingPrimary => {
                self.resolve_primary()?;
                self.enter(ResolutionPhase::DrainingTriggers);
            }
            ResolutionPhase::DrainingTriggers => match self.pending.pop() {
                Some(trigger) => self.resolve_trigger(&trigger)?,
                None => {
                    self.settle()?;
                    self.enter(ResolutionPhase::Settled);
                }
            },
            ResolutionPhase::Settled => {}
        }
        Ok(self.phase)
    }

    /// Step until settled.
    pub fn run(mut self) -> Result<Resolution> {
        while self.phase != ResolutionPhase::Settled {
            self.step()?;
        }
        self.finish()
    }

    /// Extract the outcome of a settled cascade.
    pub fn finish(self) -> Result<Resolution> {
        if self.phase != ResolutionPhase::Settled {
            return Err(EngineError::InvariantViolation(format!(
                "resolution of \"{}\" finished in phase {:?}",
                self.ability, self.phase
            )));
        }
        Ok(Resolution {
            state: self.state,
            atoms: self.atoms,
            triggers_resolved: self.triggers_resolved,
        })
    }

    fn enter(&mut self, phase: ResolutionPhase) {
        debug!(card = %self.card, ability = %self.ability, ?phase, "resolution phase");
        self.phase = phase;
    }

    fn resolve_primary(&mut self) -> Result<()> {
        let cost = {
            let ctx = AbilityContext::resolve(&self.state, self.card, &self.ability)?;
            ctx.ability.as_activated().map(|a| a.cost.clone())
        };

        if let Some(cost) = cost {
            // Fail with the shortfall before any atom is applied
            self.state.pool().pay(&cost)?;
            for (element, amount) in cost.iter() {
                let atom = EffectAtom::Resource {
                    element,
                    delta: -i64::from(amount),
                };
                self.state = apply_atom(&self.state, &atom)?;
                self.atoms.push(atom);
            }
        }

        let (state, produced) =
            thread_effects(&self.state, self.card, &self.ability, &self.selections)?;
        self.state = state;
        self.pending.extend(discover(&self.state, &produced)?);
        self.atoms.extend(produced);
        Ok(())
    }

    fn resolve_trigger(&mut self, trigger: &PendingTrigger) -> Result<()> {
        let allowed = {
            let ctx = AbilityContext::resolve(&self.state, trigger.card, &trigger.ability)?;
            ctx.ability.limit().allows(ctx.card.usage(&trigger.ability))
        };
        if !allowed {
            debug!(card = %trigger.card, ability = %trigger.ability, "trigger skipped, usage limit reached");
            return Ok(());
        }

        if self.triggers_resolved >= self.max_steps {
            warn!(limit = self.max_steps, ability = %self.ability, "trigger cascade overflow");
            return Err(EngineError::CascadeOverflow {
                limit: self.max_steps,
            });
        }
        self.triggers_resolved += 1;

        let (state, produced) =
            thread_effects(&self.state, trigger.card, &trigger.ability, &Selections::none())?;
        self.state = record_use(&state, trigger.card, &trigger.ability)?;
        self.pending.extend(discover(&self.state, &produced)?);
        self.atoms.extend(produced);
        Ok(())
    }

    fn settle(&mut self) -> Result<()> {
        let mut state = record_use(&self.state, self.card, &self.ability)?;
        if self.activated {
            state.bump_moves();
        }
        state.extend_log(self.atoms.iter().copied());
        self.state = state;
        Ok(())
    }
}

/// Increment an ability's usage counter on the current copy of the card.
fn record_use(state: &GameState, card: InstanceId, ability: &str) -> Result<GameState> {
    let used = state.card_by_id(card)?.usage(ability);
    state.mutate_card(card, &CardPatch::new().with_usage(ability, used + 1))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::abilities::{Ability, UsageLimit};
    use crate::cards::{CardDefinition, CardId};
    use crate::core::{Element, ResourceCost, ResourcePool, Zone};
    use crate::effects::Effect;

    fn echo_card() -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new(CardId::new(1), "Echo")
                .with_ability(
                    Ability::activated("Toss", UsageLimit::Unlimited)
                        .with_cost(ResourceCost::free().with(Element::Fire, 1))
                        .with_effect(Effect::MoveThis { to: Zone::Graveyard })
                        .build(),
                )
                .with_ability(
                    Ability::triggered("Refill", UsageLimit::Unlimited, Zone::Graveyard)
                        .with_effect(Effect::Draw)
                        .build(),
                ),
        )
    }

    fn setup(fire: u32) -> (GameState, InstanceId) {
        let base = GameState::new().with_pool(ResourcePool::empty().with(Element::Fire, fire));
        let (state, echo) = base.spawn_card(echo_card(), Zone::Hand);
        let filler = Arc::new(CardDefinition::new(CardId::new(2), "Filler"));
        let (state, _) = state.spawn_card(filler, Zone::Deck);
        (state, echo)
    }

    #[test]
    fn test_phases_in_order() {
        let (state, echo) = setup(1);
        let mut cascade =
            Cascade::new(&state, echo, "Toss", Selections::none(), &EngineConfig::default()).unwrap();

        assert_eq!(cascade.phase(), ResolutionPhase::ResolvingPrimary);
        assert_eq!(cascade.step().unwrap(), ResolutionPhase::DrainingTriggers);
        assert_eq!(cascade.pending(), 1);

        // Resolve the trigger, then settle
        assert_eq!(cascade.step().unwrap(), ResolutionPhase::DrainingTriggers);
        assert_eq!(cascade.pending(), 0);
        assert_eq!(cascade.step().unwrap(), ResolutionPhase::Settled);
        assert_eq!(cascade.step().unwrap(), ResolutionPhase::Settled);
    }

    #[test]
    fn test_cost_paid_as_atoms() {
        let (state, echo) = setup(1);
        let resolution = Cascade::new(&state, echo, "Toss", Selections::none(), &EngineConfig::default())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(
            resolution.atoms[0],
            EffectAtom::Resource {
                element: Element::Fire,
                delta: -1,
            }
        );
        assert_eq!(resolution.atoms.len(), 3);
        assert_eq!(resolution.state.pool().get(Element::Fire), 0);
        assert_eq!(resolution.triggers_resolved, 1);
    }

    #[test]
    fn test_unaffordable_cost() {
        let (state, echo) = setup(0);
        let err = Cascade::new(&state, echo, "Toss", Selections::none(), &EngineConfig::default())
            .unwrap()
            .run()
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::InsufficientResource {
                element: Element::Fire,
                required: 1,
                available: 0,
            }
        );
    }

    #[test]
    fn test_settlement_bookkeeping() {
        let (state, echo) = setup(1);
        let resolution = Cascade::new(&state, echo, "Toss", Selections::none(), &EngineConfig::default())
            .unwrap()
            .run()
            .unwrap();
        let card = resolution.state.card_by_id(echo).unwrap();

        assert_eq!(resolution.state.moves(), 1);
        assert_eq!(card.usage("Toss"), 1);
        assert_eq!(card.usage("Refill"), 1);
        assert_eq!(resolution.state.log().len(), resolution.atoms.len());
    }

    #[test]
    fn test_trigger_only_resolution_is_not_a_move() {
        let (state, echo) = setup(0);
        let resolution = Cascade::new(&state, echo, "Refill", Selections::none(), &EngineConfig::default())
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(resolution.state.moves(), 0);
        assert_eq!(resolution.state.zone(Zone::Hand).len(), 2);
    }

    #[test]
    fn test_finish_before_settled() {
        let (state, echo) = setup(1);
        let cascade =
            Cascade::new(&state, echo, "Toss", Selections::none(), &EngineConfig::default()).unwrap();
        assert!(matches!(
            cascade.finish(),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_unknown_ability() {
        let (state, echo) = setup(1);
        let err = Cascade::new(&state, echo, "Nope", Selections::none(), &EngineConfig::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownAbility { .. }));
    }
}
