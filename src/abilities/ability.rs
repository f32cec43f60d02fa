//! Ability definitions.
//!
//! An `Ability` is either activated by the player or triggered by a card
//! moving between zones. Both carry a name (unique per card, the key of the
//! instance's usage counter), a usage limit and an ordered effect list.
//!
//! Abilities are built with a small builder:
//!
//! ```
//! use rust_ccg_cascade::abilities::{Ability, SelectionSpec, UsageLimit, ZoneRequirement};
//! use rust_ccg_cascade::core::{Element, ResourceCost, Zone};
//! use rust_ccg_cascade::effects::{CardCriterion, Effect};
//!
//! let banish = Ability::activated("Banish", UsageLimit::Times(1))
//!     .from_zone(ZoneRequirement::In(Zone::Field))
//!     .with_cost(ResourceCost::free().with(Element::Dark, 1))
//!     .with_selection(SelectionSpec::Card(vec![CardCriterion::InZone(Zone::Field)]))
//!     .with_effect(Effect::MoveSelected { to: Zone::Removed })
//!     .build();
//!
//! let echo = Ability::triggered("Echo", UsageLimit::Unlimited, Zone::Graveyard)
//!     .from_zone(Zone::Field)
//!     .with_effect(Effect::Draw)
//!     .build();
//!
//! assert!(banish.is_activated());
//! assert!(!echo.is_activated());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Element, ResourceCost, Zone};
use crate::effects::{CardCriterion, Effect};

/// How many times an ability may be used per game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageLimit {
    /// At most this many uses.
    Times(u32),
    /// No limit.
    Unlimited,
}

impl UsageLimit {
    /// Check whether another use is allowed after `used` uses.
    #[must_use]
    pub fn allows(self, used: u32) -> bool {
        match self {
            UsageLimit::Times(limit) => used < limit,
            UsageLimit::Unlimited => true,
        }
    }
}

/// Where the acting card must be for an activated ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneRequirement {
    /// Usable from any zone.
    #[default]
    Any,
    /// Usable only from this zone.
    In(Zone),
}

impl ZoneRequirement {
    /// Check whether a card in `zone` satisfies the requirement.
    #[must_use]
    pub fn admits(self, zone: Zone) -> bool {
        match self {
            ZoneRequirement::Any => true,
            ZoneRequirement::In(required) => required == zone,
        }
    }
}

/// What the player must choose when activating.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionSpec {
    /// A card satisfying every criterion.
    Card(Vec<CardCriterion>),
    /// An element. An empty list admits every element.
    Element(Vec<Element>),
}

impl SelectionSpec {
    /// Check whether an element is a legal choice.
    ///
    /// Always false for card selections.
    #[must_use]
    pub fn admits_element(&self, element: Element) -> bool {
        match self {
            SelectionSpec::Card(_) => false,
            SelectionSpec::Element(allowed) => allowed.is_empty() || allowed.contains(&element),
        }
    }
}

/// A predicate over the game state that must hold for activation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateCheck {
    /// The zone holds at least `count` cards.
    ZoneSizeAtLeast { zone: Zone, count: usize },

    /// The zone holds at most `count` cards.
    ZoneSizeAtMost { zone: Zone, count: usize },

    /// The pool holds at least `amount` of `element`.
    ResourceAtLeast { element: Element, amount: u32 },

    /// Evaluated by the game through `ConditionHooks`.
    Custom(String),
}

/// An ability the player chooses to use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedAbility {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub limit: UsageLimit,
    #[serde(default)]
    pub source: ZoneRequirement,
    #[serde(default)]
    pub cost: ResourceCost,
    #[serde(default)]
    pub selection: Option<SelectionSpec>,
    #[serde(default)]
    pub state_checks: Vec<StateCheck>,
    pub effects: Vec<Effect>,
}

impl ActivatedAbility {
    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Restrict the zone the card must be in.
    #[must_use]
    pub fn from_zone(mut self, source: ZoneRequirement) -> Self {
        self.source = source;
        self
    }

    /// Set the resource cost.
    #[must_use]
    pub fn with_cost(mut self, cost: ResourceCost) -> Self {
        self.cost = cost;
        self
    }

    /// Require a selection.
    #[must_use]
    pub fn with_selection(mut self, selection: SelectionSpec) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Add a state check.
    #[must_use]
    pub fn with_check(mut self, check: StateCheck) -> Self {
        self.state_checks.push(check);
        self
    }

    /// Append an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Ability {
        Ability::Activated(self)
    }

    /// Criteria of the card selection, if the ability takes one.
    #[must_use]
    pub fn card_criteria(&self) -> Option<&[CardCriterion]> {
        match &self.selection {
            Some(SelectionSpec::Card(criteria)) => Some(criteria.as_slice()),
            _ => None,
        }
    }
}

/// An ability that fires when its card moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredAbility {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub limit: UsageLimit,
    /// Source zone of the move. `None` matches any source.
    #[serde(default)]
    pub from: Option<Zone>,
    /// Destination zone of the move.
    pub to: Zone,
    pub effects: Vec<Effect>,
}

impl TriggeredAbility {
    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Only fire for moves out of `zone`.
    #[must_use]
    pub fn from_zone(mut self, zone: Zone) -> Self {
        self.from = Some(zone);
        self
    }

    /// Append an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Ability {
        Ability::Triggered(self)
    }

    /// Check whether a move from `from` to `to` fires this trigger.
    #[must_use]
    pub fn fires_on(&self, from: Zone, to: Zone) -> bool {
        self.to == to && self.from.map_or(true, |required| required == from)
    }
}

/// A card ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Activated(ActivatedAbility),
    Triggered(TriggeredAbility),
}

impl Ability {
    /// Start building an activated ability.
    #[must_use]
    pub fn activated(name: impl Into<String>, limit: UsageLimit) -> ActivatedAbility {
        ActivatedAbility {
            name: name.into(),
            description: String::new(),
            limit,
            source: ZoneRequirement::Any,
            cost: ResourceCost::free(),
            selection: None,
            state_checks: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Start building a triggered ability that fires on moves into `to`.
    #[must_use]
    pub fn triggered(name: impl Into<String>, limit: UsageLimit, to: Zone) -> TriggeredAbility {
        TriggeredAbility {
            name: name.into(),
            description: String::new(),
            limit,
            from: None,
            to,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Ability::Activated(a) => &a.name,
            Ability::Triggered(t) => &t.name,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Ability::Activated(a) => &a.description,
            Ability::Triggered(t) => &t.description,
        }
    }

    #[must_use]
    pub fn limit(&self) -> UsageLimit {
        match self {
            Ability::Activated(a) => a.limit,
            Ability::Triggered(t) => t.limit,
        }
    }

    #[must_use]
    pub fn effects(&self) -> &[Effect] {
        match self {
            Ability::Activated(a) => &a.effects,
            Ability::Triggered(t) => &t.effects,
        }
    }

    #[must_use]
    pub fn is_activated(&self) -> bool {
        matches!(self, Ability::Activated(_))
    }

    #[must_use]
    pub fn as_activated(&self) -> Option<&ActivatedAbility> {
        match self {
            Ability::Activated(a) => Some(a),
            Ability::Triggered(_) => None,
        }
    }

    #[must_use]
    pub fn as_triggered(&self) -> Option<&TriggeredAbility> {
        match self {
            Ability::Activated(_) => None,
            Ability::Triggered(t) => Some(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_limit() {
        assert!(UsageLimit::Times(1).allows(0));
        assert!(!UsageLimit::Times(1).allows(1));
        assert!(!UsageLimit::Times(0).allows(0));
        assert!(UsageLimit::Unlimited.allows(u32::MAX));
    }

    #[test]
    fn test_zone_requirement() {
        assert!(ZoneRequirement::Any.admits(Zone::Removed));
        assert!(ZoneRequirement::In(Zone::Hand).admits(Zone::Hand));
        assert!(!ZoneRequirement::In(Zone::Hand).admits(Zone::Field));
    }

    #[test]
    fn test_element_selection() {
        let any = SelectionSpec::Element(vec![]);
        let fire_only = SelectionSpec::Element(vec![Element::Fire]);
        let card = SelectionSpec::Card(vec![]);

        assert!(any.admits_element(Element::Water));
        assert!(fire_only.admits_element(Element::Fire));
        assert!(!fire_only.admits_element(Element::Water));
        assert!(!card.admits_element(Element::Fire));
    }

    #[test]
    fn test_trigger_fires_on() {
        let any_source = TriggeredAbility {
            name: "T".to_string(),
            description: String::new(),
            limit: UsageLimit::Unlimited,
            from: None,
            to: Zone::Graveyard,
            effects: vec![],
        };
        let from_field = any_source.clone().from_zone(Zone::Field);

        assert!(any_source.fires_on(Zone::Deck, Zone::Graveyard));
        assert!(!any_source.fires_on(Zone::Graveyard, Zone::Hand));
        assert!(from_field.fires_on(Zone::Field, Zone::Graveyard));
        assert!(!from_field.fires_on(Zone::Hand, Zone::Graveyard));
    }

    #[test]
    fn test_accessors() {
        let ability = Ability::activated("Rush", UsageLimit::Times(2))
            .with_description("Summon it")
            .with_effect(Effect::SummonThis)
            .build();

        assert_eq!(ability.name(), "Rush");
        assert_eq!(ability.description(), "Summon it");
        assert_eq!(ability.limit(), UsageLimit::Times(2));
        assert_eq!(ability.effects(), &[Effect::SummonThis]);
        assert!(ability.as_activated().is_some());
        assert!(ability.as_triggered().is_none());
    }

    #[test]
    fn test_card_criteria() {
        let criteria = vec![CardCriterion::InZone(Zone::Graveyard)];
        let ability = Ability::activated("Revive", UsageLimit::Unlimited)
            .with_selection(SelectionSpec::Card(criteria.clone()));

        assert_eq!(ability.card_criteria(), Some(criteria.as_slice()));
        assert_eq!(
            Ability::activated("Plain", UsageLimit::Unlimited).card_criteria(),
            None
        );
    }
}
