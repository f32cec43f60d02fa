//! The "Tidewrack" starter catalog.

use crate::abilities::{Ability, SelectionSpec, StateCheck, UsageLimit, ZoneRequirement};
use crate::cards::{CardDefinition, CardId, CardRegistry, RegistryError};
use crate::core::{Element, ResourceCost, Zone};
use crate::effects::{CardCriterion, Effect, ResourceTarget};

/// Tag shared by the catalog's sea creatures.
pub const TIDE: &str = "Tide";

/// Collection numbers.
pub mod ids {
    use crate::cards::CardId;

    pub const SHOAL_LANTERN: CardId = CardId::new(101);
    pub const DROWNED_ARCHIVIST: CardId = CardId::new(102);
    pub const UNDERTOW: CardId = CardId::new(103);
    pub const REEF_SCOUT: CardId = CardId::new(104);
    pub const SILT_WALKER: CardId = CardId::new(105);
    pub const BRINE_CHALICE: CardId = CardId::new(106);
    pub const GULL_OMEN: CardId = CardId::new(107);
}

/// Pay 1 Water from the Hand to summon. When it lands on the Field, gain 1
/// Water back (once per game).
pub fn shoal_lantern() -> CardDefinition {
    CardDefinition::new(ids::SHOAL_LANTERN, "Shoal Lantern")
        .with_tag(TIDE)
        .with_ability(
            Ability::activated("Kindle", UsageLimit::Unlimited)
                .with_description("Pay 1 Water: summon this card from your hand.")
                .from_zone(ZoneRequirement::In(Zone::Hand))
                .with_cost(ResourceCost::free().with(Element::Water, 1))
                .with_effect(Effect::SummonThis)
                .build(),
        )
        .with_ability(
            Ability::triggered("Glow", UsageLimit::Times(1), Zone::Field)
                .with_description("When this card is summoned: gain 1 Water.")
                .with_effect(Effect::AdjustResource {
                    element: ResourceTarget::Fixed(Element::Water),
                    delta: 1,
                })
                .build(),
        )
}

/// Return a card from the Graveyard to the Hand.
pub fn drowned_archivist() -> CardDefinition {
    CardDefinition::new(ids::DROWNED_ARCHIVIST, "Drowned Archivist")
        .with_tag(TIDE)
        .with_ability(
            Ability::activated("Dredge", UsageLimit::Times(1))
                .with_description("Add 1 card from your GY to your hand.")
                .from_zone(ZoneRequirement::In(Zone::Field))
                .with_check(StateCheck::ZoneSizeAtLeast {
                    zone: Zone::Graveyard,
                    count: 1,
                })
                .with_selection(SelectionSpec::Card(vec![CardCriterion::InZone(Zone::Graveyard)]))
                .with_effect(Effect::MoveSelected { to: Zone::Hand })
                .build(),
        )
}

/// Bounce every Tide card on the Field, then discard itself.
pub fn undertow() -> CardDefinition {
    CardDefinition::new(ids::UNDERTOW, "Undertow").with_ability(
        Ability::activated("Recede", UsageLimit::Times(1))
            .with_description("Return all Tide cards on the field to your hand.")
            .from_zone(ZoneRequirement::In(Zone::Hand))
            .with_effect(Effect::MoveAll {
                criteria: vec![
                    CardCriterion::InZone(Zone::Field),
                    CardCriterion::HasTag(TIDE.into()),
                ],
                to: Zone::Hand,
            })
            .with_effect(Effect::MoveThis { to: Zone::Graveyard })
            .build(),
    )
}

pub fn reef_scout() -> CardDefinition {
    CardDefinition::new(ids::REEF_SCOUT, "Reef Scout")
        .with_tag(TIDE)
        .with_ability(
            Ability::activated("Search", UsageLimit::Times(1))
                .with_description("Add 1 Tide card from your deck to your hand.")
                .from_zone(ZoneRequirement::In(Zone::Field))
                .with_effect(Effect::DrawMatching {
                    criteria: vec![CardCriterion::HasTag(TIDE.into())],
                })
                .build(),
        )
}

/// Discards itself to draw. When sent to the Graveyard, mills a Tide card.
pub fn silt_walker() -> CardDefinition {
    CardDefinition::new(ids::SILT_WALKER, "Silt Walker")
        .with_tag(TIDE)
        .with_ability(
            Ability::activated("Wade", UsageLimit::Times(1))
                .with_description("Send this card from your hand to the GY; draw 1 card.")
                .from_zone(ZoneRequirement::In(Zone::Hand))
                .with_effect(Effect::MoveThis { to: Zone::Graveyard })
                .with_effect(Effect::Draw)
                .build(),
        )
        .with_ability(
            Ability::triggered("Settle", UsageLimit::Times(1), Zone::Graveyard)
                .with_description("When this card is sent to the GY: send 1 Tide card from your deck to the GY.")
                .with_effect(Effect::MillMatching {
                    criteria: vec![CardCriterion::HasTag(TIDE.into())],
                })
                .build(),
        )
}

pub fn brine_chalice() -> CardDefinition {
    CardDefinition::new(ids::BRINE_CHALICE, "Brine Chalice").with_ability(
        Ability::activated("Pour", UsageLimit::Unlimited)
            .with_description("Pay 2 Water: gain 1 Water or Wind.")
            .from_zone(ZoneRequirement::In(Zone::Field))
            .with_check(StateCheck::ResourceAtLeast {
                element: Element::Water,
                amount: 2,
            })
            .with_cost(ResourceCost::free().with(Element::Water, 2))
            .with_selection(SelectionSpec::Element(vec![Element::Water, Element::Wind]))
            .with_effect(Effect::AdjustResource {
                element: ResourceTarget::Selected,
                delta: 1,
            })
            .build(),
    )
}

/// Banishes itself from the Field. When banished from the Field, the
/// player draws and mills one card each.
pub fn gull_omen() -> CardDefinition {
    CardDefinition::new(ids::GULL_OMEN, "Gull Omen")
        .with_ability(
            Ability::activated("Depart", UsageLimit::Unlimited)
                .from_zone(ZoneRequirement::In(Zone::Field))
                .with_check(StateCheck::ZoneSizeAtMost {
                    zone: Zone::Hand,
                    count: 6,
                })
                .with_effect(Effect::MoveThis { to: Zone::Removed })
                .build(),
        )
        .with_ability(
            Ability::triggered("Portent", UsageLimit::Unlimited, Zone::Removed)
                .from_zone(Zone::Field)
                .with_effect(Effect::Draw)
                .with_effect(Effect::Mill)
                .build(),
        )
}

/// Every card in the catalog, in collection order.
pub fn all() -> Vec<CardDefinition> {
    vec![
        shoal_lantern(),
        drowned_archivist(),
        undertow(),
        reef_scout(),
        silt_walker(),
        brine_chalice(),
        gull_omen(),
    ]
}

/// Register the whole catalog.
pub fn registry() -> Result<CardRegistry, RegistryError> {
    let mut registry = CardRegistry::new();
    for card in all() {
        registry.register(card)?;
    }
    Ok(registry)
}

/// A 20-card deck built from the catalog.
pub fn starter_deck() -> Vec<CardId> {
    [
        (ids::SHOAL_LANTERN, 4),
        (ids::DROWNED_ARCHIVIST, 2),
        (ids::UNDERTOW, 2),
        (ids::REEF_SCOUT, 3),
        (ids::SILT_WALKER, 4),
        (ids::BRINE_CHALICE, 2),
        (ids::GULL_OMEN, 3),
    ]
    .into_iter()
    .flat_map(|(id, copies)| std::iter::repeat(id).take(copies))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect_kind(effect: &Effect) -> &'static str {
        match effect {
            Effect::SummonThis => "summon",
            Effect::MoveThis { .. } => "move-this",
            Effect::MoveSelected { .. } => "move-selected",
            Effect::MoveAll { .. } => "move-all",
            Effect::Draw => "draw",
            Effect::DrawMatching { .. } => "draw-matching",
            Effect::Mill => "mill",
            Effect::MillMatching { .. } => "mill-matching",
            Effect::AdjustResource { element: ResourceTarget::Fixed(_), .. } => "adjust-fixed",
            Effect::AdjustResource { element: ResourceTarget::Selected, .. } => "adjust-selected",
        }
    }

    #[test]
    fn test_registry_builds() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.find_by_name("Gull Omen").is_some());
    }

    #[test]
    fn test_every_effect_kind_is_printed() {
        let mut kinds: Vec<_> = all()
            .iter()
            .flat_map(|card| card.abilities.iter())
            .flat_map(|ability| ability.effects().iter().map(effect_kind))
            .collect();
        kinds.sort_unstable();
        kinds.dedup();
        assert_eq!(kinds.len(), 10);
    }

    #[test]
    fn test_starter_deck() {
        let registry = registry().unwrap();
        let deck = registry.decklist(&starter_deck()).unwrap();
        assert_eq!(deck.len(), 20);
    }
}
