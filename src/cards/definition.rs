//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable template of a card: its collection
//! number, name, tags and abilities. Definitions are loaded once and shared by
//! every instance through an `Arc`.
//!
//! Instance-specific data (id, ability usage) lives in `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tags::Tag;
use crate::abilities::Ability;

/// Collection number of a card definition.
///
/// Identifies the printed card, not a specific copy in a game. Unreleased or
/// test cards commonly use zero or negative numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub i32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_ccg_cascade::abilities::{Ability, UsageLimit, ZoneRequirement};
/// use rust_ccg_cascade::cards::{CardDefinition, CardId};
/// use rust_ccg_cascade::core::Zone;
/// use rust_ccg_cascade::effects::Effect;
///
/// let card = CardDefinition::new(CardId::new(1), "Ember Scout")
///     .with_tag("Fire")
///     .with_ability(
///         Ability::activated("Rush", UsageLimit::Unlimited)
///             .from_zone(ZoneRequirement::In(Zone::Hand))
///             .with_effect(Effect::SummonThis)
///             .build(),
///     );
///
/// assert!(card.has_tag(&"Fire".into()));
/// assert!(card.ability("Rush").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Collection number.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Semantic categories.
    #[serde(default)]
    pub tags: SmallVec<[Tag; 2]>,

    /// Abilities, in printed order. Names are unique per definition.
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl CardDefinition {
    /// Create a new card definition with no tags or abilities.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: SmallVec::new(),
            abilities: Vec::new(),
        }
    }

    /// Add a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Check whether the card carries a tag.
    #[must_use]
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Look up an ability by name.
    #[must_use]
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.name() == name)
    }

    /// The first ability name that appears more than once, if any.
    #[must_use]
    pub fn duplicate_ability_name(&self) -> Option<&str> {
        self.abilities.iter().enumerate().find_map(|(i, ability)| {
            self.abilities[..i]
                .iter()
                .any(|earlier| earlier.name() == ability.name())
                .then(|| ability.name())
        })
    }
}
