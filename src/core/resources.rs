//! Shared resource pool.
//!
//! Resources are counted per `Element`. The pool stores unsigned counts, and
//! every arithmetic path is checked, so a pool can never hold a negative value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};

/// A resource category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Holy,
    Fire,
    Stone,
    Thunder,
    Plant,
    Wind,
    Water,
    Dark,
}

impl Element {
    /// Number of elements.
    pub const COUNT: usize = 8;

    /// All elements in declaration order.
    pub const ALL: [Element; Element::COUNT] = [
        Element::Holy,
        Element::Fire,
        Element::Stone,
        Element::Thunder,
        Element::Plant,
        Element::Wind,
        Element::Water,
        Element::Dark,
    ];

    /// Position of this element in `Element::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Resource counts per element.
///
/// ```
/// use rust_ccg_cascade::core::{Element, ResourceCost, ResourcePool};
///
/// let pool = ResourcePool::empty().with(Element::Fire, 2);
/// let cost = ResourceCost::free().with(Element::Fire, 1);
///
/// assert!(pool.can_afford(&cost));
/// let paid = pool.pay(&cost).unwrap();
/// assert_eq!(paid.get(Element::Fire), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourcePool {
    counts: [u32; Element::COUNT],
}

impl ResourcePool {
    /// A pool with zero of every element.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set an element's count (builder pattern).
    #[must_use]
    pub fn with(mut self, element: Element, amount: u32) -> Self {
        self.counts[element.index()] = amount;
        self
    }

    /// Current count of an element.
    #[must_use]
    pub fn get(&self, element: Element) -> u32 {
        self.counts[element.index()]
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Check whether every element of `cost` is covered by this pool.
    #[must_use]
    pub fn can_afford(&self, cost: &ResourceCost) -> bool {
        cost.iter().all(|(element, amount)| self.get(element) >= amount)
    }

    /// The first element `cost` needs more of than the pool holds.
    #[must_use]
    pub fn shortfall(&self, cost: &ResourceCost) -> Option<(Element, u32, u32)> {
        cost.iter()
            .find(|&(element, amount)| self.get(element) < amount)
            .map(|(element, amount)| (element, amount, self.get(element)))
    }

    /// Pay a cost, returning the reduced pool.
    pub fn pay(&self, cost: &ResourceCost) -> Result<Self> {
        if let Some((element, required, available)) = self.shortfall(cost) {
            return Err(EngineError::InsufficientResource {
                element,
                required,
                available,
            });
        }
        let mut next = *self;
        for (element, amount) in cost.iter() {
            next.counts[element.index()] -= amount;
        }
        Ok(next)
    }

    /// Apply a signed delta to one element.
    ///
    /// Fails if the result would be negative or overflow.
    pub fn apply_delta(&self, element: Element, delta: i64) -> Result<Self> {
        let current = i64::from(self.get(element));
        let updated = current
            .checked_add(delta)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                EngineError::InvariantViolation(format!(
                    "{element} pool would become {} (delta {delta})",
                    current.saturating_add(delta)
                ))
            })?;
        let mut next = *self;
        next.counts[element.index()] = updated;
        Ok(next)
    }

    /// Iterate over (element, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::ALL.iter().map(move |&e| (e, self.get(e)))
    }
}

/// Resource cost of an activated ability.
///
/// Most costs name one or two elements, so entries are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    entries: SmallVec<[(Element, u32); 2]>,
}

impl ResourceCost {
    /// A cost of nothing.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// Add to the cost (builder pattern). Repeated elements accumulate.
    #[must_use]
    pub fn with(mut self, element: Element, amount: u32) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(e, _)| *e == element) {
            entry.1 += amount;
        } else if amount > 0 {
            self.entries.push((element, amount));
        }
        self
    }

    /// Check if the cost is empty.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.entries.iter().all(|&(_, amount)| amount == 0)
    }

    /// Iterate over (element, amount) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        self.entries.iter().copied()
    }
}
