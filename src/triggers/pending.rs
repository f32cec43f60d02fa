//! Pending trigger work list.

use std::collections::VecDeque;

use crate::core::TriggerOrder;

use super::discovery::PendingTrigger;

/// Triggers waiting to resolve, drained in a fixed `TriggerOrder`.
///
/// With `TriggerOrder::Stack` the most recently added trigger comes out
/// first; with `TriggerOrder::Queue` the oldest does.
///
/// ```
/// use rust_ccg_cascade::core::{InstanceId, TriggerOrder};
/// use rust_ccg_cascade::triggers::{PendingTrigger, PendingTriggers};
///
/// let mut pending = PendingTriggers::new(TriggerOrder::Stack);
/// pending.extend([
///     PendingTrigger::new(InstanceId(1), "First"),
///     PendingTrigger::new(InstanceId(2), "Second"),
/// ]);
///
/// assert_eq!(pending.pop().unwrap().ability, "Second");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PendingTriggers {
    order: TriggerOrder,
    items: VecDeque<PendingTrigger>,
}

impl PendingTriggers {
    /// Create an empty work list.
    #[must_use]
    pub fn new(order: TriggerOrder) -> Self {
        Self {
            order,
            items: VecDeque::new(),
        }
    }

    /// Add a trigger.
    pub fn push(&mut self, trigger: PendingTrigger) {
        self.items.push_back(trigger);
    }

    /// Take the next trigger to resolve.
    pub fn pop(&mut self) -> Option<PendingTrigger> {
        match self.order {
            TriggerOrder::Stack => self.items.pop_back(),
            TriggerOrder::Queue => self.items.pop_front(),
        }
    }

    /// Drain order.
    #[must_use]
    pub fn order(&self) -> TriggerOrder {
        self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Extend<PendingTrigger> for PendingTriggers {
    fn extend<I: IntoIterator<Item = PendingTrigger>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
