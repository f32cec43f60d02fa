//! Engine errors.
//!
//! Every failure aborts the in-flight resolution. Operations take the state by
//! reference and return a new one, so the caller's state is never partially
//! updated when an error is returned.

use thiserror::Error;

use super::config::Zone;
use super::entity::InstanceId;
use super::resources::Element;
use crate::abilities::GateRejection;

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No zone holds a card with this id.
    ///
    /// Ids are only ever read from state, so this is a programming error.
    #[error("card instance {0} not found in any zone")]
    NotFound(InstanceId),

    /// A state transition would break a model invariant.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// An effect needs a selection that the caller did not supply.
    #[error("ability \"{ability}\" requires a selection but none was supplied")]
    MissingSelection { ability: String },

    /// The supplied selection does not satisfy the ability's criteria.
    #[error("selection is not a legal target for ability \"{ability}\"")]
    InvalidSelection { ability: String },

    /// The resource pool cannot pay a cost.
    #[error("insufficient {element}: need {required}, pool has {available}")]
    InsufficientResource {
        element: Element,
        required: u32,
        available: u32,
    },

    /// The trigger cascade drained more triggers than the configured guard.
    #[error("trigger cascade exceeded {limit} steps")]
    CascadeOverflow { limit: usize },

    /// The card has no ability with this name.
    #[error("card {card} has no ability named \"{ability}\"")]
    UnknownAbility { card: InstanceId, ability: String },

    /// The gate refused the activation.
    #[error("activation rejected: {0}")]
    Rejected(GateRejection),
}

impl EngineError {
    /// Build an invariant violation for a move whose recorded source is stale.
    pub(crate) fn stale_move(id: InstanceId, expected: Zone, actual: Zone) -> Self {
        Self::InvariantViolation(format!(
            "card {id} expected in {expected} but found in {actual}"
        ))
    }
}

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::NotFound(InstanceId(9));
        assert_eq!(err.to_string(), "card instance #9 not found in any zone");
    }

    #[test]
    fn test_insufficient_resource_message() {
        let err = EngineError::InsufficientResource {
            element: Element::Fire,
            required: 3,
            available: 1,
        };
        assert_eq!(err.to_string(), "insufficient Fire: need 3, pool has 1");
    }

    #[test]
    fn test_rejected_wraps_reason() {
        let err = EngineError::Rejected(GateRejection::UsageLimitReached);
        assert!(err.to_string().starts_with("activation rejected"));
    }

    #[test]
    fn test_stale_move() {
        let err = EngineError::stale_move(InstanceId(1), Zone::Hand, Zone::Field);
        assert!(matches!(err, EngineError::InvariantViolation(_)));
        assert_eq!(
            err.to_string(),
            "invariant violation: card #1 expected in Hand but found in Field"
        );
    }
}
