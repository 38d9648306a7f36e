//! Contract violations raised at the containers' call boundaries.

use thiserror::Error;

/// Result alias for checked container operations.
pub type ContractResult<V> = Result<V, ContractViolation>;

/// A contract-breaking argument detected at a call boundary.
///
/// Each variant names the container family that rejected the call so the
/// message stays useful when violations cross crate boundaries. Violations
/// are raised synchronously at the point of misuse and never logged or
/// retried by the containers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A checked constructor received an absent payload.
    #[error("{container}: required payload was absent")]
    MissingPayload {
        /// Container family that rejected the construction.
        container: &'static str,
    },

    /// A checked equality received an absent comparison argument.
    #[error("{container}: comparison argument was absent")]
    MissingComparand {
        /// Container family that rejected the comparison.
        container: &'static str,
    },

    /// An outcome was instantiated with the same type for value and failure,
    /// making the two variants indistinguishable at the type level.
    #[error("Outcome value and failure are both `{type_name}`; ambiguous instantiation")]
    AmbiguousPayload {
        /// The type used for both payload positions.
        type_name: &'static str,
    },
}
