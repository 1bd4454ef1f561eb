//! Engine error type.
//!
//! Every variant is raised synchronously at a boundary: a request is either
//! accepted in full or rejected in full, so none of these leave partial
//! state behind.

use thiserror::Error;

use crate::{Floor, LiftId};

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiftError {
    /// Target floor outside `[1, total_floors]`.  Never enters a queue.
    #[error("floor {floor} is outside the building (valid floors are 1..={total_floors})")]
    InvalidFloorRequest { floor: Floor, total_floors: u32 },

    #[error("configuration error: {0}")]
    InvalidConfiguration(String),

    /// A lift id that is not part of the fleet.  The fleet is fixed at
    /// construction, so this always indicates a programming defect.
    #[error("internal inconsistency: {0} is not part of the fleet")]
    InternalInconsistency(LiftId),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
