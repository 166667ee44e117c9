// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for malformed construction input and bad entity references.
//!
//! Out-of-range geometry is never an error: it is clamped, reverted, or relocated
//! and reported through [`EditOutcome`](crate::EditOutcome).

use crate::id::{EntityId, EntityKind};

/// Error returned by room and entity operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A size was zero, negative, or not finite.
    #[error("invalid {what}: {value} (must be positive and finite)")]
    InvalidDimension {
        /// Which dimension was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A size was below the minimum configured for edits.
    #[error("{what} {value} is below the minimum of {min}")]
    BelowMinimum {
        /// Which dimension was rejected.
        what: &'static str,
        /// The rejected value.
        value: f64,
        /// The configured minimum.
        min: f64,
    },
    /// No window or door has this id.
    #[error("no opening with id {0}")]
    OpeningNotFound(EntityId),
    /// No entity of the given kind has this id.
    #[error("no {kind} with id {id}")]
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// The missing id.
        id: EntityId,
    },
    /// An entity with this id is already in the room.
    #[error("duplicate id: {0}")]
    DuplicateId(EntityId),
    /// A door-only field was edited on a window.
    #[error("opening {0} is not a door")]
    NotADoor(EntityId),
}

/// Reject sizes that are not strictly positive and finite.
pub(crate) fn positive(what: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { what, value })
    }
}

/// Reject values that are not finite. Range is left to clamping.
pub(crate) fn finite(what: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { what, value })
    }
}

/// Reject sizes that are negative or not finite. Zero is allowed.
pub(crate) fn non_negative(what: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidDimension { what, value })
    }
}

/// Reject sizes that are invalid or below `min`.
pub(crate) fn at_least(what: &'static str, value: f64, min: f64) -> Result<f64, LayoutError> {
    let value = positive(what, value)?;
    if value < min {
        return Err(LayoutError::BelowMinimum { what, value, min });
    }
    Ok(value)
}
