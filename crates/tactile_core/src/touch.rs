//! Pointer contact snapshots

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;
use crate::time::Timestamp;

/// Identifier for one pointer contact, stable from down to up.
///
/// The host driver assigns ids; the only requirement is that an id is not
/// reused while the contact it names is still active.
pub type TouchId = u64;

/// Immutable snapshot of one finger/pointer contact.
///
/// A new value is produced per event; snapshots are never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Contact identifier, stable until release
    pub id: TouchId,
    /// Position in host coordinates
    pub position: Vec2,
    /// Host-supplied monotonic event time
    pub timestamp: Timestamp,
}

impl TouchPoint {
    pub const fn new(id: TouchId, position: Vec2, timestamp: Timestamp) -> Self {
        Self {
            id,
            position,
            timestamp,
        }
    }
}
