//! Tactile Core Types
//!
//! This crate provides the foundational value types shared by the tactile
//! input crates:
//!
//! - [`Vec2`] - 2D vector math for positions and directions
//! - [`Timestamp`] - monotonic event time, supplied by the host
//! - [`TouchPoint`] - immutable snapshot of one pointer contact
//! - [`Gesture`] - tagged union over the recognized gesture set
//! - [`InputError`] - configuration errors
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{Gesture, TouchPoint, Timestamp, Vec2};
//!
//! let point = TouchPoint::new(1, Vec2::new(120.0, 80.0), Timestamp::from_millis(16));
//! assert_eq!(point.position.length(), (120.0f32 * 120.0 + 80.0 * 80.0).sqrt());
//!
//! let gesture = Gesture::Tap { position: point.position };
//! assert_eq!(gesture.name(), "Tap");
//! ```

mod error;
mod geometry;
mod gesture;
mod time;
mod touch;

// Re-export all public types
pub use error::{InputError, Result};
pub use geometry::Vec2;
pub use gesture::Gesture;
pub use time::Timestamp;
pub use touch::{TouchId, TouchPoint};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{InputError, Result};
    pub use crate::geometry::Vec2;
    pub use crate::gesture::Gesture;
    pub use crate::time::Timestamp;
    pub use crate::touch::{TouchId, TouchPoint};
}
