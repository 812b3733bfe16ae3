//! Recognized gesture events
//!
//! Gestures are a closed, tagged set so consumers pattern-match
//! exhaustively instead of switching on name strings. The display names
//! are stable and intended for logs and debug overlays.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::geometry::Vec2;

/// A classified gesture emitted by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gesture {
    /// Single short touch without significant movement
    Tap {
        /// Release position
        position: Vec2,
    },
    /// Two taps fused within the multi-tap window
    DoubleTap {
        /// Release position of the final tap
        position: Vec2,
    },
    /// Three taps fused within the multi-tap window
    TripleTap {
        /// Release position of the final tap
        position: Vec2,
    },
    /// Tap performed with two fingers on the surface
    TwoFingerTap {
        /// Release position of the finger that completed the tap
        position: Vec2,
    },
    /// Tap performed with three or more fingers on the surface
    ThreeFingerTap {
        /// Release position of the finger that completed the tap
        position: Vec2,
    },
    /// Touch held in place past the long-press threshold
    LongPress {
        /// Release position
        position: Vec2,
        /// How long the contact was held
        duration: Duration,
    },
    /// Two contacts moving relative to each other
    Pinch {
        /// Ratio of current to initial inter-finger distance
        scale: f32,
        /// Midpoint of the two contacts
        center: Vec2,
    },
}

impl Gesture {
    /// Stable display name for this gesture.
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::Tap { .. } => "Tap",
            Gesture::DoubleTap { .. } => "Double Tap",
            Gesture::TripleTap { .. } => "Triple Tap",
            Gesture::TwoFingerTap { .. } => "Two-Finger Tap",
            Gesture::ThreeFingerTap { .. } => "Three-Finger Tap",
            Gesture::LongPress { .. } => "Long Press",
            Gesture::Pinch { .. } => "Pinch",
        }
    }

    /// Representative position: the release point for taps and long
    /// presses, the current midpoint for pinches.
    pub fn position(&self) -> Vec2 {
        match self {
            Gesture::Tap { position }
            | Gesture::DoubleTap { position }
            | Gesture::TripleTap { position }
            | Gesture::TwoFingerTap { position }
            | Gesture::ThreeFingerTap { position }
            | Gesture::LongPress { position, .. } => *position,
            Gesture::Pinch { center, .. } => *center,
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
