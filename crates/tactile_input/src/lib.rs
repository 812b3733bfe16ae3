//! Tactile Input Composition
//!
//! Host-facing input surface for touch-driven interfaces: edge-triggered
//! [`TouchButton`]s, a [`VirtualJoystick`], and the [`TouchInputSystem`]
//! dispatcher that owns them together with a gesture recognizer and a
//! mouse-fallback adapter.
//!
//! Rendering, layout, and hit-testing stay with the host: it decides
//! which collaborator a contact belongs to, then drives that
//! collaborator through this crate.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tactile_gestures::GestureRecognizer;
//! use tactile_input::{MouseButton, TouchButton, TouchInputSystem, VirtualJoystick};
//!
//! let mut system = TouchInputSystem::new();
//! system.add_button(TouchButton::new("fire", |id| println!("{id} clicked")));
//! system.set_joystick(VirtualJoystick::new(|dir| println!("move {} {}", dir.x, dir.y)));
//! system.set_gesture_recognizer(GestureRecognizer::new(|gesture| println!("{gesture}")));
//!
//! // On a mouse-only host, clicks arrive as a synthetic touch contact.
//! system.on_mouse_button_down(120.0, 80.0, MouseButton::Left);
//! system.on_mouse_button_up(120.0, 80.0, MouseButton::Left);
//!
//! // Tick once per frame so held taps resolve.
//! system.advance(system.now() + Duration::from_millis(400));
//! ```

mod button;
mod joystick;
mod system;

// Re-export all public types
pub use button::{ClickCallback, TouchButton};
pub use joystick::{JoystickCallback, JoystickConfig, VirtualJoystick};
pub use system::{InputClock, MouseButton, TouchInputSystem, MOUSE_TOUCH_ID};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::button::{ClickCallback, TouchButton};
    pub use crate::joystick::{JoystickCallback, JoystickConfig, VirtualJoystick};
    pub use crate::system::{InputClock, MouseButton, TouchInputSystem, MOUSE_TOUCH_ID};
    pub use tactile_core::prelude::*;
    pub use tactile_gestures::{GestureCallback, GestureConfig, GestureRecognizer};
}
