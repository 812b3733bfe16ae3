//! Tactile Gesture Recognition
//!
//! Multi-touch tracking and gesture classification for host-driven event
//! loops. The recognizer consumes normalized contact events (id, position,
//! timestamp) and emits a closed set of gestures: taps (single, double,
//! triple, two- and three-finger), long presses, and continuous pinch
//! updates.
//!
//! # Design
//!
//! - **Host-driven time**: every event carries a caller-supplied
//!   timestamp; the engine never reads a clock or spawns timers.
//! - **Delayed tap resolution**: single and double taps are held until
//!   the fusion window elapses, then emitted exactly once. Hosts tick
//!   [`GestureRecognizer::advance`] once per frame.
//! - **Tolerant intake**: out-of-order and duplicate driver events are
//!   absorbed as no-ops; the input path never fails.

mod config;
mod recognizer;

pub use config::GestureConfig;
pub use recognizer::{GestureCallback, GestureRecognizer};
