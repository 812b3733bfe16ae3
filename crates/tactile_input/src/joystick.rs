//! On-screen virtual joystick
//!
//! Maps drag displacement from an anchor point into a normalized
//! direction vector. Displacement is measured against
//! [`JoystickConfig::max_displacement`]; inside the dead zone the output
//! is neutral, and outside it the magnitude is remapped linearly so it
//! runs from 0 at the dead-zone edge to 1 at full displacement.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use tactile_core::{InputError, Result, TouchPoint, Vec2};

/// Callback invoked with the current direction vector on every drag
/// update.
///
/// Uses Rc since the input system is single-threaded.
pub type JoystickCallback = Rc<dyn Fn(Vec2)>;

/// Configuration for joystick displacement mapping
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct JoystickConfig {
    /// Neutral radius as a fraction of `max_displacement` (default: 0.1)
    pub dead_zone: f32,
    /// Displacement, in host units, that maps to full deflection
    /// (default: 50.0)
    pub max_displacement: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            dead_zone: 0.1,
            max_displacement: 50.0,
        }
    }
}

impl JoystickConfig {
    /// Check that the mapping is well-defined.
    pub fn validate(&self) -> Result<()> {
        if !self.max_displacement.is_finite() || self.max_displacement <= 0.0 {
            return Err(InputError::InvalidConfig(format!(
                "max_displacement must be finite and positive, got {}",
                self.max_displacement
            )));
        }
        if !self.dead_zone.is_finite() || !(0.0..1.0).contains(&self.dead_zone) {
            return Err(InputError::InvalidConfig(format!(
                "dead_zone must be in [0, 1), got {}",
                self.dead_zone
            )));
        }
        Ok(())
    }
}

/// An on-screen joystick reporting a normalized direction vector.
pub struct VirtualJoystick {
    config: JoystickConfig,
    on_move: JoystickCallback,
    anchor: Vec2,
    direction: Vec2,
    active: bool,
}

impl VirtualJoystick {
    /// Create a joystick with default displacement mapping.
    pub fn new(on_move: impl Fn(Vec2) + 'static) -> Self {
        Self {
            config: JoystickConfig::default(),
            on_move: Rc::new(on_move),
            anchor: Vec2::ZERO,
            direction: Vec2::ZERO,
            active: false,
        }
    }

    /// Create a joystick with a custom displacement mapping.
    pub fn with_config(on_move: impl Fn(Vec2) + 'static, config: JoystickConfig) -> Result<Self> {
        config.validate()?;
        let mut joystick = Self::new(on_move);
        joystick.config = config;
        Ok(joystick)
    }

    /// The active displacement mapping.
    pub fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Latest reported direction vector.
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A contact grabbed the joystick; `base_center` is the screen
    /// position of the joystick base, which anchors the displacement.
    pub fn start_drag(&mut self, point: &TouchPoint, base_center: Vec2) {
        self.active = true;
        self.anchor = base_center;
        self.update_direction(point.position);
    }

    /// The grabbing contact moved. No-op while inactive.
    ///
    /// The callback fires on every call, whether or not the direction
    /// changed; hosts may debounce.
    pub fn drag(&mut self, point: &TouchPoint) {
        if !self.active {
            return;
        }
        self.update_direction(point.position);
    }

    /// The grabbing contact released: reports neutral exactly once and
    /// deactivates. No-op while inactive.
    pub fn end_drag(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.direction = Vec2::ZERO;
        (self.on_move)(self.direction);
    }

    fn update_direction(&mut self, position: Vec2) {
        let scaled = (position - self.anchor) * (1.0 / self.config.max_displacement);
        let magnitude = scaled.length().min(1.0);

        self.direction = if magnitude < self.config.dead_zone {
            Vec2::ZERO
        } else {
            // Remap [dead_zone, 1] onto [0, 1] along the drag direction.
            let reach = (magnitude - self.config.dead_zone) / (1.0 - self.config.dead_zone);
            scaled.normalize() * reach
        };
        (self.on_move)(self.direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tactile_core::Timestamp;

    fn tp(x: f32, y: f32) -> TouchPoint {
        TouchPoint::new(1, Vec2::new(x, y), Timestamp::zero())
    }

    fn capture() -> (VirtualJoystick, Rc<RefCell<Vec<Vec2>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        let joystick = VirtualJoystick::new(move |v| sink.borrow_mut().push(v));
        (joystick, captured)
    }

    #[test]
    fn test_dead_zone_reports_neutral() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(302.0, 300.0), Vec2::new(300.0, 300.0));
        assert_eq!(*reported.borrow().last().unwrap(), Vec2::ZERO);
    }

    #[test]
    fn test_full_displacement_is_unit_length() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(300.0, 300.0), Vec2::new(300.0, 300.0));
        joystick.drag(&tp(330.0, 340.0)); // displacement (30, 40), length 50 = max
        let direction = *reported.borrow().last().unwrap();
        assert!((direction.length() - 1.0).abs() < 1e-6);
        assert!((direction.x - 0.6).abs() < 1e-6);
        assert!((direction.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_beyond_max_clamps_to_unit() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(300.0, 300.0), Vec2::new(300.0, 300.0));
        joystick.drag(&tp(500.0, 300.0));
        let direction = *reported.borrow().last().unwrap();
        assert!((direction.length() - 1.0).abs() < 1e-6);
        assert!((direction.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mid_range_remaps_linearly() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(300.0, 300.0), Vec2::new(300.0, 300.0));
        joystick.drag(&tp(325.0, 300.0)); // half displacement
        let direction = *reported.borrow().last().unwrap();
        let expected = (0.5 - 0.1) / 0.9;
        assert!((direction.x - expected).abs() < 1e-6);
        assert_eq!(direction.y, 0.0);
    }

    #[test]
    fn test_end_drag_reports_neutral_once() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(350.0, 300.0), Vec2::new(300.0, 300.0));
        joystick.end_drag();
        assert!(!joystick.is_active());
        assert_eq!(*reported.borrow().last().unwrap(), Vec2::ZERO);

        let count = reported.borrow().len();
        joystick.end_drag();
        assert_eq!(reported.borrow().len(), count);
    }

    #[test]
    fn test_drag_while_inactive_is_noop() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut joystick = VirtualJoystick::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        joystick.drag(&tp(340.0, 300.0));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_callback_fires_every_drag() {
        let (mut joystick, reported) = capture();

        joystick.start_drag(&tp(300.0, 300.0), Vec2::new(300.0, 300.0));
        joystick.drag(&tp(320.0, 300.0));
        joystick.drag(&tp(320.0, 300.0));
        assert_eq!(reported.borrow().len(), 3);
    }

    #[test]
    fn test_with_config_rejects_bad_mapping() {
        let config = JoystickConfig {
            dead_zone: 1.0,
            ..Default::default()
        };
        assert!(VirtualJoystick::with_config(|_| {}, config).is_err());

        let config = JoystickConfig {
            max_displacement: 0.0,
            ..Default::default()
        };
        assert!(VirtualJoystick::with_config(|_| {}, config).is_err());
    }
}
