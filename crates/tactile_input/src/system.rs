//! Touch input dispatcher and mouse fallback
//!
//! [`TouchInputSystem`] is the root object a host wires its collaborators
//! into: a registry of [`TouchButton`]s keyed by id, at most one
//! [`VirtualJoystick`], and at most one [`GestureRecognizer`]. Raw touch
//! events are forwarded to the recognizer; buttons and the joystick are
//! driven by the host after its own hit-testing, through the accessors
//! here.
//!
//! On hosts without a touch surface, the mouse handlers synthesize a
//! single-contact touch stream: the left button maps to one synthetic
//! contact ([`MOUSE_TOUCH_ID`]) stamped from an internal monotonic clock.
//! The mouse path and direct touch intake are alternative drivers: a
//! host uses one or the other, not both at once.

use std::time::Instant;

use rustc_hash::FxHashMap;

use tactile_core::{Timestamp, TouchId, TouchPoint, Vec2};
use tactile_gestures::GestureRecognizer;

use crate::button::TouchButton;
use crate::joystick::VirtualJoystick;

/// Contact id used for the synthetic mouse touch.
///
/// Mouse fallback is inherently single-touch, so one id suffices.
pub const MOUSE_TOUCH_ID: TouchId = 0;

/// Mouse buttons reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button (drives the synthetic touch)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

/// Monotonic clock for stamping synthetic mouse touches.
#[derive(Debug)]
pub struct InputClock {
    start: Instant,
}

impl InputClock {
    /// Create a new clock starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the current timestamp relative to clock start.
    pub fn now(&self) -> Timestamp {
        Timestamp::from_duration(self.start.elapsed())
    }
}

impl Default for InputClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher that routes raw input to the registered collaborators.
#[derive(Default)]
pub struct TouchInputSystem {
    buttons: FxHashMap<String, TouchButton>,
    joystick: Option<VirtualJoystick>,
    recognizer: Option<GestureRecognizer>,
    mouse_down: bool,
    clock: InputClock,
}

impl TouchInputSystem {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Collaborator registration
    // =========================================================================

    /// Register a button, replacing and returning any button with the
    /// same id.
    pub fn add_button(&mut self, button: TouchButton) -> Option<TouchButton> {
        self.buttons.insert(button.id().to_string(), button)
    }

    /// Remove and return a button by id.
    pub fn remove_button(&mut self, id: &str) -> Option<TouchButton> {
        self.buttons.remove(id)
    }

    pub fn button(&self, id: &str) -> Option<&TouchButton> {
        self.buttons.get(id)
    }

    pub fn button_mut(&mut self, id: &str) -> Option<&mut TouchButton> {
        self.buttons.get_mut(id)
    }

    pub fn buttons(&self) -> impl Iterator<Item = &TouchButton> {
        self.buttons.values()
    }

    /// Install the joystick, returning the one it replaces.
    pub fn set_joystick(&mut self, joystick: VirtualJoystick) -> Option<VirtualJoystick> {
        self.joystick.replace(joystick)
    }

    pub fn joystick(&self) -> Option<&VirtualJoystick> {
        self.joystick.as_ref()
    }

    pub fn joystick_mut(&mut self) -> Option<&mut VirtualJoystick> {
        self.joystick.as_mut()
    }

    /// Install the gesture recognizer, returning the one it replaces.
    pub fn set_gesture_recognizer(
        &mut self,
        recognizer: GestureRecognizer,
    ) -> Option<GestureRecognizer> {
        self.recognizer.replace(recognizer)
    }

    pub fn gesture_recognizer(&self) -> Option<&GestureRecognizer> {
        self.recognizer.as_ref()
    }

    pub fn gesture_recognizer_mut(&mut self) -> Option<&mut GestureRecognizer> {
        self.recognizer.as_mut()
    }

    // =========================================================================
    // Timing
    // =========================================================================

    /// Current time on the internal clock, the timebase of synthetic
    /// mouse touches.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Per-frame tick, forwarded to the recognizer so held taps resolve.
    ///
    /// Touch-driven hosts pass their own event timebase; mouse-driven
    /// hosts pass [`now()`](Self::now).
    pub fn advance(&mut self, now: Timestamp) {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.advance(now);
        }
    }

    // =========================================================================
    // Touch intake
    // =========================================================================

    /// Forward a contact-down event. Safe no-op with no recognizer set.
    pub fn on_touch_down(&mut self, point: TouchPoint) {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.on_touch_down(point);
        }
    }

    /// Forward a contact-move event. Safe no-op with no recognizer set.
    pub fn on_touch_move(&mut self, point: TouchPoint) {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.on_touch_move(point);
        }
    }

    /// Forward a contact-up event. Safe no-op with no recognizer set.
    pub fn on_touch_up(&mut self, point: TouchPoint) {
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.on_touch_up(point);
        }
    }

    // =========================================================================
    // Mouse fallback
    // =========================================================================

    /// Left-button press: opens the synthetic touch contact. Other
    /// buttons are ignored.
    pub fn on_mouse_button_down(&mut self, x: f32, y: f32, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        if self.mouse_down {
            tracing::trace!("mouse down while already held ignored");
            return;
        }
        self.mouse_down = true;
        let point = self.synthetic_point(x, y);
        self.on_touch_down(point);
    }

    /// Mouse motion: forwarded as a contact move only while the left
    /// button is held.
    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        if !self.mouse_down {
            return;
        }
        let point = self.synthetic_point(x, y);
        self.on_touch_move(point);
    }

    /// Left-button release: closes the synthetic touch contact.
    pub fn on_mouse_button_up(&mut self, x: f32, y: f32, button: MouseButton) {
        if button != MouseButton::Left || !self.mouse_down {
            return;
        }
        self.mouse_down = false;
        let point = self.synthetic_point(x, y);
        self.on_touch_up(point);
    }

    fn synthetic_point(&self, x: f32, y: f32) -> TouchPoint {
        TouchPoint::new(MOUSE_TOUCH_ID, Vec2::new(x, y), self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use tactile_core::Gesture;

    fn capturing_recognizer() -> (GestureRecognizer, Rc<RefCell<Vec<Gesture>>>) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        let recognizer = GestureRecognizer::new(move |gesture| sink.borrow_mut().push(*gesture));
        (recognizer, captured)
    }

    #[test]
    fn test_events_without_recognizer_are_safe() {
        let mut system = TouchInputSystem::new();
        system.on_touch_down(TouchPoint::new(1, Vec2::ZERO, Timestamp::zero()));
        system.on_mouse_button_down(5.0, 5.0, MouseButton::Left);
        system.on_mouse_move(6.0, 5.0);
        system.on_mouse_button_up(6.0, 5.0, MouseButton::Left);
        system.advance(Timestamp::from_millis(100));
    }

    #[test]
    fn test_add_button_replaces_by_id() {
        let mut system = TouchInputSystem::new();
        assert!(system.add_button(TouchButton::new("fire", |_| {})).is_none());
        let displaced = system.add_button(TouchButton::new("fire", |_| {}));
        assert!(displaced.is_some());
        assert_eq!(system.buttons().count(), 1);
        assert!(system.button("fire").is_some());
    }

    #[test]
    fn test_set_joystick_returns_previous() {
        let mut system = TouchInputSystem::new();
        assert!(system.set_joystick(VirtualJoystick::new(|_| {})).is_none());
        assert!(system.set_joystick(VirtualJoystick::new(|_| {})).is_some());
        assert!(system.joystick().is_some());
    }

    #[test]
    fn test_set_recognizer_returns_previous() {
        let mut system = TouchInputSystem::new();
        let (first, _) = capturing_recognizer();
        let (second, _) = capturing_recognizer();
        assert!(system.set_gesture_recognizer(first).is_none());
        assert!(system.set_gesture_recognizer(second).is_some());
    }

    #[test]
    fn test_mouse_synthesizes_single_contact() {
        let mut system = TouchInputSystem::new();
        let (recognizer, _) = capturing_recognizer();
        system.set_gesture_recognizer(recognizer);

        system.on_mouse_button_down(10.0, 20.0, MouseButton::Left);
        {
            let recognizer = system.gesture_recognizer().unwrap();
            assert_eq!(recognizer.active_touch_count(), 1);
            assert!(recognizer.is_tracking(MOUSE_TOUCH_ID));
        }

        // A second press while held does not open another contact.
        system.on_mouse_button_down(11.0, 20.0, MouseButton::Left);
        assert_eq!(
            system.gesture_recognizer().unwrap().active_touch_count(),
            1
        );

        system.on_mouse_button_up(10.0, 20.0, MouseButton::Left);
        assert_eq!(
            system.gesture_recognizer().unwrap().active_touch_count(),
            0
        );
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let mut system = TouchInputSystem::new();
        let (recognizer, _) = capturing_recognizer();
        system.set_gesture_recognizer(recognizer);

        system.on_mouse_button_down(10.0, 20.0, MouseButton::Right);
        assert_eq!(
            system.gesture_recognizer().unwrap().active_touch_count(),
            0
        );
    }

    #[test]
    fn test_mouse_move_without_press_is_ignored() {
        let mut system = TouchInputSystem::new();
        let (recognizer, gestures) = capturing_recognizer();
        system.set_gesture_recognizer(recognizer);

        system.on_mouse_move(50.0, 50.0);
        system.on_mouse_button_up(50.0, 50.0, MouseButton::Left);
        assert!(gestures.borrow().is_empty());
        assert_eq!(
            system.gesture_recognizer().unwrap().active_touch_count(),
            0
        );
    }

    #[test]
    fn test_mouse_click_resolves_as_tap() {
        let mut system = TouchInputSystem::new();
        let (recognizer, gestures) = capturing_recognizer();
        system.set_gesture_recognizer(recognizer);

        system.on_mouse_button_down(10.0, 20.0, MouseButton::Left);
        system.on_mouse_button_up(10.0, 20.0, MouseButton::Left);
        assert!(gestures.borrow().is_empty());

        system.advance(system.now() + Duration::from_millis(400));
        assert_eq!(gestures.borrow().len(), 1);
        assert!(matches!(gestures.borrow()[0], Gesture::Tap { .. }));
    }
}
