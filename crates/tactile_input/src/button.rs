//! Edge-triggered touch buttons
//!
//! A [`TouchButton`] detects press/release transitions for a screen
//! region. Hit-testing belongs to the host (which owns the button's
//! bounds and visuals); this type only tracks the pressed state and fires
//! its callback on the press edge.

use std::rc::Rc;

use tactile_core::TouchPoint;

/// Callback invoked with the button id when the button is pressed.
///
/// Uses Rc since the input system is single-threaded.
pub type ClickCallback = Rc<dyn Fn(&str)>;

/// A touchable button firing its callback once per physical press.
pub struct TouchButton {
    id: String,
    on_click: ClickCallback,
    pressed: bool,
}

impl TouchButton {
    pub fn new(id: impl Into<String>, on_click: impl Fn(&str) + 'static) -> Self {
        Self {
            id: id.into(),
            on_click: Rc::new(on_click),
            pressed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// A contact pressed the button.
    ///
    /// Fires the callback on the released→pressed transition; re-entrant
    /// press events while already pressed are no-ops.
    pub fn handle_press(&mut self, _point: &TouchPoint) {
        if self.pressed {
            return;
        }
        self.pressed = true;
        (self.on_click)(&self.id);
    }

    /// The contact left the button.
    ///
    /// Resets the pressed state; a release while not pressed is a no-op
    /// and fires nothing.
    pub fn handle_release(&mut self, _point: &TouchPoint) {
        self.pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tactile_core::{Timestamp, Vec2};

    fn point() -> TouchPoint {
        TouchPoint::new(1, Vec2::new(10.0, 10.0), Timestamp::zero())
    }

    #[test]
    fn test_press_fires_once() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut button = TouchButton::new("fire", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.handle_press(&point());
        button.handle_press(&point());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_release_then_press_fires_again() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut button = TouchButton::new("jump", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.handle_press(&point());
        button.handle_release(&point());
        button.handle_press(&point());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_release_without_press_fires_nothing() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&count);
        let mut button = TouchButton::new("menu", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        button.handle_release(&point());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_callback_receives_button_id() {
        use std::cell::RefCell;

        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let mut button = TouchButton::new("action_1", move |id| {
            *sink.borrow_mut() = id.to_string();
        });

        button.handle_press(&point());
        assert_eq!(*seen.borrow(), "action_1");
    }
}
