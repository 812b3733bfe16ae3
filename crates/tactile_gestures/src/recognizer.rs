//! Multi-touch tracking and gesture classification
//!
//! [`GestureRecognizer`] consumes per-contact down/move/up events from the
//! host event loop and emits classified [`Gesture`]s through a callback.
//! It owns two pieces of state: the map of contacts currently on the
//! surface, and a short history of recently completed taps used to fuse
//! consecutive taps into double/triple taps.
//!
//! # Timing model
//!
//! All timing compares caller-supplied timestamps; the recognizer never
//! reads a clock and never spawns timers. Because a single tap cannot be
//! told apart from the first half of a double tap until the fusion window
//! has passed, tap classification is *delayed*: runs of one or two taps
//! are held until `multi_tap_window` elapses with no further qualifying
//! tap, then emitted exactly once. Hosts must call [`GestureRecognizer::advance`]
//! once per frame so held taps resolve even when no further input arrives.
//! Triple taps emit immediately on the third tap; there is no higher count
//! to wait for.
//!
//! # Example
//!
//! ```rust
//! use tactile_core::{TouchPoint, Timestamp, Vec2};
//! use tactile_gestures::GestureRecognizer;
//!
//! let mut recognizer = GestureRecognizer::new(|gesture| {
//!     println!("{gesture}");
//! });
//!
//! let down = TouchPoint::new(1, Vec2::ZERO, Timestamp::from_millis(0));
//! let up = TouchPoint::new(1, Vec2::ZERO, Timestamp::from_millis(50));
//! recognizer.on_touch_down(down);
//! recognizer.on_touch_up(up);
//!
//! // Once the fusion window has passed with no follow-up tap, the held
//! // tap resolves as a single Tap.
//! recognizer.advance(Timestamp::from_millis(400));
//! ```

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use tactile_core::{Gesture, Result, Timestamp, TouchId, TouchPoint, Vec2};

use crate::config::GestureConfig;

/// Callback for recognized gestures.
///
/// Uses Rc since the input system is single-threaded.
pub type GestureCallback = Rc<dyn Fn(&Gesture)>;

/// Minimum inter-finger start distance for pinch scale to be meaningful.
const MIN_PINCH_BASELINE: f32 = 1e-3;

/// One contact currently on the surface.
struct ActiveTouch {
    /// Snapshot from the down event
    start: TouchPoint,
    /// Most recent snapshot
    last: TouchPoint,
    /// Set when this contact took part in an emitted multi-finger tap;
    /// its own release then emits nothing.
    claimed: bool,
}

/// A completed tap, kept only as long as the fusion window allows.
#[derive(Clone, Copy)]
struct TapRecord {
    position: Vec2,
    end_time: Timestamp,
    finger_count: u8,
}

/// A tap run held for delayed classification.
#[derive(Clone, Copy)]
struct PendingTap {
    /// Release position of the latest tap in the run
    position: Vec2,
    /// Run length so far (1 or 2)
    count: u8,
    /// Release time of the latest tap; the run resolves once
    /// `multi_tap_window` passes this stamp
    last_end: Timestamp,
}

/// Tracks active contacts and classifies gesture patterns from timing and
/// spatial thresholds.
pub struct GestureRecognizer {
    config: GestureConfig,
    on_gesture: GestureCallback,
    active: FxHashMap<TouchId, ActiveTouch>,
    history: SmallVec<[TapRecord; 4]>,
    pending: Option<PendingTap>,
}

impl GestureRecognizer {
    /// Create a recognizer with default thresholds.
    pub fn new(on_gesture: impl Fn(&Gesture) + 'static) -> Self {
        Self {
            config: GestureConfig::default(),
            on_gesture: Rc::new(on_gesture),
            active: FxHashMap::default(),
            history: SmallVec::new(),
            pending: None,
        }
    }

    /// Create a recognizer with custom thresholds.
    pub fn with_config(
        on_gesture: impl Fn(&Gesture) + 'static,
        config: GestureConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut recognizer = Self::new(on_gesture);
        recognizer.config = config;
        Ok(recognizer)
    }

    /// The active thresholds.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Number of contacts currently on the surface.
    pub fn active_touch_count(&self) -> usize {
        self.active.len()
    }

    /// Whether a contact with this id is currently tracked.
    pub fn is_tracking(&self, id: TouchId) -> bool {
        self.active.contains_key(&id)
    }

    /// Whether a tap run is being held for delayed classification.
    ///
    /// Hosts can use this to keep ticking [`advance`](Self::advance) while
    /// a resolution is outstanding.
    pub fn has_pending_tap(&self) -> bool {
        self.pending.is_some()
    }

    /// A new contact touched the surface.
    ///
    /// A down event for an id that is already active is an out-of-order
    /// driver artifact and is ignored.
    pub fn on_touch_down(&mut self, point: TouchPoint) {
        self.resolve_pending(point.timestamp);
        if self.active.contains_key(&point.id) {
            tracing::trace!(id = point.id, "down for already-active contact ignored");
            return;
        }
        self.active.insert(
            point.id,
            ActiveTouch {
                start: point,
                last: point,
                claimed: false,
            },
        );
    }

    /// An active contact moved.
    ///
    /// While exactly two contacts are down, every move emits a
    /// [`Gesture::Pinch`] whose scale is the ratio of the current
    /// inter-finger distance to the distance between the contacts' start
    /// positions.
    pub fn on_touch_move(&mut self, point: TouchPoint) {
        self.resolve_pending(point.timestamp);
        match self.active.get_mut(&point.id) {
            Some(contact) => contact.last = point,
            None => {
                tracing::trace!(id = point.id, "move for unknown contact ignored");
                return;
            }
        }

        if self.active.len() == 2 {
            let mut contacts = self.active.values();
            if let (Some(a), Some(b)) = (contacts.next(), contacts.next()) {
                let baseline = a.start.position.distance(b.start.position);
                if baseline > MIN_PINCH_BASELINE {
                    let scale = a.last.position.distance(b.last.position) / baseline;
                    let center = a.last.position.midpoint(b.last.position);
                    self.emit(Gesture::Pinch { scale, center });
                }
            }
        }
    }

    /// An active contact left the surface; classify what it was.
    ///
    /// Releases for unknown ids are ignored, so duplicate up events emit
    /// nothing.
    pub fn on_touch_up(&mut self, point: TouchPoint) {
        self.resolve_pending(point.timestamp);
        let Some(contact) = self.active.remove(&point.id) else {
            tracing::trace!(id = point.id, "up for unknown contact ignored");
            return;
        };
        if contact.claimed {
            // Trailing finger of an already-emitted multi-finger tap.
            return;
        }

        let duration = point.timestamp - contact.start.timestamp;
        let travel = point.position.distance(contact.start.position);

        if travel > self.config.tap_move_tolerance {
            // Drag or flick release; intentionally unclassified.
            return;
        }
        if duration >= self.config.long_press_threshold {
            // Long presses never join the tap history.
            self.emit(Gesture::LongPress {
                position: point.position,
                duration,
            });
            return;
        }
        self.register_tap(point);
    }

    /// Per-frame tick: resolves a held tap run whose fusion window has
    /// expired and prunes stale history.
    ///
    /// Required by the delayed-classification contract; see the module
    /// docs.
    pub fn advance(&mut self, now: Timestamp) {
        self.resolve_pending(now);
        self.prune_history(now);
    }

    /// Record a completed tap and classify it.
    fn register_tap(&mut self, point: TouchPoint) {
        let finger_count = (self.active.len() + 1).min(u8::MAX as usize) as u8;
        self.prune_history(point.timestamp);
        let record = TapRecord {
            position: point.position,
            end_time: point.timestamp,
            finger_count,
        };

        if finger_count >= 2 {
            // Multi-finger taps classify immediately and never feed
            // single-finger runs. The fingers still on the surface are
            // claimed so their releases stay silent.
            self.flush_pending();
            self.history.push(record);
            for contact in self.active.values_mut() {
                contact.claimed = true;
            }
            let gesture = if finger_count == 2 {
                Gesture::TwoFingerTap {
                    position: point.position,
                }
            } else {
                Gesture::ThreeFingerTap {
                    position: point.position,
                }
            };
            self.emit(gesture);
            return;
        }

        let chains = match self.pending {
            Some(pending) => self.taps_chain(&pending, &record),
            None => false,
        };
        if !chains {
            // A run this tap cannot join resolves now, so every completed
            // tap is classified exactly once.
            self.flush_pending();
        }
        self.history.push(record);

        let run = self.tap_run_length();
        if run >= 3 {
            self.pending = None;
            self.consume_trailing_taps(run);
            self.emit(Gesture::TripleTap {
                position: point.position,
            });
        } else {
            self.pending = Some(PendingTap {
                position: point.position,
                count: run as u8,
                last_end: point.timestamp,
            });
        }
    }

    /// Emit the held run's final classification once its window expires.
    fn resolve_pending(&mut self, now: Timestamp) {
        if let Some(pending) = self.pending {
            if now - pending.last_end > self.config.multi_tap_window {
                self.flush_pending();
            }
        }
    }

    /// Emit the held run's final classification unconditionally.
    fn flush_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.consume_trailing_taps(pending.count as usize);
        let gesture = if pending.count >= 2 {
            Gesture::DoubleTap {
                position: pending.position,
            }
        } else {
            Gesture::Tap {
                position: pending.position,
            }
        };
        self.emit(gesture);
    }

    /// Whether a new tap continues the held run.
    fn taps_chain(&self, pending: &PendingTap, record: &TapRecord) -> bool {
        record.end_time - pending.last_end <= self.config.multi_tap_window
            && record.position.distance(pending.position) <= self.config.tap_position_tolerance
    }

    /// Length of the run of consecutive single-finger taps ending at the
    /// newest history record: adjacent pairs must fall within the fusion
    /// window and position tolerance of each other.
    fn tap_run_length(&self) -> usize {
        let mut run = 0;
        let mut newer: Option<&TapRecord> = None;
        for record in self.history.iter().rev() {
            if record.finger_count != 1 {
                break;
            }
            if let Some(next) = newer {
                if next.end_time - record.end_time > self.config.multi_tap_window
                    || next.position.distance(record.position) > self.config.tap_position_tolerance
                {
                    break;
                }
            }
            run += 1;
            newer = Some(record);
        }
        run
    }

    /// Drop the newest `count` records once their run has been classified.
    fn consume_trailing_taps(&mut self, count: usize) {
        let keep = self.history.len().saturating_sub(count);
        self.history.truncate(keep);
    }

    /// Drop records that can no longer take part in a run ending at a
    /// future tap.
    ///
    /// A record stays live while it is within the fusion window of the
    /// newest record, since runs chain through adjacent pairs; once the
    /// newest record itself ages out, nothing can chain and the history
    /// empties.
    fn prune_history(&mut self, now: Timestamp) {
        let window = self.config.multi_tap_window;
        let Some(newest) = self.history.last().map(|record| record.end_time) else {
            return;
        };
        if now - newest > window {
            self.history.clear();
            return;
        }
        self.history
            .retain(|record| newest - record.end_time <= window);
    }

    fn emit(&self, gesture: Gesture) {
        tracing::trace!(gesture = gesture.name(), "gesture recognized");
        (self.on_gesture)(&gesture);
    }
}
