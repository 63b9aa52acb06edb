//! Pointer drag to swipe recognition
//!
//! Touch and mouse drags share one tracker. A drag is `Idle` until the
//! pointer goes down, `Tracking` while it moves, and on release either
//! commits exactly one swipe or falls back to `Idle` without one.

use serde::Serialize;

/// Direction the pointer travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Pointer moved towards the left edge (reveals the next slide)
    Left,
    /// Pointer moved towards the right edge (reveals the previous slide)
    Right,
}

impl SwipeDirection {
    /// Mobile index step this swipe asks for
    #[inline]
    pub fn step(self) -> isize {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Tracking { origin: (i32, i32), last: (i32, i32) },
}

/// Swipe recognizer with a minimum travel distance
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    state: GestureState,
    threshold_px: u32,
}

impl SwipeTracker {
    pub fn new(threshold_px: u32) -> Self {
        Self {
            state: GestureState::Idle,
            threshold_px,
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Pointer went down. Restarts tracking if a drag was already open.
    pub fn press(&mut self, x: i32, y: i32) {
        self.state = GestureState::Tracking {
            origin: (x, y),
            last: (x, y),
        };
    }

    /// Pointer moved. Ignored unless tracking.
    pub fn move_to(&mut self, x: i32, y: i32) {
        if let GestureState::Tracking { last, .. } = &mut self.state {
            *last = (x, y);
        }
    }

    /// Pointer released. Returns the committed swipe, if the drag was
    /// strictly more horizontal than vertical and travelled at least the threshold.
    pub fn release(&mut self, x: i32, y: i32) -> Option<SwipeDirection> {
        self.move_to(x, y);
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        let GestureState::Tracking { origin, last } = state else {
            return None;
        };

        let dx = last.0.saturating_sub(origin.0);
        let dy = last.1.saturating_sub(origin.1);
        if dx.unsigned_abs() < self.threshold_px || dy.unsigned_abs() >= dx.unsigned_abs() {
            return None;
        }

        Some(if dx < 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }

    /// Drop any open drag without committing
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(10)
    }
}
