//! # Drag Tracking
//!
//! Turns raw mouse press / drag / release cells into the offset and velocity
//! the navigator's gesture interpreter expects. Terminal cells are scaled to
//! display units so thresholds mean the same thing as on a pixel surface.
//!
//! Velocity is measured over the most recent `VELOCITY_WINDOW` of samples,
//! so a long slow drag that ends in a flick still reads as a flick.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Display units per terminal column.
pub const UNITS_PER_COLUMN: f64 = 3.0;
/// Display units per terminal row.
pub const UNITS_PER_ROW: f64 = 6.0;

const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// What a released press amounted to.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub card_id: String,
    /// `true` if the pointer moved while held on a draggable card.
    pub dragged: bool,
    pub offset_x: f64,
    pub velocity_x: f64,
}

#[derive(Debug)]
pub struct DragTracker {
    card_id: String,
    draggable: bool,
    origin_col: u16,
    started: bool,
    samples: VecDeque<(Instant, f64)>,
}

impl DragTracker {
    /// Begin tracking a press on `card_id` at column `col`.
    pub fn press(card_id: String, draggable: bool, col: u16, now: Instant) -> Self {
        let mut samples = VecDeque::new();
        samples.push_back((now, 0.0));
        Self {
            card_id,
            draggable,
            origin_col: col,
            started: false,
            samples,
        }
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Record pointer movement. Returns `true` the first time a draggable
    /// card actually moves, which is when the drag "starts".
    pub fn move_to(&mut self, col: u16, now: Instant) -> bool {
        if !self.draggable {
            return false;
        }
        let offset = self.offset_at(col);
        self.record(now, offset);
        if !self.started && col != self.origin_col {
            self.started = true;
            return true;
        }
        false
    }

    /// Current horizontal offset in columns, for drawing the card mid-drag.
    pub fn offset_columns(&self) -> i32 {
        if !self.started {
            return 0;
        }
        self.samples
            .back()
            .map(|(_, units)| (units / UNITS_PER_COLUMN).round() as i32)
            .unwrap_or(0)
    }

    pub fn release(mut self, col: u16, now: Instant) -> Release {
        let offset_x = if self.draggable { self.offset_at(col) } else { 0.0 };
        self.record(now, offset_x);
        Release {
            velocity_x: if self.started { self.velocity() } else { 0.0 },
            card_id: self.card_id,
            dragged: self.started,
            offset_x,
        }
    }

    fn offset_at(&self, col: u16) -> f64 {
        (col as f64 - self.origin_col as f64) * UNITS_PER_COLUMN
    }

    fn record(&mut self, now: Instant, offset: f64) {
        self.samples.push_back((now, offset));
        while let Some(&(t, _)) = self.samples.front() {
            if self.samples.len() > 2 && now.duration_since(t) > VELOCITY_WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Units per second across the sample window.
    fn velocity(&self) -> f64 {
        let (Some(&(t0, x0)), Some(&(t1, x1))) = (self.samples.front(), self.samples.back())
        else {
            return 0.0;
        };
        let dt = t1.duration_since(t0).as_secs_f64();
        if dt <= f64::EPSILON {
            return 0.0;
        }
        (x1 - x0) / dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_without_movement() {
        let t0 = Instant::now();
        let tracker = DragTracker::press("a".into(), true, 40, t0);
        let release = tracker.release(40, t0 + Duration::from_millis(80));
        assert!(!release.dragged);
        assert_eq!(release.offset_x, 0.0);
        assert_eq!(release.velocity_x, 0.0);
        assert_eq!(release.card_id, "a");
    }

    #[test]
    fn test_drag_start_reported_once() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::press("a".into(), true, 40, t0);
        assert!(!tracker.move_to(40, t0 + Duration::from_millis(10)));
        assert!(tracker.move_to(38, t0 + Duration::from_millis(20)));
        assert!(!tracker.move_to(30, t0 + Duration::from_millis(30)));
        assert!(tracker.is_started());
        assert_eq!(tracker.offset_columns(), -10);
    }

    #[test]
    fn test_offset_is_scaled_to_display_units() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::press("a".into(), true, 40, t0);
        tracker.move_to(30, t0 + Duration::from_millis(50));
        let release = tracker.release(20, t0 + Duration::from_millis(100));
        assert!(release.dragged);
        assert_eq!(release.offset_x, -60.0);
        // -60 units over 100ms
        assert!((release.velocity_x + 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_uses_recent_window() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::press("a".into(), true, 40, t0);
        // slow drift for a second, then a quick flick
        tracker.move_to(41, t0 + Duration::from_millis(500));
        tracker.move_to(42, t0 + Duration::from_millis(1000));
        let release = tracker.release(52, t0 + Duration::from_millis(1050));
        assert!(release.velocity_x > 500.0);
    }

    #[test]
    fn test_non_draggable_card_never_drags() {
        let t0 = Instant::now();
        let mut tracker = DragTracker::press("b".into(), false, 40, t0);
        assert!(!tracker.move_to(10, t0 + Duration::from_millis(10)));
        let release = tracker.release(10, t0 + Duration::from_millis(20));
        assert!(!release.dragged);
        assert_eq!(release.offset_x, 0.0);
    }
}
