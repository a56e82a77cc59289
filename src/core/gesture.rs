//! Gesture sources and how they map onto carousel directions.
//!
//! Two input modalities produce vertical motion: the wheel and a touch-style
//! swipe (a left-button drag in the terminal).  By default they map to
//! opposite directions (wheel down and swipe up both step forward), and
//! each mapping can be inverted independently.
//!
//! Gestures that start while the pointer was last inside the options panel
//! are suppressed so scrolling the panel does not move the carousel.

use super::navigator::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    Wheel,
    Touch,
}

/// Vertical motion as reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
}

/// Per-modality mapping from motion to direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureMapping {
    pub invert_wheel: bool,
    pub invert_touch: bool,
}

impl GestureMapping {
    pub fn direction(&self, source: GestureSource, motion: Motion) -> Direction {
        let (forward_on, inverted) = match source {
            GestureSource::Wheel => (Motion::Down, self.invert_wheel),
            GestureSource::Touch => (Motion::Up, self.invert_touch),
        };
        if (motion == forward_on) != inverted {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}

// ───────────────────────────────────────── regions ───────────

/// Inclusive-exclusive screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col - self.x) < self.width
            && (row - self.y) < self.height
    }
}

/// Remembers where the pointer was last seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: Option<(u16, u16)>,
}

impl PointerTracker {
    pub fn record(&mut self, col: u16, row: u16) {
        self.last = Some((col, row));
    }

    pub fn last(&self) -> Option<(u16, u16)> {
        self.last
    }

    /// `true` when the last known pointer position lies in `region`.
    /// With no pointer seen yet nothing is excluded.
    pub fn is_inside(&self, region: Option<Region>) -> bool {
        match (self.last, region) {
            (Some((col, row)), Some(r)) => r.contains(col, row),
            _ => false,
        }
    }
}

// ───────────────────────────────────────── swipe ─────────────

/// Turns a stream of drag positions into discrete swipe motions.
///
/// Each time the pointer travels `threshold` rows from the anchor a motion is
/// emitted and the anchor moves to the current row.
#[derive(Debug, Clone, Copy)]
pub struct SwipeDetector {
    threshold: u16,
    anchor: Option<u16>,
}

impl SwipeDetector {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            anchor: None,
        }
    }

    pub fn set_threshold(&mut self, threshold: u16) {
        self.threshold = threshold.max(1);
    }

    pub fn press(&mut self, row: u16) {
        self.anchor = Some(row);
    }

    pub fn drag(&mut self, row: u16) -> Option<Motion> {
        let anchor = self.anchor?;
        let motion = if anchor >= row + self.threshold {
            Motion::Up
        } else if row >= anchor + self.threshold {
            Motion::Down
        } else {
            return None;
        };
        self.anchor = Some(row);
        Some(motion)
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_inverts_between_modalities() {
        let m = GestureMapping::default();
        assert_eq!(m.direction(GestureSource::Wheel, Motion::Up), Direction::Backward);
        assert_eq!(m.direction(GestureSource::Wheel, Motion::Down), Direction::Forward);
        assert_eq!(m.direction(GestureSource::Touch, Motion::Up), Direction::Forward);
        assert_eq!(m.direction(GestureSource::Touch, Motion::Down), Direction::Backward);
    }

    #[test]
    fn inverting_touch_unifies_the_modalities() {
        let m = GestureMapping {
            invert_wheel: false,
            invert_touch: true,
        };
        assert_eq!(
            m.direction(GestureSource::Touch, Motion::Down),
            m.direction(GestureSource::Wheel, Motion::Down)
        );
    }

    #[test]
    fn region_edges() {
        let r = Region {
            x: 10,
            y: 5,
            width: 4,
            height: 2,
        };
        assert!(r.contains(10, 5));
        assert!(r.contains(13, 6));
        assert!(!r.contains(14, 6));
        assert!(!r.contains(12, 7));
        assert!(!r.contains(9, 5));
    }

    #[test]
    fn exclusion_uses_last_known_pointer() {
        let options = Some(Region {
            x: 0,
            y: 0,
            width: 10,
            height: 10,
        });
        let mut pointer = PointerTracker::default();
        assert!(!pointer.is_inside(options));
        pointer.record(3, 3);
        assert!(pointer.is_inside(options));
        assert!(!pointer.is_inside(None));
        pointer.record(30, 3);
        assert!(!pointer.is_inside(options));
    }

    #[test]
    fn swipe_emits_once_per_threshold() {
        let mut swipe = SwipeDetector::new(2);
        assert_eq!(swipe.drag(10), None);
        swipe.press(10);
        assert_eq!(swipe.drag(9), None);
        assert_eq!(swipe.drag(8), Some(Motion::Up));
        assert_eq!(swipe.drag(9), None);
        assert_eq!(swipe.drag(10), Some(Motion::Down));
        swipe.release();
        assert!(!swipe.is_tracking());
    }
}
