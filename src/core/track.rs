//! The slide widget the navigator drives.
//!
//! [`SlideWidget`] is the narrow contract the navigator needs; [`SlideTrack`]
//! is the concrete track the app renders.  The track also has its own
//! prev/next buttons and direct jumps, which move it without going through
//! the navigator, so the navigator must resync afterwards.

use super::error::{CarouselError, Result};

/// What the navigator needs from a slide widget.
pub trait SlideWidget {
    /// Number of slides (fixed for the widget's lifetime).
    fn slide_count(&self) -> usize;
    /// Index of the slide currently shown.
    fn active_index(&self) -> usize;
    /// Show slide `index`.  Out-of-range indices are clamped.
    fn move_to_index(&mut self, index: usize);
}

/// Fixed-size slide track with clamped navigation.
#[derive(Debug, Clone)]
pub struct SlideTrack {
    count: usize,
    active: usize,
}

impl SlideTrack {
    /// A track over `count` slides, starting at the first.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(CarouselError::PreconditionFailed(
                "slide track needs at least one slide".into(),
            ));
        }
        Ok(Self { count, active: 0 })
    }

    /// Navigation "next" button.  Returns `true` if the track moved.
    pub fn slide_next(&mut self) -> bool {
        let before = self.active;
        self.move_to_index(self.active + 1);
        before != self.active
    }

    /// Navigation "prev" button.  Returns `true` if the track moved.
    pub fn slide_prev(&mut self) -> bool {
        let before = self.active;
        self.move_to_index(self.active.saturating_sub(1));
        before != self.active
    }
}

impl SlideWidget for SlideTrack {
    fn slide_count(&self) -> usize {
        self.count
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn move_to_index(&mut self, index: usize) {
        self.active = index.min(self.count - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_track_is_rejected() {
        assert!(matches!(
            SlideTrack::new(0),
            Err(CarouselError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn buttons_clamp_at_both_ends() {
        let mut track = SlideTrack::new(3).unwrap();
        assert!(!track.slide_prev());
        assert!(track.slide_next());
        assert!(track.slide_next());
        assert!(!track.slide_next());
        assert_eq!(track.active_index(), 2);
    }

    #[test]
    fn jumps_past_the_end_land_on_last_slide() {
        let mut track = SlideTrack::new(4).unwrap();
        track.move_to_index(99);
        assert_eq!(track.active_index(), 3);
    }
}
