//! Column-level slide motion with exponential ease-out.
//!
//! When the active slide changes, the card track is displaced by the number
//! of slides moved × the card span, then the displacement decays toward zero
//! each tick so the cards glide into place instead of jumping.

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    /// Current column displacement.  Positive = cards still right of their
    /// resting place (moving forward); negative = left of it.
    col_offset: f64,
    prev_target: usize,
    /// `offset *= (1 - speed)` each tick.  0.3–0.4 settles in about half a
    /// second at 20 fps.
    speed: f64,
}

impl SmoothScroll {
    pub fn new(speed: f64) -> Self {
        Self {
            col_offset: 0.0,
            prev_target: 0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Feed the active slide and the column span of one card (width + gap).
    pub fn set_target(&mut self, target: usize, card_span: f64) {
        if target != self.prev_target {
            let delta = target as f64 - self.prev_target as f64;
            self.col_offset += delta * card_span;
            self.prev_target = target;
        }
    }

    pub fn tick(&mut self) {
        self.col_offset *= 1.0 - self.speed;
        if self.col_offset.abs() < 0.4 {
            self.col_offset = 0.0;
        }
    }

    pub fn col_offset(&self) -> i32 {
        self.col_offset.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_follows_direction_and_settles() {
        let mut s = SmoothScroll::new(0.5);
        s.set_target(2, 10.0);
        assert_eq!(s.col_offset(), 20);
        s.set_target(1, 10.0);
        assert_eq!(s.col_offset(), 10);
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s.col_offset(), 0);
    }
}
