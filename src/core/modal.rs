//! Video modal lifecycle.
//!
//! Opening fades the modal in.  Closing fades it out, then waits a little
//! longer before hiding it and clearing the video source.  Time is passed in
//! explicitly so the lifecycle can be stepped deterministically.

use std::time::{Duration, Instant};

/// Fade-in / fade-out duration.
pub const FADE: Duration = Duration::from_millis(300);
/// Extra delay after the fade-out before the modal is hidden.
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Hidden,
    FadingIn { since: Instant },
    Shown,
    FadingOut { since: Instant },
}

#[derive(Debug, Clone)]
pub struct VideoModal {
    phase: ModalPhase,
    src: String,
    title: String,
}

impl Default for VideoModal {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Hidden,
            src: String::new(),
            title: String::new(),
        }
    }
}

impl VideoModal {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    /// Show the modal for `src`.  Source and title are only replaced when
    /// they differ, so reopening the same video keeps its state.
    pub fn open(&mut self, src: &str, title: &str, now: Instant) {
        if self.src != src {
            self.src = src.to_string();
        }
        if self.title != title {
            self.title = title.to_string();
        }
        self.phase = ModalPhase::FadingIn { since: now };
        tracing::debug!(src, title, "video modal opened");
    }

    pub fn close(&mut self, now: Instant) {
        if matches!(self.phase, ModalPhase::Hidden | ModalPhase::FadingOut { .. }) {
            return;
        }
        self.phase = ModalPhase::FadingOut { since: now };
    }

    /// Advance the lifecycle.  Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            ModalPhase::FadingIn { since } if now.duration_since(since) >= FADE => {
                self.phase = ModalPhase::Shown;
                true
            }
            ModalPhase::FadingOut { since } if now.duration_since(since) >= FADE + HIDE_DELAY => {
                self.phase = ModalPhase::Hidden;
                self.src.clear();
                tracing::debug!("video modal hidden");
                true
            }
            _ => false,
        }
    }

    /// Opacity in `0.0..=1.0` at `now`, with ease-out on the way in and
    /// ease-in on the way out.
    pub fn opacity(&self, now: Instant) -> f64 {
        match self.phase {
            ModalPhase::Hidden => 0.0,
            ModalPhase::Shown => 1.0,
            ModalPhase::FadingIn { since } => {
                let t = progress(since, now);
                1.0 - (1.0 - t).powi(2)
            }
            ModalPhase::FadingOut { since } => {
                let t = progress(since, now);
                1.0 - t * t
            }
        }
    }
}

fn progress(since: Instant, now: Instant) -> f64 {
    (now.duration_since(since).as_secs_f64() / FADE.as_secs_f64()).clamp(0.0, 1.0)
}
