//! Central application state.
//!
//! All mutable state lives here so that rendering is a function over
//! `&mut AppState` and event handling mutates it in one place.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    catalog::Catalog,
    clock::SystemClock,
    error::Result,
    gesture::{PointerTracker, SwipeDetector},
    modal::VideoModal,
    navigator::Navigator,
    select::SeriesSelect,
    track::SlideTrack,
    visibility::{ContentVisibility, VisibilitySync},
};
use crate::ui::smooth_scroll::SmoothScroll;

pub type CarouselNavigator = Navigator<SlideTrack, ContentVisibility, SystemClock>;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Carousel,
    SettingsMenu,
}

pub struct AppState {
    pub catalog: Catalog,
    /// Owns the slide track and the content visibility.
    pub navigator: CarouselNavigator,
    pub select: SeriesSelect,
    pub modal: VideoModal,
    /// Last pointer position, for the options-panel exclusion.
    pub pointer: PointerTracker,
    pub swipe: SwipeDetector,
    /// Horizontal slide motion of the card track.
    pub slide_motion: SmoothScroll,
    pub config: AppConfig,
    pub active_view: ActiveView,
    pub settings_selected: usize,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Full terminal area from the last draw, used for mouse hit-testing.
    pub terminal_area: Rect,
    /// Monotonic tick counter (drives the cooldown spinner).
    pub tick: u64,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Result<Self> {
        let track = SlideTrack::new(catalog.slides.len())?;
        let mut visibility = ContentVisibility::new(catalog.items.len(), catalog.panel_tags());
        visibility.sync(0);
        let navigator = Navigator::new(track, visibility, SystemClock, config.cooldown())?;

        Ok(Self {
            catalog,
            navigator,
            select: SeriesSelect::default(),
            modal: VideoModal::default(),
            pointer: PointerTracker::default(),
            swipe: SwipeDetector::new(config.swipe_rows),
            slide_motion: SmoothScroll::new(0.35),
            config,
            active_view: ActiveView::default(),
            settings_selected: 0,
            should_quit: false,
            status_message: None,
            terminal_area: Rect::default(),
            tick: 0,
        })
    }

    /// Periodic housekeeping: fire the cooldown timer, advance the modal,
    /// decay the slide motion.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.navigator.poll();
        self.modal.tick(now);
        self.slide_motion.tick();
    }
}
