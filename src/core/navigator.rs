//! Gesture-driven carousel navigation.
//!
//! Directional intents from the wheel, a swipe, or the keyboard move a single
//! bounded cursor over the slides.  After an accepted step the navigator
//! cools down for a fixed window; intents arriving meanwhile are dropped, so a
//! burst of wheel ticks collapses into one step.
//!
//! The state machine is split in two:
//!
//! * [`transition`] is pure: `(state, direction) -> (state, effects)`.
//! * [`Navigator`] owns the state, the cooldown deadline, and the
//!   collaborators (slide widget, visibility sync, clock) and executes the
//!   effects in order.

use std::time::{Duration, Instant};

use super::clock::Clock;
use super::error::{CarouselError, Result};
use super::track::SlideWidget;
use super::visibility::VisibilitySync;

/// Default cooldown window after an accepted step.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(1000);

// ───────────────────────────────────────── direction ─────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl TryFrom<i32> for Direction {
    type Error = CarouselError;

    /// Positive signs step forward, negative signs step back.
    fn try_from(sign: i32) -> Result<Self> {
        match sign.signum() {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            _ => Err(CarouselError::InvalidArgument(
                "direction sign must be non-zero".into(),
            )),
        }
    }
}

// ───────────────────────────────────────── state ─────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Cooling,
}

/// Cursor over a fixed number of slides plus the cooling flag.
///
/// `cursor < slide_count` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    cursor: usize,
    slide_count: usize,
    cooling: bool,
}

impl CarouselState {
    pub fn new(slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(CarouselError::PreconditionFailed(
                "carousel needs at least one slide".into(),
            ));
        }
        Ok(Self {
            cursor: 0,
            slide_count,
            cooling: false,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_cooling(&self) -> bool {
        self.cooling
    }

    pub fn phase(&self) -> Phase {
        if self.cooling {
            Phase::Cooling
        } else {
            Phase::Idle
        }
    }

    /// Same state with the cursor moved to `index` (cooling untouched).
    pub fn with_cursor(self, index: usize) -> Result<Self> {
        if index >= self.slide_count {
            return Err(CarouselError::InvalidArgument(format!(
                "slide index {index} out of range (0..{})",
                self.slide_count
            )));
        }
        Ok(Self {
            cursor: index,
            ..self
        })
    }

    /// Same state with the cooldown cleared.
    pub fn cooled(self) -> Self {
        Self {
            cooling: false,
            ..self
        }
    }
}

// ───────────────────────────────────────── transition ────────

/// Side effects of an accepted step, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ArmCooldown,
    MoveToSlide(usize),
    SyncVisibility(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: CarouselState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn dropped(state: CarouselState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn accepted(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// One step of the carousel state machine.
///
/// While cooling the intent is dropped.  Otherwise the cooldown is engaged
/// even when the cursor sits on the boundary and cannot move.
pub fn transition(state: CarouselState, direction: Direction) -> Transition {
    if state.cooling {
        return Transition::dropped(state);
    }

    let cursor = match direction {
        Direction::Forward if state.cursor + 1 < state.slide_count => state.cursor + 1,
        Direction::Backward if state.cursor > 0 => state.cursor - 1,
        _ => state.cursor,
    };

    Transition {
        state: CarouselState {
            cursor,
            cooling: true,
            ..state
        },
        effects: vec![
            Effect::ArmCooldown,
            Effect::MoveToSlide(cursor),
            Effect::SyncVisibility(cursor),
        ],
    }
}

/// Guarded entry point used by gesture sources.
///
/// Backward intents on the first slide never reach [`transition`], so they
/// do not engage the cooldown.  Forward intents always do.
pub fn intent(state: CarouselState, direction: Direction) -> Transition {
    if direction == Direction::Backward && state.cursor == 0 {
        return Transition::dropped(state);
    }
    transition(state, direction)
}

// ───────────────────────────────────────── navigator ─────────

/// Cooldown deadline owned by the navigator.
#[derive(Debug, Clone)]
struct Cooldown {
    window: Duration,
    deadline: Option<Instant>,
}

impl Cooldown {
    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    fn expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

/// Stateful carousel navigator with injected collaborators.
#[derive(Debug)]
pub struct Navigator<W, V, C> {
    state: CarouselState,
    cooldown: Cooldown,
    widget: W,
    sync: V,
    clock: C,
}

impl<W: SlideWidget, V: VisibilitySync, C: Clock> Navigator<W, V, C> {
    /// Build a navigator over `widget`, starting at the widget's active slide.
    pub fn new(widget: W, sync: V, clock: C, window: Duration) -> Result<Self> {
        let state = CarouselState::new(widget.slide_count())?
            .with_cursor(widget.active_index())
            .map_err(|e| CarouselError::PreconditionFailed(e.to_string()))?;
        Ok(Self {
            state,
            cooldown: Cooldown {
                window,
                deadline: None,
            },
            widget,
            sync,
            clock,
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn is_cooling(&self) -> bool {
        self.state.cooling
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access for the widget's own controls.  Call [`Self::resync`]
    /// after moving it.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub fn visibility(&self) -> &V {
        &self.sync
    }

    pub fn window(&self) -> Duration {
        self.cooldown.window
    }

    /// Change the cooldown window.  A cooldown already armed keeps its
    /// deadline.
    pub fn set_window(&mut self, window: Duration) {
        self.cooldown.window = window;
    }

    /// Time left in the current cooldown, `None` when idle.
    pub fn cooldown_remaining(&self) -> Option<Duration> {
        if !self.state.cooling {
            return None;
        }
        self.cooldown.remaining(self.clock.now())
    }

    /// Fire the cooldown timer if its deadline has passed.  Returns `true`
    /// when the navigator went back to idle.
    pub fn poll(&mut self) -> bool {
        if self.state.cooling && self.cooldown.expired(self.clock.now()) {
            self.state = self.state.cooled();
            self.cooldown.deadline = None;
            tracing::trace!("carousel cooldown elapsed");
            return true;
        }
        false
    }

    /// Step unconditionally (subject to the cooldown).
    pub fn step(&mut self, direction: Direction) -> bool {
        self.poll();
        let t = transition(self.state, direction);
        self.apply(t, direction)
    }

    /// Step from a raw direction sign.
    pub fn step_sign(&mut self, sign: i32) -> Result<bool> {
        Ok(self.step(Direction::try_from(sign)?))
    }

    /// Guarded step used by gesture sources: backward intents on the first
    /// slide are ignored without engaging the cooldown.
    pub fn intent(&mut self, direction: Direction) -> bool {
        self.poll();
        let t = intent(self.state, direction);
        self.apply(t, direction)
    }

    /// Re-derive the cursor from the widget after it moved on its own.
    pub fn resync(&mut self) -> Result<()> {
        let active = self.widget.active_index();
        self.state = self.state.with_cursor(active)?;
        self.sync.sync(active);
        tracing::debug!(cursor = active, "carousel resynced from widget");
        Ok(())
    }

    fn apply(&mut self, t: Transition, direction: Direction) -> bool {
        if !t.accepted() {
            tracing::debug!(?direction, cursor = self.state.cursor, "carousel intent dropped");
            return false;
        }
        self.state = t.state;
        for effect in t.effects {
            match effect {
                Effect::ArmCooldown => self.cooldown.arm(self.clock.now()),
                Effect::MoveToSlide(i) => self.widget.move_to_index(i),
                Effect::SyncVisibility(i) => self.sync.sync(i),
            }
        }
        tracing::debug!(?direction, cursor = self.state.cursor, "carousel step");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;
    use crate::core::track::SlideTrack;

    type Synced = std::rc::Rc<std::cell::RefCell<Vec<usize>>>;

    fn navigator(
        count: usize,
        start: usize,
    ) -> (
        Navigator<SlideTrack, impl FnMut(usize), ManualClock>,
        ManualClock,
        Synced,
    ) {
        let mut track = SlideTrack::new(count).unwrap();
        track.move_to_index(start);
        let clock = ManualClock::new();
        let synced: Synced = Default::default();
        let sink = {
            let synced = synced.clone();
            move |c: usize| synced.borrow_mut().push(c)
        };
        let nav = Navigator::new(track, sink, clock.clone(), DEFAULT_COOLDOWN).unwrap();
        (nav, clock, synced)
    }

    #[test]
    fn zero_sign_is_invalid() {
        assert!(matches!(
            Direction::try_from(0),
            Err(CarouselError::InvalidArgument(_))
        ));
        assert_eq!(Direction::try_from(7).unwrap(), Direction::Forward);
        assert_eq!(Direction::try_from(-3).unwrap(), Direction::Backward);
    }

    #[test]
    fn empty_carousel_fails_precondition() {
        assert!(matches!(
            CarouselState::new(0),
            Err(CarouselError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn pure_transition_emits_effects_in_order() {
        let state = CarouselState::new(5).unwrap();
        let t = transition(state, Direction::Forward);
        assert_eq!(t.state.cursor(), 1);
        assert_eq!(t.state.phase(), Phase::Cooling);
        assert_eq!(
            t.effects,
            vec![
                Effect::ArmCooldown,
                Effect::MoveToSlide(1),
                Effect::SyncVisibility(1)
            ]
        );

        let again = transition(t.state, Direction::Forward);
        assert!(!again.accepted());
        assert_eq!(again.state, t.state);
    }

    #[test]
    fn guarded_backward_on_first_slide_does_not_cool() {
        let state = CarouselState::new(5).unwrap();
        let t = intent(state, Direction::Backward);
        assert!(!t.accepted());
        assert!(!t.state.is_cooling());
    }

    #[test]
    fn backward_at_start_stays_put_but_cools() {
        let (mut nav, _clock, synced) = navigator(5, 0);
        assert!(nav.step(Direction::Backward));
        assert_eq!(nav.cursor(), 0);
        assert!(nav.is_cooling());
        assert_eq!(*synced.borrow(), vec![0]);
    }

    #[test]
    fn forward_from_start_moves_widget_and_syncs() {
        let (mut nav, _clock, synced) = navigator(5, 0);
        assert!(nav.step(Direction::Forward));
        assert_eq!(nav.cursor(), 1);
        assert_eq!(nav.widget().active_index(), 1);
        assert!(nav.is_cooling());
        assert_eq!(*synced.borrow(), vec![1]);
    }

    #[test]
    fn forward_at_last_slide_still_cools() {
        let (mut nav, _clock, _synced) = navigator(5, 4);
        assert!(nav.intent(Direction::Forward));
        assert_eq!(nav.cursor(), 4);
        assert!(nav.is_cooling());
    }

    #[test]
    fn burst_within_window_collapses_to_one_step() {
        let (mut nav, clock, synced) = navigator(5, 0);
        nav.step(Direction::Forward);
        clock.advance(Duration::from_millis(10));
        assert!(!nav.step(Direction::Forward));
        assert_eq!(nav.cursor(), 1);
        assert_eq!(synced.borrow().len(), 1);
    }

    #[test]
    fn dropped_steps_do_not_extend_the_cooldown() {
        let (mut nav, clock, _synced) = navigator(5, 0);
        nav.step(Direction::Forward);
        clock.advance(Duration::from_millis(900));
        nav.step(Direction::Forward);
        clock.advance(Duration::from_millis(100));
        assert!(nav.poll());
        assert!(!nav.is_cooling());
    }

    #[test]
    fn exactly_one_step_per_elapsed_window() {
        let (mut nav, clock, _synced) = navigator(5, 0);
        nav.step(Direction::Forward);
        clock.advance(DEFAULT_COOLDOWN);
        assert!(nav.step(Direction::Forward));
        assert!(!nav.step(Direction::Forward));
        assert_eq!(nav.cursor(), 2);
        assert_eq!(nav.cooldown_remaining(), Some(DEFAULT_COOLDOWN));
    }

    #[test]
    fn cursor_never_leaves_range() {
        let (mut nav, clock, _synced) = navigator(3, 0);
        let pattern = [1, 1, 1, 1, -1, -1, -1, -1, 1, -1, 1, 1, 1];
        for (i, sign) in pattern.iter().cycle().take(60).enumerate() {
            nav.step_sign(*sign).unwrap();
            assert!(nav.cursor() < 3);
            if i % 2 == 0 {
                clock.advance(DEFAULT_COOLDOWN);
            }
        }
    }

    #[test]
    fn resync_follows_widget_controls() {
        let (mut nav, _clock, synced) = navigator(5, 0);
        nav.widget_mut().slide_next();
        nav.widget_mut().slide_next();
        nav.resync().unwrap();
        assert_eq!(nav.cursor(), 2);
        assert_eq!(*synced.borrow(), vec![2]);
        assert!(nav.intent(Direction::Backward));
        assert_eq!(nav.cursor(), 1);
    }

    #[test]
    fn navigator_starts_from_widget_position() {
        let (nav, _clock, _synced) = navigator(5, 3);
        assert_eq!(nav.cursor(), 3);
        assert!(!nav.is_cooling());
    }
}
