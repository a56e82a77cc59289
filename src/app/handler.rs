//! Input handling: maps key/mouse events to carousel intents and state
//! mutations.
//!
//! Two kinds of navigation reach the slide track:
//!
//! * gestures (wheel, drag swipe, step keys) go through the navigator and
//!   are subject to its cooldown;
//! * the track's own controls (prev/next buttons, pagination bullets,
//!   Home/End) move the track directly and the navigator resyncs from it.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::gesture::{GestureSource, Motion};
use crate::core::navigator::Direction;
use crate::core::track::{SlideTrack, SlideWidget};
use crate::ui::layout::{point_in_rect, AppLayout};
use crate::ui::modal::VideoModalWidget;
use crate::ui::pagination::bullet_at;

use super::settings::SETTINGS_ITEMS;
use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.modal.is_visible() {
        handle_modal_key(state, key);
        return;
    }

    match state.active_view {
        ActiveView::Carousel => handle_carousel_key(state, key),
        ActiveView::SettingsMenu => handle_settings_key(state, key),
    }
}

fn handle_carousel_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Home => {
            jump_to(state, 0);
            return;
        }
        KeyCode::End => {
            jump_to(state, state.catalog.slides.len().saturating_sub(1));
            return;
        }
        KeyCode::Esc if state.select.is_open() => {
            state.select.close();
            return;
        }
        _ => {}
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::OpenSettings => {
            state.active_view = ActiveView::SettingsMenu;
            state.settings_selected = 0;
        }
        Action::PrevSlide => press_track_button(state, SlideTrack::slide_prev),
        Action::NextSlide => press_track_button(state, SlideTrack::slide_next),
        Action::StepBack => {
            state.navigator.intent(Direction::Backward);
        }
        Action::StepForward => {
            state.navigator.intent(Direction::Forward);
        }
        Action::ToggleSeries => state.select.toggle(),
        Action::Play => play_visible_panel(state),
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.modal.close(Instant::now()),
        _ => {
            if state.config.match_key(key) == Some(Action::Quit) {
                state.should_quit = true;
            }
        }
    }
}

fn handle_settings_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            state.active_view = ActiveView::Carousel;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.settings_selected = state.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if state.settings_selected + 1 < SETTINGS_ITEMS.len() {
                state.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            if let Some(item) = SETTINGS_ITEMS.get(state.settings_selected) {
                item.activate(state);
            }
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Carousel {
        return;
    }

    state.pointer.record(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp => gesture(state, GestureSource::Wheel, Motion::Up),
        MouseEventKind::ScrollDown => gesture(state, GestureSource::Wheel, Motion::Down),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.modal.is_visible() {
                if point_in_rect(
                    VideoModalWidget::close_rect(state.terminal_area),
                    mouse.column,
                    mouse.row,
                ) {
                    state.modal.close(Instant::now());
                }
                return;
            }
            if !handle_click(state, mouse.column, mouse.row) {
                state.swipe.press(mouse.row);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(motion) = state.swipe.drag(mouse.row) {
                gesture(state, GestureSource::Touch, motion);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => state.swipe.release(),
        _ => {}
    }
}

/// Hit-test a left click against the page's buttons.  Returns `true` when
/// the click landed on one.
fn handle_click(state: &mut AppState, col: u16, row: u16) -> bool {
    let layout = current_layout(state);

    if point_in_rect(layout.prev_button, col, row) {
        press_track_button(state, SlideTrack::slide_prev);
        return true;
    }
    if point_in_rect(layout.next_button, col, row) {
        press_track_button(state, SlideTrack::slide_next);
        return true;
    }
    if point_in_rect(layout.trigger_area, col, row) {
        state.select.toggle();
        return true;
    }
    if point_in_rect(layout.play_button, col, row) {
        play_visible_panel(state);
        return true;
    }
    if point_in_rect(layout.pagination_area, col, row) {
        let active = state.navigator.widget().active_index();
        if let Some(index) = bullet_at(
            layout.pagination_area,
            row,
            active,
            state.catalog.slides.len(),
        ) {
            jump_to(state, index);
        }
        return true;
    }
    false
}

// ── Navigation ──────────────────────────────────────────────────

fn current_layout(state: &AppState) -> AppLayout {
    AppLayout::from_area(state.terminal_area, state.catalog.items.len())
}

/// Forward a gesture to the navigator unless the pointer was last over the
/// options panel.
fn gesture(state: &mut AppState, source: GestureSource, motion: Motion) {
    let options = current_layout(state).options_region();
    if state.pointer.is_inside(Some(options)) {
        tracing::debug!(?source, ?motion, "gesture over options panel ignored");
        return;
    }
    let direction = state.config.gesture_mapping().direction(source, motion);
    state.navigator.intent(direction);
}

/// Navigation buttons move the track directly; the navigator follows.
fn press_track_button(state: &mut AppState, button: fn(&mut SlideTrack) -> bool) {
    if button(state.navigator.widget_mut()) {
        resync(state);
    }
}

fn jump_to(state: &mut AppState, index: usize) {
    if state.navigator.widget().active_index() == index {
        return;
    }
    state.navigator.widget_mut().move_to_index(index);
    resync(state);
}

fn resync(state: &mut AppState) {
    if let Err(e) = state.navigator.resync() {
        tracing::error!("carousel resync failed: {e}");
        state.status_message = Some(e.to_string());
    }
}

fn play_visible_panel(state: &mut AppState) {
    let panel = state
        .navigator
        .visibility()
        .visible_panel()
        .and_then(|i| state.catalog.panels.get(i));
    match panel {
        Some(panel) => {
            let (src, title) = (panel.video_src.clone(), panel.title.clone());
            state.modal.open(&src, &title, Instant::now());
        }
        None => state.status_message = Some("Nothing to play on this slide".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::catalog::Catalog;
    use crossterm::event::KeyEventKind;
    use ratatui::layout::Rect;

    fn state() -> AppState {
        let mut state = AppState::new(Catalog::builtin(), AppConfig::default()).unwrap();
        state.terminal_area = Rect::new(0, 0, 120, 40);
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        let mut key = KeyEvent::new(code, KeyModifiers::NONE);
        key.kind = KeyEventKind::Press;
        key
    }

    fn stage_point(state: &AppState) -> (u16, u16) {
        let layout = current_layout(state);
        (layout.track_area.x + 2, layout.track_area.y + 2)
    }

    #[test]
    fn wheel_down_steps_forward_once_per_cooldown() {
        let mut state = state();
        let (x, y) = stage_point(&state);
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        assert_eq!(state.navigator.cursor(), 1);
        assert!(state.navigator.is_cooling());
        assert_eq!(state.navigator.visibility().active_item(), Some(0));
    }

    #[test]
    fn zero_cooldown_override_still_collapses_a_burst() {
        let mut config = AppConfig::default();
        config.set_cooldown_ms(0);
        let mut state = AppState::new(Catalog::builtin(), config).unwrap();
        state.terminal_area = Rect::new(0, 0, 120, 40);
        let (x, y) = stage_point(&state);
        for _ in 0..3 {
            handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        }
        assert_eq!(state.navigator.cursor(), 1);
        assert!(state.navigator.is_cooling());
    }

    #[test]
    fn wheel_up_on_first_slide_does_not_cool() {
        let mut state = state();
        let (x, y) = stage_point(&state);
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollUp, x, y));
        assert_eq!(state.navigator.cursor(), 0);
        assert!(!state.navigator.is_cooling());
    }

    #[test]
    fn wheel_over_options_panel_is_ignored() {
        let mut state = state();
        let layout = current_layout(&state);
        let (x, y) = (layout.options_area.x + 1, layout.options_area.y + 1);
        handle_mouse(&mut state, mouse(MouseEventKind::ScrollDown, x, y));
        assert_eq!(state.navigator.cursor(), 0);
        assert!(!state.navigator.is_cooling());
    }

    #[test]
    fn upward_drag_is_a_forward_swipe() {
        let mut state = state();
        let (x, y) = stage_point(&state);
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y + 4));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), x, y + 2));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x, y + 2));
        assert_eq!(state.navigator.cursor(), 1);
    }

    #[test]
    fn next_button_bypasses_cooldown_and_resyncs() {
        let mut state = state();
        handle_key(&mut state, press(KeyCode::Down));
        assert_eq!(state.navigator.cursor(), 1);
        handle_key(&mut state, press(KeyCode::Right));
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.navigator.cursor(), 3);
        assert_eq!(state.navigator.visibility().active_item(), Some(2));
    }

    #[test]
    fn pagination_click_jumps_to_bullet() {
        let mut state = state();
        let layout = current_layout(&state);
        let row = layout.pagination_area.y + 2 * crate::ui::pagination::BULLET_HEIGHT;
        handle_mouse(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), layout.pagination_area.x + 1, row),
        );
        assert_eq!(state.navigator.cursor(), 2);
        assert!(!state.navigator.is_cooling());
    }

    #[test]
    fn end_key_jumps_to_teaser_slide() {
        let mut state = state();
        handle_key(&mut state, press(KeyCode::End));
        assert_eq!(state.navigator.cursor(), state.catalog.slides.len() - 1);
    }

    #[test]
    fn play_opens_modal_for_visible_panel_and_esc_closes() {
        let mut state = state();
        handle_key(&mut state, press(KeyCode::Enter));
        assert!(state.modal.is_visible());
        assert_eq!(state.modal.title(), "Trailer");

        // Navigation keys are inert while the modal is up.
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.navigator.cursor(), 0);

        handle_key(&mut state, press(KeyCode::Esc));
        assert!(matches!(
            state.modal.phase(),
            crate::core::modal::ModalPhase::FadingOut { .. }
        ));
    }

    #[test]
    fn trigger_click_toggles_series_select() {
        let mut state = state();
        let layout = current_layout(&state);
        let (x, y) = (layout.trigger_area.x + 2, layout.trigger_area.y + 1);
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x, y));
        assert!(state.select.is_open());
        handle_key(&mut state, press(KeyCode::Esc));
        assert!(!state.select.is_open());
    }
}
