//! Layout helpers: split the terminal into the page regions.
//!
//! The same layout is computed for drawing and for mouse hit-testing, so
//! every clickable rect is derived here.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::gesture::Region;

const PAGINATION_WIDTH: u16 = 5;
const SIDE_WIDTH: u16 = 36;
const PREV_LABEL_WIDTH: u16 = 8;
const NEXT_LABEL_WIDTH: u16 = 8;
const PLAY_LABEL_WIDTH: u16 = 10;

/// Page layout: pagination | slide stage | series column, with a status bar.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    pub pagination_area: Rect,
    pub stage_area: Rect,
    /// Inside the stage border, above the button row.
    pub track_area: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub trigger_area: Rect,
    pub options_area: Rect,
    pub panel_area: Rect,
    pub play_button: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.  `item_count` sizes
    /// the options panel.
    pub fn from_area(area: Rect, item_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // page body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PAGINATION_WIDTH),
                Constraint::Min(20),
                Constraint::Length(SIDE_WIDTH),
            ])
            .split(rows[0]);

        let stage_area = columns[1];
        let stage_inner = inset(stage_area);
        let stage_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(stage_inner);
        let button_row = stage_rows[1];

        let options_height = u16::try_from(item_count).unwrap_or(u16::MAX).saturating_add(2);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(options_height),
                Constraint::Min(4),
            ])
            .split(columns[2]);

        let panel_area = side[2];
        let panel_inner = inset(panel_area);
        let play_button = Rect::new(
            panel_inner.x,
            panel_inner.y + panel_inner.height.saturating_sub(1),
            PLAY_LABEL_WIDTH.min(panel_inner.width),
            panel_inner.height.min(1),
        );

        Self {
            pagination_area: columns[0],
            stage_area,
            track_area: stage_rows[0],
            prev_button: Rect::new(
                button_row.x,
                button_row.y,
                PREV_LABEL_WIDTH.min(button_row.width),
                button_row.height,
            ),
            next_button: Rect::new(
                button_row.x + button_row.width.saturating_sub(NEXT_LABEL_WIDTH),
                button_row.y,
                NEXT_LABEL_WIDTH.min(button_row.width),
                button_row.height,
            ),
            trigger_area: side[0],
            options_area: side[1],
            panel_area,
            play_button,
            status_area: rows[1],
        }
    }

    /// The options panel as a gesture-exclusion region.
    pub fn options_region(&self) -> Region {
        Region {
            x: self.options_area.x,
            y: self.options_area.y,
            width: self.options_area.width,
            height: self.options_area.height,
        }
    }
}

pub fn point_in_rect(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x
        && col < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Area inside a one-cell border.
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_do_not_overlap_on_a_normal_terminal() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 120, 40), 5);
        assert_eq!(layout.options_area.height, 7);
        assert!(layout.pagination_area.right() <= layout.stage_area.x);
        assert!(layout.stage_area.right() <= layout.options_area.x);
        assert!(layout.prev_button.right() <= layout.next_button.x);
        assert!(point_in_rect(layout.panel_area, layout.play_button.x, layout.play_button.y));
        assert_eq!(layout.status_area.y, 39);
    }

    #[test]
    fn options_region_matches_options_area() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 120, 40), 3);
        let region = layout.options_region();
        assert!(region.contains(layout.options_area.x, layout.options_area.y));
        assert!(!region.contains(layout.trigger_area.x, layout.trigger_area.y));
    }
}
