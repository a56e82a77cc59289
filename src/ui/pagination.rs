//! Pagination column: a vertical track of numbered bullets shifted so the
//! active bullet sits at the top.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::Theme;
use crate::core::pagination::{bullet_label, track_offset};

/// Rows per bullet.
pub const BULLET_HEIGHT: u16 = 2;

pub struct PaginationWidget {
    pub count: usize,
    pub active: usize,
}

impl Widget for PaginationWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = track_offset(self.active, BULLET_HEIGHT);
        for i in 0..self.count {
            let y = i32::from(area.y) + i as i32 * i32::from(BULLET_HEIGHT) + offset;
            if y < i32::from(area.y) || y >= i32::from(area.bottom()) {
                continue;
            }
            let style = if i == self.active {
                Theme::active_bullet_style()
            } else {
                Theme::bullet_style()
            };
            Paragraph::new(Line::from(Span::styled(bullet_label(i, self.count), style)))
                .alignment(Alignment::Center)
                .render(Rect::new(area.x, y as u16, area.width, 1), buf);
        }
    }
}

/// Bullet index under `row`, given the same track shift the widget uses.
pub fn bullet_at(area: Rect, row: u16, active: usize, count: usize) -> Option<usize> {
    if row < area.y || row >= area.bottom() {
        return None;
    }
    let rel = row - area.y;
    if rel % BULLET_HEIGHT != 0 {
        return None;
    }
    let index = active + usize::from(rel / BULLET_HEIGHT);
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_rows_are_relative_to_the_active_one() {
        let area = Rect::new(0, 2, 5, 10);
        assert_eq!(bullet_at(area, 2, 3, 6), Some(3));
        assert_eq!(bullet_at(area, 4, 3, 6), Some(4));
        assert_eq!(bullet_at(area, 3, 3, 6), None);
        assert_eq!(bullet_at(area, 8, 3, 6), None);
        assert_eq!(bullet_at(area, 1, 3, 6), None);
    }

    #[test]
    fn active_bullet_renders_on_the_first_row() {
        let area = Rect::new(0, 0, 3, 6);
        let mut buf = Buffer::empty(area);
        PaginationWidget { count: 4, active: 3 }.render(area, &mut buf);
        assert_eq!(buf[(1, 0)].symbol(), "?");
        assert_eq!(buf[(1, 2)].symbol(), " ");
    }
}
