//! Slide track widget: centered cards with the active slide in the middle.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Theme;
use crate::core::pagination::bullet_label;

/// Slide aspect ratio (width / height) of the page's keyboard slides.
pub const SLIDE_ASPECT: f64 = 1.34;
const CARD_GAP: u16 = 2;

/// Card width in columns for a track `height` rows tall.  Terminal cells are
/// roughly twice as tall as they are wide.
pub fn card_width(height: u16, max_width: u16) -> u16 {
    let w = (f64::from(height) * SLIDE_ASPECT * 2.0).floor() as u16;
    w.min(max_width.saturating_sub(4)).max(8)
}

/// Column span of one card including the gap to its neighbour.
pub fn card_span(height: u16, max_width: u16) -> u16 {
    card_width(height, max_width) + CARD_GAP
}

pub struct CarouselWidget<'a> {
    slides: &'a [String],
    active: usize,
    col_offset: i32,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(slides: &'a [String], active: usize) -> Self {
        Self {
            slides,
            active,
            col_offset: 0,
        }
    }

    /// Displacement from the slide motion animator.
    pub fn col_offset(mut self, offset: i32) -> Self {
        self.col_offset = offset;
        self
    }
}

impl Widget for CarouselWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 3 {
            return;
        }

        let width = card_width(area.height, area.width);
        let span = i32::from(width + CARD_GAP);
        let centre_x =
            i32::from(area.x) + i32::from(area.width.saturating_sub(width) / 2) + self.col_offset;
        let left = i32::from(area.x);
        let right = i32::from(area.right());
        let count = self.slides.len();

        for (i, title) in self.slides.iter().enumerate() {
            let x = centre_x + (i as i32 - self.active as i32) * span;
            let x0 = x.max(left);
            let x1 = (x + i32::from(width)).min(right);
            if x1 - x0 < 3 {
                continue;
            }
            // Both bounds are inside `area`, so they fit in u16.
            let card = Rect::new(x0 as u16, area.y, (x1 - x0) as u16, area.height);

            let active = i == self.active;
            let border_style = if active {
                Theme::active_card_style()
            } else {
                Theme::card_style()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if active {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style)
                .title(Span::styled(
                    format!(" {} ", bullet_label(i, count)),
                    border_style,
                ));
            let inner = block.inner(card);
            block.render(card, buf);

            if inner.height == 0 {
                continue;
            }
            let pad = inner.height.saturating_sub(1) / 2;
            let mut lines = vec![Line::raw(""); pad as usize];
            lines.push(Line::from(Span::styled(title.as_str(), Theme::card_title_style())));
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_width_follows_aspect_and_fits_the_area() {
        assert_eq!(card_width(10, 200), 26);
        assert_eq!(card_width(30, 50), 46);
        assert_eq!(card_width(1, 200), 8);
    }

    #[test]
    fn active_card_is_drawn_in_the_middle() {
        let slides: Vec<String> = ["Intro", "One", "Two"].iter().map(|s| s.to_string()).collect();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        CarouselWidget::new(&slides, 1).render(area, &mut buf);

        let width = card_width(6, 60);
        let x = (60 - width) / 2;
        // Thick top-left corner marks the active card.
        assert_eq!(buf[(x, 0)].symbol(), "┏");
    }
}
