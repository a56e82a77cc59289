//! Video modal overlay.
//!
//! Centred over the page with a close button on the top-right corner of its
//! border.  While fading, the frame is drawn dimmed.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::core::modal::VideoModal;

pub struct VideoModalWidget<'a> {
    pub modal: &'a VideoModal,
    pub now: Instant,
}

impl VideoModalWidget<'_> {
    /// Overlay area: centred, 70% of the terminal.
    pub fn overlay_area(terminal: Rect) -> Rect {
        let margin_x = (terminal.width as f32 * 0.15).round() as u16;
        let margin_y = (terminal.height as f32 * 0.15).round() as u16;
        Rect::new(
            terminal.x + margin_x,
            terminal.y + margin_y,
            terminal.width.saturating_sub(margin_x * 2).max(20),
            terminal.height.saturating_sub(margin_y * 2).max(6),
        )
        .intersection(terminal)
    }

    /// The `[X]` hit zone for a given terminal size.
    pub fn close_rect(terminal: Rect) -> Rect {
        let area = Self::overlay_area(terminal);
        Rect::new(area.x + area.width.saturating_sub(5), area.y, 3, 1).intersection(terminal)
    }
}

impl Widget for VideoModalWidget<'_> {
    fn render(self, terminal: Rect, buf: &mut Buffer) {
        if !self.modal.is_visible() {
            return;
        }
        let area = Self::overlay_area(terminal);
        Clear.render(area, buf);

        let opacity = self.modal.opacity(self.now);
        let (frame_colour, text_colour) = if opacity >= 0.66 {
            (Color::LightBlue, Color::White)
        } else if opacity >= 0.33 {
            (Color::Blue, Color::Gray)
        } else {
            (Color::DarkGray, Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(frame_colour))
            .title(Span::styled(
                format!(" {} ", self.modal.title()),
                Style::default().fg(text_colour).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            "[X]",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )))
        .render(Self::close_rect(terminal), buf);

        let pad = inner.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::raw(""); pad as usize];
        lines.push(Line::from(Span::styled(
            "▶",
            Style::default().fg(text_colour).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            self.modal.src(),
            Style::default().fg(text_colour),
        )));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let footer_y = inner.y + inner.height.saturating_sub(1);
        Paragraph::new(Line::from(Span::styled(
            " Esc close ",
            Style::default().fg(Color::DarkGray),
        )))
        .render(Rect::new(inner.x, footer_y, inner.width, inner.height.min(1)), buf);
    }
}
