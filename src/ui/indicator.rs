//! Cooldown indicator: a small spinner + remaining time rendered in the
//! top-right corner of the slide stage while the navigator is cooling.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Braille-dot spinner frames.  Cycles through these on each tick.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct CooldownIndicator {
    /// `None` when the navigator is idle.
    pub remaining: Option<Duration>,
    pub tick: u64,
}

impl Widget for CooldownIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(remaining) = self.remaining else {
            return;
        };
        if area.width < 20 || area.height == 0 {
            return;
        }

        let frame = SPINNER_FRAMES[(self.tick as usize) % SPINNER_FRAMES.len()];
        let label = format!(" {frame} cooling {:.1}s ", remaining.as_secs_f64());

        let label_width = label.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(label_width + 2);

        let line = Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

        buf.set_line(x, area.y, &line, label_width);
    }
}
