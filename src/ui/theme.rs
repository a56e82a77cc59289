//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── slides ─────────────────────────────────────────────────
    pub fn card_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn active_card_style() -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_title_style() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    // ── pagination & series ────────────────────────────────────
    pub fn bullet_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Stand-in for the gradient text of the active bullet.
    pub fn active_bullet_style() -> Style {
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_style() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn active_item_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_style() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn dim_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
