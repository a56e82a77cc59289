//! Series column: the select trigger, its options panel, and the content
//! panel for the current slide.

use ratatui::{
    buffer::Buffer,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::layout::AppLayout;
use super::theme::Theme;
use crate::core::{catalog::Catalog, select::SeriesSelect, visibility::ContentVisibility};

pub struct SeriesColumn<'a> {
    pub catalog: &'a Catalog,
    pub select: SeriesSelect,
    pub visibility: &'a ContentVisibility,
}

impl SeriesColumn<'_> {
    pub fn render_into(self, layout: &AppLayout, buf: &mut Buffer) {
        self.render_trigger(layout, buf);
        if self.select.is_open() {
            self.render_options(layout, buf);
        }
        self.render_panel(layout, buf);
    }

    fn render_trigger(&self, layout: &AppLayout, buf: &mut Buffer) {
        let label = self
            .visibility
            .active_item()
            .and_then(|i| self.catalog.items.get(i))
            .map(String::as_str)
            .unwrap_or("Select an episode");

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style())
            .title(" Series ")
            .title_style(Theme::title_style());
        let inner = block.inner(layout.trigger_area);
        block.render(layout.trigger_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", self.select.icon()), Theme::button_style()),
            Span::styled(label, Theme::item_style()),
        ]))
        .render(inner, buf);
    }

    fn render_options(&self, layout: &AppLayout, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::dim_style());
        let inner = block.inner(layout.options_area);
        block.render(layout.options_area, buf);

        let active = self.visibility.active_item();
        let lines: Vec<Line> = self
            .catalog
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if Some(i) == active {
                    Line::from(Span::styled(format!(" ▸ {item}"), Theme::active_item_style()))
                } else {
                    Line::from(Span::styled(format!("   {item}"), Theme::item_style()))
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_panel(&self, layout: &AppLayout, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style());
        let inner = block.inner(layout.panel_area);
        block.render(layout.panel_area, buf);

        let Some(panel) = self
            .visibility
            .visible_panel()
            .and_then(|i| self.catalog.panels.get(i))
        else {
            Paragraph::new(Line::from(Span::styled("Nothing to watch yet", Theme::dim_style())))
                .render(inner, buf);
            return;
        };

        Paragraph::new(vec![
            Line::from(Span::styled(panel.title.as_str(), Theme::card_title_style())),
            Line::from(Span::styled(panel.video_src.as_str(), Theme::dim_style())),
        ])
        .wrap(Wrap { trim: true })
        .render(inner, buf);

        Paragraph::new(Line::from(Span::styled("[ ▶ Play ]", Theme::button_style())))
            .render(layout.play_button, buf);
    }
}
