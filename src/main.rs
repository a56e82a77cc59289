//! A podcast-series carousel for the terminal.
//!
//! Scroll the wheel, drag up/down, or use the step keys to move through the
//! slides; rapid input collapses into one step per cooldown window.
//! Run with `--print-catalog` to dump the built-in catalog as a template.

mod app;
mod config;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use series_carousel::core;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState},
};
use crate::core::catalog::Catalog;
use crate::core::track::SlideWidget;
use crate::ui::{
    carousel::{card_span, CarouselWidget},
    indicator::CooldownIndicator,
    layout::AppLayout,
    modal::VideoModalWidget,
    pagination::PaginationWidget,
    popup::SettingsPopup,
    series::SeriesColumn,
    theme::Theme,
};

/// Event-loop tick; also the animation frame rate (20 fps).
const TICK_RATE: Duration = Duration::from_millis(50);

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Podcast-series carousel")]
struct Cli {
    /// Catalog file (slides, series items, panels).  Uses the built-in
    /// catalog when omitted.
    catalog: Option<PathBuf>,

    /// Override the cooldown window between carousel steps.
    #[arg(long)]
    cooldown_ms: Option<u64>,

    /// Print the built-in catalog and exit.
    #[arg(long)]
    print_catalog: bool,
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog =
        Catalog::parse(&text).with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(catalog)
}

// ───────────────────────────────────────── draw ─────────────

fn draw(frame: &mut Frame, state: &mut AppState) {
    state.terminal_area = frame.area();
    let layout = AppLayout::from_area(frame.area(), state.catalog.items.len());
    let active = state.navigator.widget().active_index();

    let span = card_span(layout.track_area.height, layout.track_area.width);
    state.slide_motion.set_target(active, f64::from(span));

    let stage_block = Block::default()
        .title(format!(
            " {} / {} ",
            active + 1,
            state.navigator.widget().slide_count()
        ))
        .title_style(Theme::title_style())
        .borders(Borders::ALL)
        .border_style(Theme::border_style());
    frame.render_widget(stage_block, layout.stage_area);

    frame.render_widget(
        CarouselWidget::new(&state.catalog.slides, active).col_offset(state.slide_motion.col_offset()),
        layout.track_area,
    );
    frame.render_widget(
        Paragraph::new("◀ prev").style(Theme::button_style()),
        layout.prev_button,
    );
    frame.render_widget(
        Paragraph::new("next ▶").style(Theme::button_style()),
        layout.next_button,
    );
    frame.render_widget(
        CooldownIndicator {
            remaining: state.navigator.cooldown_remaining(),
            tick: state.tick,
        },
        layout.stage_area,
    );

    frame.render_widget(
        PaginationWidget {
            count: state.catalog.slides.len(),
            active,
        },
        layout.pagination_area,
    );

    SeriesColumn {
        catalog: &state.catalog,
        select: state.select,
        visibility: state.navigator.visibility(),
    }
    .render_into(&layout, frame.buffer_mut());

    let hint = state.config.status_bar_hint();
    let status_text = match state.active_view {
        ActiveView::Carousel => state.status_message.as_deref().unwrap_or(&hint),
        ActiveView::SettingsMenu => "",
    };
    frame.render_widget(
        Paragraph::new(status_text).style(Theme::status_bar_style()),
        layout.status_area,
    );

    frame.render_widget(
        VideoModalWidget {
            modal: &state.modal,
            now: Instant::now(),
        },
        frame.area(),
    );

    if state.active_view == ActiveView::SettingsMenu {
        frame.render_widget(SettingsPopup { state: &*state }, frame.area());
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr only; redirect it to see them.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_catalog {
        print!("{}", Catalog::builtin().serialise());
        return Ok(());
    }

    // ── build page state ──────────────────────────────────────
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let mut user_config = config::AppConfig::load();
    if let Some(ms) = cli.cooldown_ms {
        user_config.set_cooldown_ms(ms);
    }
    let mut state = AppState::new(catalog, user_config)?;
    tracing::info!(
        slides = state.catalog.slides.len(),
        cooldown_ms = state.config.cooldown_ms,
        "carousel ready"
    );

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(TICK_RATE);

    // ── event loop ────────────────────────────────────────────
    // Single consumer: every intent, widget change and timer expiry is
    // handled here in arrival order.
    loop {
        terminal.draw(|frame| draw(frame, &mut state))?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => {
                state.status_message = None;
                handler::handle_key(&mut state, k);
            }
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::Resize => {}
            AppEvent::Tick => state.on_tick(Instant::now()),
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
