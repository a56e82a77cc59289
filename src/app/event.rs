//! Terminal event abstraction.
//!
//! A blocking reader thread polls crossterm and forwards events over a
//! channel, so the event loop only ever awaits the receiver.  A
//! [`AppEvent::Tick`] is sent once per tick rate whether or not input is
//! arriving; ticks drive the cooldown timer and the animations.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
    Tick,
}

impl AppEvent {
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            // Release/repeat reports would double every step on terminals
            // that send them.
            CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(_, _) => Some(AppEvent::Resize),
            _ => None,
        }
    }
}

/// Spawn the reader and return the receiving end.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = until_next_tick(tick_rate, last_tick.elapsed());
            let next = match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => AppEvent::from_crossterm(ev),
                    Err(e) => {
                        tracing::warn!("terminal read failed: {e}");
                        None
                    }
                },
                Ok(false) => None,
                Err(e) => {
                    tracing::warn!("terminal poll failed: {e}");
                    None
                }
            };
            if let Some(app_event) = next {
                if tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
            // Ticks stay due every `tick_rate` even under continuous input.
            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }
    });

    rx
}

/// How long the reader may block before the next tick is due.
fn until_next_tick(tick_rate: Duration, since_last: Duration) -> Duration {
    tick_rate.saturating_sub(since_last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_deadline_shrinks_with_elapsed_time() {
        let rate = Duration::from_millis(50);
        assert_eq!(until_next_tick(rate, Duration::ZERO), rate);
        assert_eq!(until_next_tick(rate, Duration::from_millis(30)), Duration::from_millis(20));
        assert_eq!(until_next_tick(rate, Duration::from_millis(80)), Duration::ZERO);
    }

    #[test]
    fn resize_carries_no_payload() {
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize)
        ));
    }
}
