//! Settings menu model (data only).
//!
//! Shared by the input handler and the settings popup so neither has to
//! import the other.

use std::time::Duration;

use super::state::AppState;

/// A single item in the settings menu.
pub enum SettingsItem {
    /// Boolean toggle.
    Toggle {
        label: &'static str,
        get: fn(&AppState) -> bool,
        set: fn(&mut AppState, bool),
    },
    /// Cycles through a finite set of values.
    Cycle {
        label: &'static str,
        value: fn(&AppState) -> String,
        cycle: fn(&mut AppState),
    },
}

impl SettingsItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle { label, .. } | Self::Cycle { label, .. } => label,
        }
    }

    /// Current value as shown in the popup.
    pub fn value(&self, state: &AppState) -> String {
        match self {
            Self::Toggle { get, .. } => (if get(state) { "ON" } else { "OFF" }).to_string(),
            Self::Cycle { value, .. } => value(state),
        }
    }

    pub fn activate(&self, state: &mut AppState) {
        match self {
            Self::Toggle { get, set, .. } => {
                let current = get(state);
                set(state, !current);
            }
            Self::Cycle { cycle, .. } => cycle(state),
        }
        state.config.save_or_warn();
    }
}

const COOLDOWNS_MS: &[u64] = &[250, 500, 750, 1000, 1500, 2000];
const SWIPE_ROWS: &[u16] = &[1, 2, 3, 4, 6];

/// The smallest preset above `current`, wrapping to the first.  Values set
/// from the config file need not be presets.
fn next_preset<T: Copy + PartialOrd>(presets: &[T], current: T) -> T {
    presets
        .iter()
        .copied()
        .find(|&p| p > current)
        .unwrap_or(presets[0])
}

/// All items shown in the settings popup, in display order.
pub static SETTINGS_ITEMS: &[SettingsItem] = &[
    SettingsItem::Toggle {
        label: "Invert Wheel",
        get: |s| s.config.invert_wheel,
        set: |s, v| s.config.invert_wheel = v,
    },
    SettingsItem::Toggle {
        label: "Invert Swipe",
        get: |s| s.config.invert_touch,
        set: |s, v| s.config.invert_touch = v,
    },
    SettingsItem::Cycle {
        label: "Cooldown Window",
        value: |s| format!("{}ms", s.config.cooldown_ms),
        cycle: |s| {
            let next = next_preset(COOLDOWNS_MS, s.config.cooldown_ms);
            s.config.cooldown_ms = next;
            s.navigator.set_window(Duration::from_millis(next));
            s.status_message = Some(format!("Cooldown window: {next}ms"));
        },
    },
    SettingsItem::Cycle {
        label: "Swipe Distance",
        value: |s| format!("{} rows", s.config.swipe_rows),
        cycle: |s| {
            let next = next_preset(SWIPE_ROWS, s.config.swipe_rows);
            s.config.swipe_rows = next;
            s.swipe.set_threshold(next);
            s.status_message = Some(format!("Swipe distance: {next} rows"));
        },
    },
];
