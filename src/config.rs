//! User configuration: key bindings and gesture tuning.
//!
//! Stored as `key = value` lines at
//! `$XDG_CONFIG_HOME/series-carousel/config.toml`
//! (default `~/.config/series-carousel/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::gesture::GestureMapping;

const COOLDOWN_RANGE: (u64, u64) = (100, 5000);
const SWIPE_RANGE: (u16, u16) = (1, 10);

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions on the carousel page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevSlide,
    NextSlide,
    StepBack,
    StepForward,
    ToggleSeries,
    Play,
    OpenSettings,
    Quit,
}

impl Action {
    pub const ALL: &[Action] = &[
        Action::PrevSlide,
        Action::NextSlide,
        Action::StepBack,
        Action::StepForward,
        Action::ToggleSeries,
        Action::Play,
        Action::OpenSettings,
        Action::Quit,
    ];

    fn config_key(self) -> &'static str {
        match self {
            Action::PrevSlide => "prev_slide",
            Action::NextSlide => "next_slide",
            Action::StepBack => "step_back",
            Action::StepForward => "step_forward",
            Action::ToggleSeries => "toggle_series",
            Action::Play => "play",
            Action::OpenSettings => "open_settings",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding: key code plus modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Only CTRL/ALT/SHIFT take part in matching.
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    /// Display form for the status bar (`"←"`, `"Ctrl+c"`).
    pub fn display(&self) -> String {
        self.render(true)
    }

    fn to_config_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, arrows: bool) -> String {
        let mut s = String::new();
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                s.push_str(name);
            }
        }
        let key = match (self.code, arrows) {
            (KeyCode::Up, true) => "↑".into(),
            (KeyCode::Down, true) => "↓".into(),
            (KeyCode::Left, true) => "←".into(),
            (KeyCode::Right, true) => "→".into(),
            (KeyCode::Up, false) => "Up".into(),
            (KeyCode::Down, false) => "Down".into(),
            (KeyCode::Left, false) => "Left".into(),
            (KeyCode::Right, false) => "Right".into(),
            (KeyCode::Char(' '), _) => "Space".into(),
            (KeyCode::Char(c), _) => c.to_string(),
            (KeyCode::Enter, _) => "Enter".into(),
            (KeyCode::Tab, _) => "Tab".into(),
            (KeyCode::Home, _) => "Home".into(),
            (KeyCode::End, _) => "End".into(),
            (KeyCode::PageUp, _) => "PageUp".into(),
            (KeyCode::PageDown, _) => "PageDown".into(),
            (KeyCode::F(n), _) => format!("F{n}"),
            (other, _) => format!("{other:?}"),
        };
        s.push_str(&key);
        s
    }

    /// Parse `"Ctrl+c"`, `"Left"`, `"q"`, `"Enter"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let (key_part, mods) = parts.split_last()?;

        for part in mods {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            k if k.starts_with('f') && k.len() > 1 => KeyCode::F(k[1..].parse().ok()?),
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    /// Cooldown after an accepted carousel step.
    pub cooldown_ms: u64,
    pub invert_wheel: bool,
    pub invert_touch: bool,
    /// Rows a drag must travel to count as one swipe.
    pub swipe_rows: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            cooldown_ms: 1000,
            invert_wheel: false,
            invert_touch: false,
            swipe_rows: 2,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(PrevSlide, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextSlide, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(StepBack, vec![KeyBind::new(Up, n), KeyBind::new(Char('k'), n)]);
        m.insert(StepForward, vec![KeyBind::new(Down, n), KeyBind::new(Char('j'), n)]);
        m.insert(ToggleSeries, vec![KeyBind::new(Char('s'), n)]);
        m.insert(Play, vec![KeyBind::new(Enter, n), KeyBind::new(Char('p'), n)]);
        m.insert(OpenSettings, vec![KeyBind::new(Char('?'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n)]);

        m
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Set the cooldown window, clamped to 100..=5000 ms.
    pub fn set_cooldown_ms(&mut self, ms: u64) {
        self.cooldown_ms = ms.clamp(COOLDOWN_RANGE.0, COOLDOWN_RANGE.1);
    }

    pub fn gesture_mapping(&self) -> GestureMapping {
        GestureMapping {
            invert_wheel: self.invert_wheel,
            invert_touch: self.invert_touch,
        }
    }

    /// Find the action bound to a key.  The binding with the most modifiers
    /// wins when several match.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .flat_map(|(&action, binds)| binds.iter().map(move |b| (action, b)))
            .filter(|(_, b)| b.matches(event))
            .max_by_key(|(_, b)| b.modifiers.bits().count_ones())
            .map(|(action, _)| action)
    }

    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    pub fn status_bar_hint(&self) -> String {
        format!(
            "wheel/drag/{}{}: step | {}{}: prev/next | {}: series | {}: play | {}: settings",
            self.short_binding(Action::StepBack),
            self.short_binding(Action::StepForward),
            self.short_binding(Action::PrevSlide),
            self.short_binding(Action::NextSlide),
            self.short_binding(Action::ToggleSeries),
            self.short_binding(Action::Play),
            self.short_binding(Action::OpenSettings),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        Ok(())
    }

    /// Save, logging a warning on failure.
    pub fn save_or_warn(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("could not save config: {e:#}");
        }
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "cooldown_ms" => {
                    if let Ok(v) = value.parse::<u64>() {
                        config.set_cooldown_ms(v);
                    }
                    continue;
                }
                "swipe_rows" => {
                    if let Ok(v) = value.parse::<u16>() {
                        config.swipe_rows = v.clamp(SWIPE_RANGE.0, SWIPE_RANGE.1);
                    }
                    continue;
                }
                "invert_wheel" => {
                    config.invert_wheel = value == "true";
                    continue;
                }
                "invert_touch" => {
                    config.invert_touch = value == "true";
                    continue;
                }
                _ => {}
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };
            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    fn serialise(&self) -> String {
        let mut lines = vec![
            "# series-carousel configuration".to_string(),
            String::new(),
            "# Gestures".to_string(),
            format!("cooldown_ms = {}", self.cooldown_ms),
            format!("invert_wheel = {}", self.invert_wheel),
            format!("invert_touch = {}", self.invert_touch),
            format!("swipe_rows = {}", self.swipe_rows),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// `$XDG_CONFIG_HOME/series-carousel/config.toml`.
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn defaults_match_the_source_gesture_mapping() {
        let config = AppConfig::default();
        assert_eq!(config.cooldown(), Duration::from_millis(1000));
        assert_eq!(config.gesture_mapping(), GestureMapping::default());
    }

    #[test]
    fn parse_clamps_and_overrides() {
        let config = AppConfig::parse(
            "cooldown_ms = 10\n\
             swipe_rows = 40\n\
             invert_touch = true\n\
             next_slide = n, Ctrl+Right\n\
             bogus = 1\n",
        );
        assert_eq!(config.cooldown_ms, 100);
        assert_eq!(config.swipe_rows, 10);
        assert!(config.invert_touch);
        assert!(!config.invert_wheel);
        assert_eq!(config.match_key(key(KeyCode::Char('n'))), Some(Action::NextSlide));
        assert_eq!(config.match_key(key(KeyCode::Right)), None);
        assert_eq!(
            config.match_key(KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL)),
            Some(Action::NextSlide)
        );
    }

    #[test]
    fn cooldown_override_is_clamped() {
        let mut config = AppConfig::default();
        config.set_cooldown_ms(0);
        assert_eq!(config.cooldown(), Duration::from_millis(100));
        config.set_cooldown_ms(u64::MAX);
        assert_eq!(config.cooldown_ms, 5000);
        config.set_cooldown_ms(1200);
        assert_eq!(config.cooldown_ms, 1200);
    }

    #[test]
    fn serialised_config_parses_back() {
        let mut config = AppConfig::default();
        config.cooldown_ms = 750;
        config.invert_wheel = true;
        let back = AppConfig::parse(&config.serialise());
        assert_eq!(back.cooldown_ms, 750);
        assert!(back.invert_wheel);
        assert_eq!(back.bindings, config.bindings);
    }

    #[test]
    fn uppercase_char_bindings_survive() {
        assert_eq!(
            KeyBind::parse("Shift+J"),
            Some(KeyBind::new(KeyCode::Char('J'), KeyModifiers::SHIFT))
        );
        assert_eq!(KeyBind::parse("Hyper+x"), None);
    }
}
