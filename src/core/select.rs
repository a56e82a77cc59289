//! Series select: the trigger that shows or hides the options panel.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesSelect {
    open: bool,
}

impl SeriesSelect {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Rotation of the trigger icon in degrees.
    pub fn icon_rotation(&self) -> u16 {
        if self.open {
            180
        } else {
            0
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.icon_rotation() {
            180 => "▲",
            _ => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_flips_panel_and_icon() {
        let mut select = SeriesSelect::default();
        assert_eq!(select.icon_rotation(), 0);
        select.toggle();
        assert!(select.is_open());
        assert_eq!(select.icon_rotation(), 180);
        select.toggle();
        assert!(!select.is_open());
    }
}
