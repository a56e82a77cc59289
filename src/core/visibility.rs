//! Content visibility driven by the carousel cursor.
//!
//! The page has two lists besides the slides: series items (one per slide,
//! skipping the intro slide) and content panels tagged with a slide number
//! that is two ahead of the zero-based cursor.  After every step exactly one
//! item is active and exactly one panel (whose tag matches) is shown.

/// Receives the cursor after every accepted step or resync.
pub trait VisibilitySync {
    fn sync(&mut self, cursor: usize);
}

impl<F: FnMut(usize)> VisibilitySync for F {
    fn sync(&mut self, cursor: usize) {
        self(cursor)
    }
}

/// Series item `i` belongs to slide `i + ITEM_SHIFT`.
pub const ITEM_SHIFT: usize = 1;
/// A panel tagged `t` belongs to slide `t - PANEL_SHIFT`.
pub const PANEL_SHIFT: u32 = 2;

/// Active/visible flags for series items and content panels.
#[derive(Debug, Clone, Default)]
pub struct ContentVisibility {
    item_count: usize,
    panel_tags: Vec<u32>,
    active_item: Option<usize>,
    visible_panel: Option<usize>,
    synced: Option<usize>,
}

impl ContentVisibility {
    pub fn new(item_count: usize, panel_tags: Vec<u32>) -> Self {
        Self {
            item_count,
            panel_tags,
            ..Self::default()
        }
    }

    /// Index of the highlighted series item, if any.
    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    /// Index (into the panel list) of the panel currently shown, if any.
    pub fn visible_panel(&self) -> Option<usize> {
        self.visible_panel
    }

    /// Cursor from the most recent sync.
    pub fn last_synced(&self) -> Option<usize> {
        self.synced
    }
}

impl VisibilitySync for ContentVisibility {
    fn sync(&mut self, cursor: usize) {
        self.active_item = cursor
            .checked_sub(ITEM_SHIFT)
            .filter(|&i| i < self.item_count);

        let wanted = u32::try_from(cursor)
            .ok()
            .and_then(|c| c.checked_add(PANEL_SHIFT));
        self.visible_panel = wanted.and_then(|tag| self.panel_tags.iter().position(|&t| t == tag));
        self.synced = Some(cursor);
    }
}
