//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! Takes the core carousel model and turns it into cells on the terminal.

pub mod carousel;
pub mod indicator;
pub mod layout;
pub mod modal;
pub mod pagination;
pub mod popup;
pub mod series;
pub mod smooth_scroll;
pub mod theme;
