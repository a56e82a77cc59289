//! Gesture-driven carousel navigation.
//!
//! The `core` module is UI independent: a bounded slide cursor with a
//! cooldown, gesture mapping, content visibility, and the page content model.
//! The `series-carousel` binary renders it in the terminal.

pub mod core;
