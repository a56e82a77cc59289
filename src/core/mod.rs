//! Core carousel model: navigation and page content.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod gesture;
pub mod modal;
pub mod navigator;
pub mod pagination;
pub mod select;
pub mod track;
pub mod visibility;
