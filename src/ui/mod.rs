//! User Interface module
//!
//! Terminal UI using ratatui: the listing form, the card list and the input
//! dispatch that drives the form state.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{App, Focus};
