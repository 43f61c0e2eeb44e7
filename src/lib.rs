//! Listing Board - a terminal form-and-list screen
//!
//! Enter a property title and price, submit them, and browse the entries
//! collected during this session.

pub mod listing;
pub mod config;
pub mod ui;

// Re-export commonly used types
pub use listing::{FormAction, FormState, Listing, ListingId};
pub use config::Settings;
pub use ui::App;
