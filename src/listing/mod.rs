//! Listing module - the form state and the records it produces

pub mod model;
pub mod state;

pub use model::{IdGenerator, Listing, ListingId};
pub use state::{FormAction, FormState};
