//! UI widgets

pub mod button;
pub mod listing_cards;
pub mod text_input;

pub use button::Button;
pub use listing_cards::{card_at_row, cards_per_page, ListingCards, CARD_HEIGHT};
pub use text_input::TextInput;
