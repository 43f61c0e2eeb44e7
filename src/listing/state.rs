//! Form state and its update functions
//!
//! The whole screen's logic lives here. Each operation takes the current
//! state by value and returns the next one, so it can be driven from the UI
//! or from tests without a terminal.

use super::model::{IdGenerator, Listing};

/// An input event the form understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Title field changed to the given text
    UpdateTitle(String),
    /// Price field changed to the given text
    UpdatePrice(String),
    /// Submit control pressed
    Submit,
}

/// The title and price inputs plus the listings submitted so far
#[derive(Debug, Clone)]
pub struct FormState {
    title: String,
    price: String,
    /// Append-only, in submission order
    listings: Vec<Listing>,
    ids: IdGenerator,
}

impl FormState {
    /// Empty form with a time-seeded id generator
    pub fn new() -> Self {
        Self::with_id_generator(IdGenerator::new())
    }

    /// Empty form using the given id generator
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            title: String::new(),
            price: String::new(),
            listings: Vec::new(),
            ids,
        }
    }

    /// Replace the title text verbatim
    pub fn update_title(mut self, text: impl Into<String>) -> Self {
        self.title = text.into();
        self
    }

    /// Replace the price text verbatim
    pub fn update_price(mut self, text: impl Into<String>) -> Self {
        self.price = text.into();
        self
    }

    /// Append a listing built from the current inputs and clear them.
    ///
    /// Does nothing when the title is empty after trimming. The stored title
    /// keeps its original whitespace; the price is never inspected.
    pub fn submit(mut self) -> Self {
        if self.title.trim().is_empty() {
            log::debug!("Ignoring submit with blank title");
            return self;
        }

        let id = self.ids.next_id();
        let title = std::mem::take(&mut self.title);
        let price = std::mem::take(&mut self.price);
        log::info!("Added listing {} ({} total)", id, self.listings.len() + 1);
        self.listings.push(Listing::new(id, title, price));
        self
    }

    /// Dispatch an action to the matching update function
    pub fn apply(self, action: FormAction) -> Self {
        match action {
            FormAction::UpdateTitle(text) => self.update_title(text),
            FormAction::UpdatePrice(text) => self.update_price(text),
            FormAction::Submit => self.submit(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    /// Submitted listings in the order they were added
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
