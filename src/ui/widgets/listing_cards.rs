//! Scrollable list of listing cards
//!
//! Each listing becomes a small card: the title in bold, the price in plain
//! text and a blank row to separate it from the next card. Cards appear in
//! the order the listings were submitted.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span, Text},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::listing::Listing;
use crate::ui::theme;

/// Rows taken by one card, separator included
pub const CARD_HEIGHT: u16 = 3;

/// Left indent of card contents
const CARD_INDENT: &str = "  ";

/// Widget for the submitted listings
pub struct ListingCards<'a> {
    listings: &'a [Listing],
    focused: bool,
    title: &'a str,
}

impl<'a> ListingCards<'a> {
    pub fn new(listings: &'a [Listing]) -> Self {
        Self {
            listings,
            focused: false,
            title: " Listings ",
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn card(listing: &Listing) -> ListItem<'_> {
        let text = Text::from(vec![
            Line::from(vec![
                Span::raw(CARD_INDENT),
                Span::styled(listing.title(), theme::card_title()),
            ]),
            Line::from(vec![Span::raw(CARD_INDENT), Span::raw(listing.price())]),
            Line::default(),
        ]);
        ListItem::new(text).style(theme::card())
    }
}

/// Number of whole cards that fit in the inner area of a list of this size
pub fn cards_per_page(area: Rect) -> usize {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    (inner.height / CARD_HEIGHT).max(1) as usize
}

/// Index of the card drawn at terminal row `row`, if any
pub fn card_at_row(area: Rect, offset: usize, row: u16, len: usize) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let index = offset + ((row - inner.y) / CARD_HEIGHT) as usize;
    (index < len).then_some(index)
}

impl StatefulWidget for ListingCards<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(self.focused))
            .title(self.title);

        if self.listings.is_empty() {
            Paragraph::new(format!("{}No listings yet", CARD_INDENT))
                .style(theme::hint())
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.listings.iter().map(Self::card).collect();
        let mut list = List::new(items).block(block);
        if self.focused {
            list = list.highlight_style(theme::card_selected());
        }
        StatefulWidget::render(list, area, buf, state);

        let mut scrollbar_state = ScrollbarState::new(self.listings.len())
            .position(state.selected().unwrap_or(state.offset()));
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin { vertical: 1, horizontal: 0 }),
            buf,
            &mut scrollbar_state,
        );
    }
}
