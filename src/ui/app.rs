//! Main UI Application
//!
//! Owns the form state, routes key and mouse events into form actions and
//! renders the screen. Every handled event marks the screen dirty so the next
//! loop iteration redraws it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{ListState, Paragraph},
};

use crate::config::Settings;
use crate::listing::{FormAction, FormState, IdGenerator};
use crate::ui::theme;
use crate::ui::widgets::{card_at_row, cards_per_page, Button, ListingCards, TextInput};

/// Which region receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Price,
    Submit,
    Listings,
}

impl Focus {
    /// Next region in tab order
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Price,
            Focus::Price => Focus::Submit,
            Focus::Submit => Focus::Listings,
            Focus::Listings => Focus::Title,
        }
    }

    /// Previous region in tab order
    pub fn prev(self) -> Self {
        match self {
            Focus::Title => Focus::Listings,
            Focus::Price => Focus::Title,
            Focus::Submit => Focus::Price,
            Focus::Listings => Focus::Submit,
        }
    }

    /// Build the change action for a text field, None for other regions
    fn field_update(self, text: String) -> Option<FormAction> {
        match self {
            Focus::Title => Some(FormAction::UpdateTitle(text)),
            Focus::Price => Some(FormAction::UpdatePrice(text)),
            Focus::Submit | Focus::Listings => None,
        }
    }
}

/// Screen regions from the last render, used for mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
struct ScreenLayout {
    title: Rect,
    price: Rect,
    submit: Rect,
    listings: Rect,
}

/// Main UI application
pub struct App {
    /// Form inputs and submitted listings
    form: FormState,
    /// Text and tuning loaded at startup
    settings: Settings,
    /// Editor bound to the title
    title_input: TextInput,
    /// Editor bound to the price
    price_input: TextInput,
    /// Region with keyboard focus
    focus: Focus,
    /// Card selection and scroll offset
    list_state: ListState,
    /// Regions drawn in the last frame
    layout: ScreenLayout,
    /// Set by any handled event, cleared by render
    dirty: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_form(settings, FormState::new())
    }

    /// Create the app around an existing form state
    pub fn with_form(settings: Settings, form: FormState) -> Self {
        let mut title_input = TextInput::new(&settings.title_placeholder);
        title_input.set_text(form.title());
        title_input.set_focused(true);
        let mut price_input = TextInput::new(&settings.price_placeholder);
        price_input.set_text(form.price());

        Self {
            form,
            settings,
            title_input,
            price_input,
            focus: Focus::default(),
            list_state: ListState::default(),
            layout: ScreenLayout::default(),
            dirty: true,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the highlighted card, if the list has one
    pub fn selected_listing(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Whether state changed since the last render
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Force a redraw, e.g. after a terminal resize
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Run an action through the form and schedule a redraw
    fn dispatch(&mut self, action: FormAction) {
        // Placeholder is overwritten before anyone can observe it
        let placeholder = FormState::with_id_generator(IdGenerator::starting_at(0));
        let form = std::mem::replace(&mut self.form, placeholder);
        self.form = form.apply(action);
        self.dirty = true;
    }

    fn submit(&mut self) {
        let before = self.form.len();
        self.dispatch(FormAction::Submit);
        if self.form.len() > before {
            self.title_input.set_text(self.form.title());
            self.price_input.set_text(self.form.price());
            if self.focus == Focus::Price {
                self.set_focus(Focus::Title);
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Listings && self.list_state.selected().is_none() && !self.form.is_empty() {
            let first_visible = self.list_state.offset().min(self.form.len() - 1);
            self.list_state.select(Some(first_visible));
        }
        self.focus = focus;
        self.title_input.set_focused(focus == Focus::Title);
        self.price_input.set_focused(focus == Focus::Price);
        self.dirty = true;
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global shortcuts
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return true,
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return false;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Title | Focus::Price => self.handle_field_key(key),
            Focus::Submit => self.handle_submit_key(key),
            Focus::Listings => self.handle_listings_key(key),
        }
        false
    }

    fn focused_text(&self) -> &str {
        match self.focus {
            Focus::Title => self.form.title(),
            Focus::Price => self.form.price(),
            Focus::Submit | Focus::Listings => "",
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::Up => self.set_focus(self.focus.prev()),
            _ => {
                let field = match self.focus {
                    Focus::Title => &mut self.title_input,
                    Focus::Price => &mut self.price_input,
                    Focus::Submit | Focus::Listings => return,
                };
                field.input(key);
                let text = field.text();

                // Cursor moves change nothing in the form but still redraw
                self.dirty = true;
                if text != self.focused_text() {
                    if let Some(action) = self.focus.field_update(text) {
                        self.dispatch(action);
                    }
                }
            }
        }
    }

    fn handle_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Up => self.set_focus(Focus::Price),
            KeyCode::Down => self.set_focus(Focus::Listings),
            _ => {}
        }
    }

    fn handle_listings_key(&mut self, key: KeyEvent) {
        let page = cards_per_page(self.layout.listings);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(page as isize)),
            KeyCode::PageDown => self.move_selection(page as isize),
            KeyCode::Home | KeyCode::Char('g') => self.select_listing(0),
            KeyCode::End | KeyCode::Char('G') => {
                self.select_listing(self.form.len().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn select_listing(&mut self, index: usize) {
        if self.form.is_empty() {
            return;
        }
        self.list_state.select(Some(index.min(self.form.len() - 1)));
        self.dirty = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let current = self.list_state.selected().unwrap_or(0);
        self.select_listing(current.saturating_add_signed(delta));
    }

    /// Scroll the list without a selection, clamped to the last card
    fn scroll_listings(&mut self, delta: isize) {
        if self.list_state.selected().is_some() {
            self.move_selection(delta);
            return;
        }
        let max_offset = self.form.len().saturating_sub(1);
        let offset = self.list_state.offset().saturating_add_signed(delta).min(max_offset);
        *self.list_state.offset_mut() = offset;
        self.dirty = true;
    }

    /// Handle mouse input: clicks focus regions and press the button,
    /// the wheel scrolls the list
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.title.contains(pos) {
                    self.set_focus(Focus::Title);
                } else if self.layout.price.contains(pos) {
                    self.set_focus(Focus::Price);
                } else if self.layout.submit.contains(pos) {
                    self.set_focus(Focus::Submit);
                    self.submit();
                } else if self.layout.listings.contains(pos) {
                    self.set_focus(Focus::Listings);
                    let hit = card_at_row(
                        self.layout.listings,
                        self.list_state.offset(),
                        mouse.row,
                        self.form.len(),
                    );
                    if let Some(index) = hit {
                        self.select_listing(index);
                    }
                }
            }
            MouseEventKind::ScrollDown if self.layout.listings.contains(pos) => {
                self.scroll_listings(1);
            }
            MouseEventKind::ScrollUp if self.layout.listings.contains(pos) => {
                self.scroll_listings(-1);
            }
            _ => {}
        }
    }

    /// Draw the whole screen and clear the redraw flag
    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Title input
                Constraint::Length(3), // Price input
                Constraint::Length(3), // Submit
                Constraint::Min(3),    // Listings
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.settings.heading.as_str(), theme::heading()))),
            chunks[0],
        );

        frame.render_widget(self.title_input.widget(), chunks[1]);
        frame.render_widget(self.price_input.widget(), chunks[2]);

        let button = Button::new(&self.settings.submit_label).focused(self.focus == Focus::Submit);
        let button_area = Rect {
            width: button.preferred_width().min(chunks[3].width),
            ..chunks[3]
        };
        frame.render_widget(button, button_area);

        let list_title = format!(" Listings ({}) ", self.form.len());
        let cards = ListingCards::new(self.form.listings())
            .title(&list_title)
            .focused(self.focus == Focus::Listings);
        frame.render_stateful_widget(cards, chunks[4], &mut self.list_state);

        frame.render_widget(Paragraph::new(self.footer_line()), chunks[5]);

        self.layout = ScreenLayout {
            title: chunks[1],
            price: chunks[2],
            submit: button_area,
            listings: chunks[4],
        };
        self.dirty = false;
    }

    fn footer_line(&self) -> Line<'static> {
        let hints = match self.focus {
            Focus::Title | Focus::Price => " Tab: next field  ←/→: move  Enter: add  Esc: quit",
            Focus::Submit => " Enter/Space: add  Tab: next  Esc: quit",
            Focus::Listings => " j/k: move  PgUp/PgDn: page  Tab: next  Esc: quit",
        };
        Line::from(Span::styled(hints, theme::hint()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};

    fn app() -> App {
        App::with_form(
            Settings::default(),
            FormState::with_id_generator(IdGenerator::starting_at(1)),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add(app: &mut App, title: &str, price: &str) {
        type_text(app, title);
        press(app, KeyCode::Tab);
        type_text(app, price);
        press(app, KeyCode::Enter);
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_typing_updates_fields() {
        let mut app = app();
        type_text(&mut app, "Lake House");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "250000");

        assert_eq!(app.form().title(), "Lake House");
        assert_eq!(app.form().price(), "250000");
        assert!(app.form().is_empty());
    }

    #[test]
    fn test_enter_submits_and_returns_to_title() {
        let mut app = app();
        add(&mut app, "Lake House", "250000");

        let listings = app.form().listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title(), "Lake House");
        assert_eq!(listings[0].price(), "250000");
        assert_eq!(app.form().title(), "");
        assert_eq!(app.form().price(), "");
        assert_eq!(app.focus(), Focus::Title);
    }

    #[test]
    fn test_blank_title_submit_is_silent() {
        let mut app = app();
        add(&mut app, "  ", "100");

        assert!(app.form().is_empty());
        assert_eq!(app.form().price(), "100");
        // Focus stays where the user pressed Enter
        assert_eq!(app.focus(), Focus::Price);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut app = app();
        type_text(&mut app, "Cabins");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form().title(), "Cabin");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.form().title(), "abin");
    }

    #[test]
    fn test_cursor_moves_to_fix_typo() {
        let mut app = app();
        type_text(&mut app, "Lke House");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.form().title(), "Lake House");
    }

    #[test]
    fn test_altgr_chars_reach_form() {
        let mut app = app();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        app.handle_key(KeyEvent::new(KeyCode::Char('@'), altgr));
        assert_eq!(app.form().title(), "@");
    }

    #[test]
    fn test_submit_clears_editors() {
        let mut app = app();
        add(&mut app, "Lake House", "250000");
        assert_eq!(app.title_input.text(), "");
        assert_eq!(app.price_input.text(), "");

        // The next entry starts from an empty editor
        type_text(&mut app, "Barn");
        assert_eq!(app.form().title(), "Barn");
    }

    #[test]
    fn test_ids_come_from_form_generator() {
        let mut app = App::with_form(
            Settings::default(),
            FormState::with_id_generator(IdGenerator::starting_at(500)),
        );
        add(&mut app, "First", "1");
        add(&mut app, "Second", "2");

        let ids: Vec<u64> = app.form().listings().iter().map(|l| l.id().value()).collect();
        assert_eq!(ids, vec![500, 501]);
    }

    #[test]
    fn test_shifted_chars_are_typed() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT));
        assert_eq!(app.form().title(), "L");
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = app();
        assert_eq!(app.focus(), Focus::Title);
        for expected in [Focus::Price, Focus::Submit, Focus::Listings, Focus::Title] {
            press(&mut app, KeyCode::Tab);
            assert_eq!(app.focus(), expected);
        }
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Listings);
    }

    #[test]
    fn test_space_on_button_submits() {
        let mut app = app();
        type_text(&mut app, "Barn");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Submit);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form().len(), 1);
        assert_eq!(app.focus(), Focus::Submit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.form().title(), "q");
    }

    #[test]
    fn test_listing_navigation() {
        let mut app = app();
        for title in ["A", "B", "C"] {
            add(&mut app, title, "1");
        }
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Listings);
        assert_eq!(app.selected_listing(), Some(0));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_listing(), Some(2));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.selected_listing(), Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_listing(), Some(0));
        press(&mut app, KeyCode::End);
        assert_eq!(app.selected_listing(), Some(2));
    }

    #[test]
    fn test_redraw_flag() {
        let mut app = app();
        assert!(app.needs_redraw());
        draw(&mut app, 40, 20);
        assert!(!app.needs_redraw());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.needs_redraw());
        draw(&mut app, 40, 20);

        app.request_redraw();
        assert!(app.needs_redraw());
    }

    #[test]
    fn test_render_initial_screen() {
        let mut app = app();
        let terminal = draw(&mut app, 50, 20);
        let text = screen_text(terminal.backend().buffer());

        assert!(text.contains("Real Estate Listings"));
        assert!(text.contains("Property title"));
        assert!(text.contains("Price"));
        assert!(text.contains("Add Listing"));
        assert!(text.contains("Listings (0)"));
    }

    #[test]
    fn test_render_reflects_submission() {
        let mut app = app();
        add(&mut app, "Lake House", "250000");
        let terminal = draw(&mut app, 50, 24);
        let buf = terminal.backend().buffer();
        let text = screen_text(buf);

        assert!(text.contains("Listings (1)"));
        assert!(text.contains("Lake House"));
        assert!(text.contains("250000"));

        // Card title is bold
        let row = text.lines().position(|l| l.contains("Lake House")).unwrap();
        let line = text.lines().nth(row).unwrap();
        let col = line.split("Lake").next().unwrap().chars().count();
        assert!(buf[(col as u16, row as u16)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cursor_drawn_in_focused_field() {
        let mut app = app();
        type_text(&mut app, "abc");
        let terminal = draw(&mut app, 40, 20);
        let buf = terminal.backend().buffer();

        // Title input starts at row 2; text starts one column in
        assert!(buf[(4, 3)].modifier.contains(Modifier::REVERSED));
        // Unfocused price field shows no cursor
        assert!(!buf[(1, 6)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_mouse_click_focuses_and_presses() {
        let mut app = app();
        type_text(&mut app, "Cottage");
        draw(&mut app, 40, 20);

        // Price input spans rows 5..8
        click(&mut app, 5, 6);
        assert_eq!(app.focus(), Focus::Price);

        // Button spans rows 8..11 from column 0
        click(&mut app, 2, 9);
        assert_eq!(app.focus(), Focus::Submit);
        assert_eq!(app.form().len(), 1);
        assert_eq!(app.form().listings()[0].title(), "Cottage");
    }

    #[test]
    fn test_mouse_wheel_scrolls_list() {
        let mut app = app();
        for title in ["A", "B", "C", "D", "E"] {
            add(&mut app, title, "1");
        }
        draw(&mut app, 40, 20);

        let wheel = |kind| MouseEvent {
            kind,
            column: 5,
            row: 14,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        app.handle_mouse(wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.list_state.offset(), 2);

        app.handle_mouse(wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.list_state.offset(), 1);
        assert_eq!(app.selected_listing(), None);
    }
}
