use crossterm::event::{KeyCode, KeyEvent};
use folio::page::PageKind;
use ratatui::Frame;

use crate::{
    ui::{about_lines, contact_lines, home_lines, render_page, Placement},
    App,
};

const PAGE_STEP: u16 = 10;

/// A UI Screen boundary: responsible for rendering and optional key handling
pub trait Screen {
    fn render(&self, app: &mut App, f: &mut Frame);
    /// Optional per-screen key handling. Returns true if the key was handled.
    fn on_key(&mut self, _key: KeyEvent, _app: &mut App) -> bool {
        false
    }
}

/// Landing page: name, bio, quick links
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_page(app, f, home_lines, Placement::Centered);
    }
}

/// About page - long enough to scroll
pub struct AboutScreen;

impl Screen for AboutScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_page(app, f, about_lines, Placement::Scrolled);
    }

    fn on_key(&mut self, key: KeyEvent, app: &mut App) -> bool {
        match key.code {
            KeyCode::Up => app.page.scroll_up(1),
            KeyCode::Down => app.page.scroll_down(1),
            KeyCode::PageUp => app.page.scroll_up(PAGE_STEP),
            KeyCode::PageDown => app.page.scroll_down(PAGE_STEP),
            KeyCode::Home => app.page.scroll_home(),
            _ => return false,
        }
        true
    }
}

pub struct ContactScreen;

impl Screen for ContactScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_page(app, f, contact_lines, Placement::Centered);
    }
}

/// Helper to construct the appropriate screen for the current page
pub fn current_screen(kind: PageKind) -> Box<dyn Screen> {
    match kind {
        PageKind::Home => Box::new(HomeScreen),
        PageKind::About => Box::new(AboutScreen),
        PageKind::Contact => Box::new(ContactScreen),
    }
}
