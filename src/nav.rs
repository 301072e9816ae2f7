use crate::page::PageKind;

/// Destinations in the order the overlay lists them.
pub const MENU_ITEMS: [PageKind; 3] = [PageKind::About, PageKind::Contact, PageKind::Home];

/// The hamburger menu overlay.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Menu {
    open: bool,
    selected: usize,
}

impl Menu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MENU_ITEMS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> PageKind {
        MENU_ITEMS[self.selected]
    }

    /// Close the overlay and hand back the chosen destination.
    pub fn confirm(&mut self) -> PageKind {
        self.close();
        self.selected()
    }
}
