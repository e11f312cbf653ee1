//! Mobile navigation menu state owned by the layout.

use super::routes::NavigationEntry;

/// Whether the mobile menu is open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu between open and closed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follow a navigation entry. The menu is always closed afterwards so an
    /// open menu never survives a route change. Returns the path to navigate
    /// to; in the layout the entry's link already points there, so the
    /// header only relies on the closing.
    pub fn select_navigation(&mut self, entry: &NavigationEntry) -> &'static str {
        self.close();
        entry.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::routes::{NAVIGATION, Page};

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..12 {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu.toggle();
            }
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_select_navigation_closes_menu() {
        for entry in &NAVIGATION {
            let mut open = MenuState::default();
            open.toggle();
            assert_eq!(open.select_navigation(entry), entry.path());
            assert!(!open.is_open());

            let mut closed = MenuState::default();
            closed.select_navigation(entry);
            assert!(!closed.is_open());
        }
    }

    #[test]
    fn test_select_navigation_returns_route() {
        let mut menu = MenuState::default();
        let gallery = NAVIGATION
            .iter()
            .find(|e| e.page == Page::Gallery)
            .unwrap();
        assert_eq!(menu.select_navigation(gallery), "/gallery");
    }
}
