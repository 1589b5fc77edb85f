//! Mobile navigation menu

/// Open/closed state of the mobile menu and its toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    /// Closed menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu (and its toggle) carry the `active` class
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu toggle clicked
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation link was followed
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// A click landed outside both the menu and its toggle
    pub fn clicked_outside(&mut self) {
        self.open = false;
    }
}
