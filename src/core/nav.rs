/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    is_open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Closes the menu. Returns true when the state actually changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open;
        self.is_open = false;
        was_open
    }
}
