use crate::core::nav::NavState;
use crate::core::typewriter::Typewriter;
use indexmap::IndexSet;
use std::time::Duration;

/// All state owned by the runtime. Everything else lives in the document.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    nav: NavState,
    revealed: IndexSet<usize>,
    active_section: Option<String>,
    typewriter_speed: Option<Duration>,
    typewriter: Option<Typewriter>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the hero-title typewriter effect (disabled by default).
    pub fn with_typewriter(mut self, speed: Duration) -> Self {
        self.typewriter_speed = Some(speed);
        self
    }

    pub fn nav(&self) -> NavState {
        self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavState {
        &mut self.nav
    }

    pub fn revealed(&self) -> &IndexSet<usize> {
        &self.revealed
    }

    /// Marks a card as revealed. The set only ever grows.
    pub fn mark_revealed(&mut self, index: usize) {
        self.revealed.insert(index);
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    /// Stores the new active section; returns true when it changed.
    pub fn set_active_section(&mut self, section: Option<String>) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }

    pub fn typewriter_speed(&self) -> Option<Duration> {
        self.typewriter_speed
    }

    pub fn start_typewriter(&mut self, text: &str) {
        if self.typewriter_speed.is_some() {
            self.typewriter = Some(Typewriter::new(text));
        }
    }

    pub fn tick_typewriter(&mut self) -> Option<String> {
        self.typewriter.as_mut()?.tick()
    }

    pub fn typewriter_done(&self) -> bool {
        self.typewriter.as_ref().is_none_or(Typewriter::is_done)
    }
}
