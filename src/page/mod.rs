pub mod state;

/// Kind of transient feedback node rendered after the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Success,
}

impl FeedbackKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            FeedbackKind::Error => "error-message",
            FeedbackKind::Success => "success-message",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            FeedbackKind::Error => ".error-message",
            FeedbackKind::Success => ".success-message",
        }
    }
}

/// Mutation surface of the live page. The runtime drives the document
/// exclusively through this trait, so the core stays testable without a
/// rendering environment.
pub trait PageBindings {
    /// Absolute vertical offset of a section, None when the section does
    /// not exist (navigation then degrades to a no-op).
    fn section_offset(&self, section_id: &str) -> Option<f64>;

    fn set_menu_open(&self, open: bool);
    fn scroll_to(&self, top: f64);
    fn reveal_card(&self, index: usize);
    fn set_card_hover(&self, index: usize, raised: bool);
    fn set_active_link(&self, section_id: Option<&str>);
    fn fade_in_image(&self, index: usize);
    fn set_hero_text(&self, text: &str);
    fn clear_feedback(&self, kind: FeedbackKind);
    fn append_feedback(&self, kind: FeedbackKind, text: &str);
    fn reset_form(&self);
    fn log(&self, message: &str);
}

/// What the document actually contains, discovered once at binding time.
/// Optional pieces that are missing simply produce no subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub has_menu: bool,
    pub has_form: bool,
    pub nav_links: usize,
    /// Card indices (within the full card list) that carry the project
    /// class and therefore get the hover effect.
    pub project_cards: Vec<usize>,
    pub images: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
    Scroll,
    Load,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
            EventKind::Scroll => "scroll",
            EventKind::Load => "load",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindTarget {
    MenuToggle,
    NavLink(usize),
    Document,
    ContactForm,
    Window,
    Card(usize),
    Image(usize),
}

/// One event registration, assembled at initialization. The bindings layer
/// turns each record into a real listener; tests synthesize the matching
/// `PageEvent`s directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub target: BindTarget,
    pub kind: EventKind,
}

impl Subscription {
    pub fn new(target: BindTarget, kind: EventKind) -> Self {
        Self { target, kind }
    }
}

pub fn subscriptions(layout: &PageLayout) -> Vec<Subscription> {
    let mut subs = Vec::new();

    if layout.has_menu {
        subs.push(Subscription::new(BindTarget::MenuToggle, EventKind::Click));
    }
    for index in 0..layout.nav_links {
        subs.push(Subscription::new(
            BindTarget::NavLink(index),
            EventKind::Click,
        ));
    }
    subs.push(Subscription::new(BindTarget::Document, EventKind::Click));
    if layout.has_form {
        subs.push(Subscription::new(
            BindTarget::ContactForm,
            EventKind::Submit,
        ));
    }
    subs.push(Subscription::new(BindTarget::Window, EventKind::Scroll));
    for &index in &layout.project_cards {
        subs.push(Subscription::new(
            BindTarget::Card(index),
            EventKind::MouseEnter,
        ));
        subs.push(Subscription::new(
            BindTarget::Card(index),
            EventKind::MouseLeave,
        ));
    }
    for index in 0..layout.images {
        subs.push(Subscription::new(BindTarget::Image(index), EventKind::Load));
    }

    subs
}
