use crate::core::{form, viewport};
use crate::page::state::PageState;
use crate::page::{FeedbackKind, PageBindings};
use crate::runtime::effect::Effect;
use crate::runtime::event::{AppEvent, PageEvent};
use crate::runtime::intent::Intent;
use crate::runtime::reducer::Reducer;
use crate::runtime::scheduler::Scheduler;
use crate::runtime::time::Instant;
use std::time::Duration;

/// Drives the page: routes events to intents, reduces them against the
/// state, and applies the resulting effects through the bindings.
pub struct Runtime<P: PageBindings> {
    state: PageState,
    scheduler: Scheduler,
    page: P,
    armed_deadline: Option<Instant>,
}

impl<P: PageBindings> Runtime<P> {
    pub fn new(page: P) -> Self {
        Self::with_state(page, PageState::new())
    }

    pub fn with_state(page: P, state: PageState) -> Self {
        Self {
            state,
            scheduler: Scheduler::new(),
            page,
            armed_deadline: None,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// Like `dispatch` but with an explicit clock, so tests control time.
    pub fn dispatch_at(&mut self, event: PageEvent, now: Instant) {
        self.dispatch_app_event(AppEvent::Page(event), now);
    }

    /// Delivers every scheduled event that is due at `now`.
    pub fn pump(&mut self, now: Instant) {
        self.armed_deadline = None;
        for event in self.scheduler.drain_ready(now) {
            self.dispatch_app_event(event, now);
        }
    }

    /// Time until the next scheduled event, when a platform timer needs
    /// arming for it. Returns None while an already-armed wakeup covers
    /// the earliest deadline, so callers never stack redundant timers.
    pub fn arm_wakeup(&mut self, now: Instant) -> Option<Duration> {
        let due = self.scheduler.next_due(now)?;
        let deadline = now + due;
        if self
            .armed_deadline
            .is_some_and(|armed| armed <= deadline)
        {
            return None;
        }
        self.armed_deadline = Some(deadline);
        Some(due)
    }

    fn dispatch_app_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Page(page_event) => {
                for intent in route_event(page_event) {
                    self.process_intent(intent, now);
                }
            }
            AppEvent::Intent(intent) => self.process_intent(intent, now),
        }
    }

    fn process_intent(&mut self, intent: Intent, now: Instant) {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(effects, now);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::SetMenuOpen(open) => self.page.set_menu_open(open),
                Effect::ScrollToSection { section_id } => {
                    // Unknown targets degrade to a silent no-op.
                    if let Some(offset) = self.page.section_offset(&section_id) {
                        self.page.scroll_to(viewport::scroll_target(offset));
                    }
                }
                Effect::RevealCard(index) => self.page.reveal_card(index),
                Effect::SetActiveSection(section) => {
                    self.page.set_active_link(section.as_deref());
                }
                Effect::FadeInImage(index) => self.page.fade_in_image(index),
                Effect::SetCardHover { index, raised } => {
                    self.page.set_card_hover(index, raised);
                }
                Effect::ClearErrors => self.page.clear_feedback(FeedbackKind::Error),
                Effect::ShowErrors(errors) => {
                    for error in &errors {
                        self.page.append_feedback(FeedbackKind::Error, error);
                    }
                }
                Effect::ShowSuccess => {
                    self.page
                        .append_feedback(FeedbackKind::Success, form::SUCCESS_MESSAGE);
                }
                Effect::RemoveSuccess => self.page.clear_feedback(FeedbackKind::Success),
                Effect::ResetForm => self.page.reset_form(),
                Effect::LogSubmission(input) => {
                    self.page.log("Formulario enviado correctamente");
                    let payload = serde_json::to_string(&input).unwrap_or_default();
                    self.page.log(&format!("Datos del formulario: {payload}"));
                }
                Effect::Log(line) => self.page.log(&line),
                Effect::SetHeroText(text) => self.page.set_hero_text(&text),
                Effect::Schedule(command) => self.scheduler.schedule(command, now),
            }
        }
    }
}

fn route_event(event: PageEvent) -> Vec<Intent> {
    match event {
        PageEvent::Ready {
            snapshot,
            hero_text,
        } => vec![Intent::Initialize {
            snapshot,
            hero_text,
        }],
        PageEvent::MenuToggleClicked => vec![Intent::ToggleMenu],
        PageEvent::NavLinkClicked { target } => vec![
            Intent::CloseMenu,
            Intent::NavigateTo { section_id: target },
        ],
        PageEvent::DocumentClicked { inside_nav } => {
            if inside_nav {
                vec![]
            } else {
                vec![Intent::CloseMenu]
            }
        }
        PageEvent::FormSubmitted { input } => vec![Intent::SubmitForm { input }],
        PageEvent::Scrolled { snapshot } => vec![Intent::UpdateScrollEffects { snapshot }],
        PageEvent::ImageLoaded { index } => vec![Intent::RevealImage { index }],
        PageEvent::CardHover { index, entered } => vec![Intent::HoverCard {
            index,
            raised: entered,
        }],
    }
}
