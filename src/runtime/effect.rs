use crate::core::form::FormInput;
use crate::runtime::scheduler::SchedulerCommand;

/// Presentational side effects produced by the reducer and applied to the
/// page through `PageBindings`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetMenuOpen(bool),
    ScrollToSection { section_id: String },
    RevealCard(usize),
    SetActiveSection(Option<String>),
    FadeInImage(usize),
    SetCardHover { index: usize, raised: bool },
    ClearErrors,
    ShowErrors(Vec<String>),
    ShowSuccess,
    RemoveSuccess,
    ResetForm,
    LogSubmission(FormInput),
    Log(String),
    SetHeroText(String),
    Schedule(SchedulerCommand),
}
