use crate::core::form::FormInput;
use crate::core::viewport::ViewportSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Initialize {
        snapshot: ViewportSnapshot,
        hero_text: Option<String>,
    },
    ToggleMenu,
    CloseMenu,
    NavigateTo {
        section_id: String,
    },
    SubmitForm {
        input: FormInput,
    },
    UpdateScrollEffects {
        snapshot: ViewportSnapshot,
    },
    RevealImage {
        index: usize,
    },
    HoverCard {
        index: usize,
        raised: bool,
    },
    DismissSuccess,
    TypewriterTick,
}
