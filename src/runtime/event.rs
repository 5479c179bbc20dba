use crate::core::form::FormInput;
use crate::core::viewport::ViewportSnapshot;
use crate::runtime::intent::Intent;

/// Events translated from raw browser events by the bindings layer. Each
/// event carries everything the reducer needs, so handling never reaches
/// back into the document.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Dispatched once after all subscriptions are bound.
    Ready {
        snapshot: ViewportSnapshot,
        hero_text: Option<String>,
    },
    MenuToggleClicked,
    /// A nav link was activated; `target` is the section id from the
    /// link's fragment reference, without the leading '#'.
    NavLinkClicked {
        target: String,
    },
    DocumentClicked {
        inside_nav: bool,
    },
    FormSubmitted {
        input: FormInput,
    },
    Scrolled {
        snapshot: ViewportSnapshot,
    },
    ImageLoaded {
        index: usize,
    },
    CardHover {
        index: usize,
        entered: bool,
    },
}

/// Anything the runtime can dispatch: page events from the bindings layer
/// or intents re-entering through the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Page(PageEvent),
    Intent(Intent),
}
