use crate::dom::page::DomPage;
use crate::page::{self, BindTarget, EventKind, Subscription};
use crate::runtime::event::PageEvent;
use crate::runtime::runner::Runtime;
use crate::runtime::time::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Event, EventTarget};

type SharedRuntime = Rc<RefCell<Runtime<DomPage>>>;

/// Binds the whole page: resolves elements, registers every subscription,
/// and dispatches the initial ready event.
pub fn init() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;

    let dom = DomPage::bind(&window)?;
    dom.prepare();

    let layout = dom.layout();
    let snapshot = dom.snapshot();
    let hero_text = dom.hero_text();

    let runtime: SharedRuntime = Rc::new(RefCell::new(Runtime::new(dom.clone())));
    for subscription in page::subscriptions(&layout) {
        bind_subscription(&runtime, &dom, subscription)?;
    }

    dispatch(
        &runtime,
        PageEvent::Ready {
            snapshot,
            hero_text,
        },
    );

    // Cache hits never fire a load event, so fade them in right away.
    for index in 0..layout.images {
        if dom.image(index).is_some_and(|image| image.complete()) {
            dispatch(&runtime, PageEvent::ImageLoaded { index });
        }
    }

    Ok(())
}

fn dispatch(runtime: &SharedRuntime, event: PageEvent) {
    runtime.borrow_mut().dispatch(event);
    arm_timer(runtime);
}

/// One-shot wakeup for the next scheduled runtime event. The runtime
/// reports a delay only when no armed timer already covers it.
fn arm_timer(runtime: &SharedRuntime) {
    let Some(delay) = runtime.borrow_mut().arm_wakeup(Instant::now()) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };

    let shared = runtime.clone();
    let callback = Closure::once_into_js(move || {
        shared.borrow_mut().pump(Instant::now());
        arm_timer(&shared);
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay.as_millis() as i32,
    );
}

fn bind_subscription(
    runtime: &SharedRuntime,
    dom: &DomPage,
    subscription: Subscription,
) -> Result<(), JsValue> {
    let kind = subscription.kind;
    match subscription.target {
        BindTarget::MenuToggle => {
            let Some(hamburger) = dom.hamburger() else {
                return Ok(());
            };
            let shared = runtime.clone();
            listen(hamburger, kind, move |_| {
                dispatch(&shared, PageEvent::MenuToggleClicked);
            })
        }
        BindTarget::NavLink(index) => {
            let Some(link) = dom.nav_link(index) else {
                return Ok(());
            };
            let target = link
                .get_attribute("href")
                .and_then(|href| href.strip_prefix('#').map(str::to_string))
                .unwrap_or_default();
            let shared = runtime.clone();
            listen(link, kind, move |event: Event| {
                event.prevent_default();
                dispatch(
                    &shared,
                    PageEvent::NavLinkClicked {
                        target: target.clone(),
                    },
                );
            })
        }
        BindTarget::Document => {
            let shared = runtime.clone();
            let hamburger = dom.hamburger().cloned();
            let nav_menu = dom.nav_menu().cloned();
            listen(dom.document(), kind, move |event: Event| {
                let inside_nav = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                    .map(|node| {
                        let in_toggle = hamburger
                            .as_ref()
                            .is_some_and(|element| element.contains(Some(&node)));
                        let in_menu = nav_menu
                            .as_ref()
                            .is_some_and(|element| element.contains(Some(&node)));
                        in_toggle || in_menu
                    })
                    .unwrap_or(false);
                dispatch(&shared, PageEvent::DocumentClicked { inside_nav });
            })
        }
        BindTarget::ContactForm => {
            let Some(form) = dom.form() else {
                return Ok(());
            };
            let shared = runtime.clone();
            let fields = dom.clone();
            listen(form, kind, move |event: Event| {
                event.prevent_default();
                dispatch(
                    &shared,
                    PageEvent::FormSubmitted {
                        input: fields.form_input(),
                    },
                );
            })
        }
        BindTarget::Window => {
            let shared = runtime.clone();
            let geometry = dom.clone();
            listen(dom.window(), kind, move |_| {
                dispatch(
                    &shared,
                    PageEvent::Scrolled {
                        snapshot: geometry.snapshot(),
                    },
                );
            })
        }
        BindTarget::Card(index) => {
            let Some(card) = dom.card(index) else {
                return Ok(());
            };
            let entered = kind == EventKind::MouseEnter;
            let shared = runtime.clone();
            listen(card, kind, move |_| {
                dispatch(&shared, PageEvent::CardHover { index, entered });
            })
        }
        BindTarget::Image(index) => {
            let Some(image) = dom.image(index) else {
                return Ok(());
            };
            let shared = runtime.clone();
            listen(image, kind, move |_| {
                dispatch(&shared, PageEvent::ImageLoaded { index });
            })
        }
    }
}

fn listen(
    target: &EventTarget,
    kind: EventKind,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind.name(), closure.as_ref().unchecked_ref())?;
    // Listeners live for the lifetime of the page.
    closure.forget();
    Ok(())
}
