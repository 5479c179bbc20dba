use crate::core::form::FormInput;
use crate::core::viewport::{SectionMetrics, ViewportSnapshot};
use crate::page::{FeedbackKind, PageBindings, PageLayout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window, console,
};

const CARD_SELECTOR: &str = ".project-card, .experience-card, .skills-card";

/// Live-document implementation of `PageBindings`. All element handles are
/// resolved once at binding time; optional pieces that are missing leave
/// their feature unwired.
#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
    hamburger: Option<HtmlElement>,
    nav_menu: Option<HtmlElement>,
    nav_links: Vec<HtmlElement>,
    form: Option<HtmlFormElement>,
    cards: Vec<HtmlElement>,
    project_cards: Vec<usize>,
    sections: Vec<HtmlElement>,
    images: Vec<HtmlImageElement>,
    hero: Option<HtmlElement>,
}

impl DomPage {
    pub fn bind(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("document is not available"))?;

        let cards = query_all::<HtmlElement>(&document, CARD_SELECTOR);
        let project_cards = cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.class_list().contains("project-card"))
            .map(|(index, _)| index)
            .collect();

        Ok(Self {
            hamburger: query_one(&document, ".hamburger"),
            nav_menu: query_one(&document, ".nav-menu"),
            nav_links: query_all::<HtmlElement>(&document, ".nav-link"),
            form: query_one(&document, "#contactForm"),
            cards,
            project_cards,
            sections: query_all::<HtmlElement>(&document, "section[id]"),
            images: query_all::<HtmlImageElement>(&document, "img"),
            hero: query_one(&document, ".hero-title"),
            window: window.clone(),
            document,
        })
    }

    /// Initial visual state: cards hidden and offset, images transparent,
    /// both with their transitions armed.
    pub fn prepare(&self) {
        for card in &self.cards {
            set_style(card, "opacity", "0");
            set_style(card, "transform", "translateY(30px)");
            set_style(card, "transition", "opacity 0.6s ease, transform 0.6s ease");
        }
        for image in &self.images {
            set_style(image, "opacity", "0");
            set_style(image, "transition", "opacity 0.5s ease");
        }
    }

    pub fn layout(&self) -> PageLayout {
        PageLayout {
            has_menu: self.hamburger.is_some() && self.nav_menu.is_some(),
            has_form: self.form.is_some(),
            nav_links: self.nav_links.len(),
            project_cards: self.project_cards.clone(),
            images: self.images.len(),
        }
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        let viewport_height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);

        let card_tops = self
            .cards
            .iter()
            .map(|card| card.get_bounding_client_rect().top())
            .collect();

        let sections = self
            .sections
            .iter()
            .map(|section| SectionMetrics {
                id: section.id(),
                top: section.get_bounding_client_rect().top(),
                height: f64::from(section.offset_height()),
            })
            .collect();

        ViewportSnapshot {
            viewport_height,
            card_tops,
            sections,
        }
    }

    pub fn form_input(&self) -> FormInput {
        FormInput {
            name: self.field_value("nombre"),
            email: self.field_value("email"),
            message: self.field_value("mensaje"),
        }
    }

    pub fn hero_text(&self) -> Option<String> {
        self.hero.as_ref().and_then(|hero| hero.text_content())
    }

    pub fn hamburger(&self) -> Option<&HtmlElement> {
        self.hamburger.as_ref()
    }

    pub fn nav_menu(&self) -> Option<&HtmlElement> {
        self.nav_menu.as_ref()
    }

    pub fn nav_link(&self, index: usize) -> Option<&HtmlElement> {
        self.nav_links.get(index)
    }

    pub fn form(&self) -> Option<&HtmlFormElement> {
        self.form.as_ref()
    }

    pub fn card(&self, index: usize) -> Option<&HtmlElement> {
        self.cards.get(index)
    }

    pub fn image(&self, index: usize) -> Option<&HtmlImageElement> {
        self.images.get(index)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn field_value(&self, id: &str) -> String {
        let Some(element) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        String::new()
    }
}

impl PageBindings for DomPage {
    fn section_offset(&self, section_id: &str) -> Option<f64> {
        self.sections
            .iter()
            .find(|section| section.id() == section_id)
            .map(|section| f64::from(section.offset_top()))
    }

    fn set_menu_open(&self, open: bool) {
        for element in [self.hamburger.as_ref(), self.nav_menu.as_ref()]
            .into_iter()
            .flatten()
        {
            let list = element.class_list();
            let _ = if open {
                list.add_1("active")
            } else {
                list.remove_1("active")
            };
        }
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn reveal_card(&self, index: usize) {
        if let Some(card) = self.cards.get(index) {
            set_style(card, "opacity", "1");
            set_style(card, "transform", "translateY(0)");
        }
    }

    fn set_card_hover(&self, index: usize, raised: bool) {
        if let Some(card) = self.cards.get(index) {
            let transform = if raised {
                "translateY(-10px) scale(1.02)"
            } else {
                "translateY(0) scale(1)"
            };
            set_style(card, "transform", transform);
        }
    }

    fn set_active_link(&self, section_id: Option<&str>) {
        for link in &self.nav_links {
            let _ = link.class_list().remove_1("active");
        }
        let Some(id) = section_id else {
            return;
        };
        let href = format!("#{id}");
        for link in &self.nav_links {
            if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                let _ = link.class_list().add_1("active");
            }
        }
    }

    fn fade_in_image(&self, index: usize) {
        if let Some(image) = self.images.get(index) {
            set_style(image, "opacity", "1");
        }
    }

    fn set_hero_text(&self, text: &str) {
        if let Some(hero) = &self.hero {
            hero.set_text_content(Some(text));
        }
    }

    fn clear_feedback(&self, kind: FeedbackKind) {
        let Ok(nodes) = self.document.query_selector_all(kind.selector()) else {
            return;
        };
        for index in 0..nodes.length() {
            if let Some(node) = nodes.item(index)
                && let Some(element) = node.dyn_ref::<Element>()
            {
                element.remove();
            }
        }
    }

    fn append_feedback(&self, kind: FeedbackKind, text: &str) {
        let Some(form) = &self.form else {
            return;
        };
        let Ok(element) = self.document.create_element("div") else {
            return;
        };
        let Ok(node) = element.dyn_into::<HtmlElement>() else {
            return;
        };

        node.set_class_name(kind.class_name());
        match kind {
            FeedbackKind::Error => {
                set_style(&node, "color", "#f97316");
                set_style(&node, "font-size", "0.9rem");
                set_style(&node, "margin-top", "0.5rem");
            }
            FeedbackKind::Success => {
                set_style(&node, "color", "#38bdf8");
                set_style(&node, "font-size", "1rem");
                set_style(&node, "margin-top", "1rem");
                set_style(&node, "padding", "1rem");
                set_style(&node, "background-color", "rgba(56, 189, 248, 0.1)");
                set_style(&node, "border-radius", "8px");
                set_style(&node, "border", "1px solid #38bdf8");
            }
        }
        node.set_text_content(Some(text));
        let _ = form.append_child(&node);
    }

    fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn log(&self, message: &str) {
        console::log_1(&JsValue::from_str(message));
    }
}

fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let mut out = Vec::new();
    let Ok(nodes) = document.query_selector_all(selector) else {
        return out;
    };
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index)
            && let Ok(element) = node.dyn_into::<T>()
        {
            out.push(element);
        }
    }
    out
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
