//! Navigation menu, smooth scrolling and scroll-driven styling.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use showcase_core::{
    active_section, anchor_fragment, scroll_target, should_enter, should_reveal,
    timeline_delay_ms, timeline_visible, HeaderStyle, NavMenu, NavMsg, Notification,
    ScrollSettings, SectionBounds, Url,
};
use showcase_engine::NotificationSink;
use showcase_logging::{begin_event, showcase_debug, showcase_warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window,
};

use super::toast::ToastSink;
use super::ui::constants::*;

pub(crate) struct PageBehaviour {
    window: Window,
    document: Document,
    settings: ScrollSettings,
    menu: Cell<NavMenu>,
    toggle: Option<Element>,
    nav_menu: Option<Element>,
    header: Option<HtmlElement>,
    pending_scroll: RefCell<Option<Timeout>>,
    entrances: Vec<ScrollAnimated>,
    timeline: Vec<ScrollAnimated>,
    timeline_timers: RefCell<Vec<Timeout>>,
    sink: Rc<ToastSink>,
}

/// An element that animates the first time it scrolls into view.
struct ScrollAnimated {
    element: HtmlElement,
    done: Cell<bool>,
}

impl ScrollAnimated {
    fn collect(document: &Document, selector: &str) -> Vec<Self> {
        elements(document, selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| ScrollAnimated {
                element,
                done: Cell::new(false),
            })
            .collect()
    }

    fn is_in_view(&self, viewport_height: f64, check: impl Fn(f64, f64, f64) -> bool) -> bool {
        let rect = self.element.get_bounding_client_rect();
        check(rect.top(), rect.height(), viewport_height)
    }
}

pub(crate) fn wire(
    window: &Window,
    document: &Document,
    settings: ScrollSettings,
    sink: Rc<ToastSink>,
) -> (Rc<PageBehaviour>, Vec<EventListener>) {
    let page = Rc::new(PageBehaviour {
        window: window.clone(),
        document: document.clone(),
        settings,
        menu: Cell::new(NavMenu::default()),
        toggle: document.get_element_by_id(MOBILE_MENU_ID),
        nav_menu: document.query_selector(NAV_MENU_SELECTOR).ok().flatten(),
        header: document
            .query_selector(HEADER_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        pending_scroll: RefCell::new(None),
        entrances: ScrollAnimated::collect(document, ENTRANCE_SELECTOR),
        timeline: ScrollAnimated::collect(document, TIMELINE_SELECTOR),
        timeline_timers: RefCell::new(Vec::new()),
        sink,
    });
    inject_story_styles(document);
    page.hide_entrances();

    let mut listeners = Vec::new();

    if let Some(toggle) = &page.toggle {
        let weak = Rc::downgrade(&page);
        listeners.push(EventListener::new(toggle, "click", move |_| {
            with_page(&weak, |page| page.apply_nav(NavMsg::TogglePressed));
        }));
    }

    for link in elements(document, NAV_LINK_SELECTOR) {
        let weak = Rc::downgrade(&page);
        listeners.push(EventListener::new(&link, "click", move |_| {
            with_page(&weak, |page| page.apply_nav(NavMsg::LinkClicked));
        }));
    }

    for link in elements(document, ANCHOR_LINK_SELECTOR) {
        let weak = Rc::downgrade(&page);
        let anchor = link.clone();
        listeners.push(EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| with_page(&weak, |page| page.scroll_to_anchor(event, &anchor)),
        ));
    }

    let weak = Rc::downgrade(&page);
    listeners.push(EventListener::new(document, "keydown", move |event| {
        let is_escape = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Escape");
        if is_escape {
            with_page(&weak, |page| page.apply_nav(NavMsg::EscapePressed));
        }
    }));

    let weak = Rc::downgrade(&page);
    listeners.push(EventListener::new(window, "scroll", move |_| {
        if let Some(page) = weak.upgrade() {
            page.schedule_scroll_update();
        }
    }));

    if let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) {
        let weak = Rc::downgrade(&page);
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                with_page(&weak, |page| {
                    page.sink.notify(Notification::success(CONTACT_SENT_TEXT));
                });
            },
        ));
    }

    page.on_scroll();
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOADED_CLASS);
    }

    (page, listeners)
}

fn with_page(weak: &Weak<PageBehaviour>, action: impl FnOnce(&Rc<PageBehaviour>)) {
    begin_event();
    if let Some(page) = weak.upgrade() {
        action(&page);
    }
}

fn inject_story_styles(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(STORY_STYLES));
            let _ = head.append_child(&style);
        }
        Err(err) => showcase_warn!("failed to inject story styles: {:?}", err),
    }
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl PageBehaviour {
    fn apply_nav(&self, msg: NavMsg) {
        let mut menu = self.menu.get();
        if !menu.update(msg) {
            return;
        }
        self.menu.set(menu);
        for element in [&self.toggle, &self.nav_menu].into_iter().flatten() {
            let _ = element
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, menu.is_open());
        }
    }

    fn scroll_to_anchor(&self, event: &Event, link: &Element) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(page_url) = self
            .window
            .location()
            .href()
            .ok()
            .and_then(|href| Url::parse(&href).ok())
        else {
            return;
        };
        let Some(id) = anchor_fragment(&page_url, &href) else {
            return;
        };
        let Some(target) = self
            .document
            .get_element_by_id(&id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            showcase_debug!("no element #{} for link {:?}", id, href);
            return;
        };

        event.prevent_default();
        let header_height = self.header.as_ref().map_or(0, HtmlElement::offset_height);
        let top = scroll_target(f64::from(target.offset_top()), f64::from(header_height));
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn schedule_scroll_update(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let timeout = Timeout::new(self.settings.debounce_ms, move || {
            with_page(&weak, |page| page.on_scroll());
        });
        // Replacing the handle cancels the previous timer.
        *self.pending_scroll.borrow_mut() = Some(timeout);
    }

    fn on_scroll(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self.viewport_height();
        self.style_header(scroll_y);
        self.reveal_visible(viewport_height);
        self.show_entrances(viewport_height);
        self.animate_timeline(viewport_height);
        self.highlight_active_link(scroll_y);
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn hide_entrances(&self) {
        for entrance in &self.entrances {
            let style = entrance.element.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", ENTRANCE_HIDDEN_TRANSFORM);
            let _ = style.set_property("transition", ENTRANCE_TRANSITION);
        }
    }

    fn show_entrances(&self, viewport_height: f64) {
        for entrance in self.entrances.iter().filter(|e| !e.done.get()) {
            let visible = entrance.is_in_view(viewport_height, |top, height, vh| {
                should_enter(top, height, vh, &self.settings)
            });
            if visible {
                entrance.done.set(true);
                let style = entrance.element.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", ENTRANCE_SHOWN_TRANSFORM);
            }
        }
    }

    /// Items that come into view in the same pass animate one after another.
    fn animate_timeline(&self, viewport_height: f64) {
        let appeared = self.timeline.iter().filter(|item| {
            !item.done.get()
                && item.is_in_view(viewport_height, |top, height, vh| {
                    timeline_visible(top, height, vh, &self.settings)
                })
        });
        let mut timers = self.timeline_timers.borrow_mut();
        for (position, item) in appeared.enumerate() {
            item.done.set(true);
            let element = item.element.clone();
            let delay = timeline_delay_ms(position, &self.settings);
            timers.push(Timeout::new(delay, move || {
                let _ = element.class_list().add_1(TIMELINE_ANIMATED_CLASS);
            }));
        }
    }

    fn style_header(&self, scroll_y: f64) {
        let Some(header) = &self.header else {
            return;
        };
        let look = HeaderStyle::for_offset(scroll_y, &self.settings);
        let style = header.style();
        let _ = style.set_property("background-color", look.background_color());
        let _ = style.set_property("box-shadow", look.box_shadow());
    }

    fn reveal_visible(&self, viewport_height: f64) {
        for element in elements(&self.document, REVEAL_SELECTOR) {
            let top = element.get_bounding_client_rect().top();
            if should_reveal(top, viewport_height, &self.settings) {
                let _ = element.class_list().add_1(REVEALED_CLASS);
            }
        }
    }

    fn highlight_active_link(&self, scroll_y: f64) {
        let sections: Vec<SectionBounds> = elements(&self.document, SECTION_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|section| SectionBounds {
                id: section.id(),
                offset_top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect();
        let active = active_section(scroll_y, &sections, &self.settings);

        for link in elements(&self.document, NAV_LINK_SELECTOR) {
            let is_active = match (active, link.get_attribute("href")) {
                (Some(id), Some(href)) => href.strip_prefix('#') == Some(id),
                _ => false,
            };
            let _ = link.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
        }
    }
}
