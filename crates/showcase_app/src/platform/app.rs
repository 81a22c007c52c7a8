use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use showcase_engine::Toaster;
use showcase_logging::{begin_event, showcase_info};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::logging;
use super::page::{self, PageBehaviour};
use super::toast::{DomToastSurface, GlooSleeper, ToastSink};
use super::ui::constants::CONFIG_SCRIPT_ID;
use super::upload::{self, DomSlot};
use crate::config;

/// Everything that must stay alive for the page to keep responding.
struct PageBindings {
    _slots: Vec<Rc<DomSlot>>,
    _page: Rc<PageBehaviour>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static BINDINGS: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

pub fn run_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            start(&ready_window, &ready_document);
        })
        .forget();
    } else {
        start(&window, &document);
    }
    Ok(())
}

fn start(window: &Window, document: &Document) {
    let config_text = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    // Install the logger first so config warnings reach the console.
    logging::initialize(config::LogLevel::default().to_filter());
    begin_event();
    let config = config::load_or_default(config_text.as_deref());
    log::set_max_level(config.log_level.to_filter());

    let toaster = Rc::new(Toaster::new(
        config.toast,
        DomToastSurface::new(document.clone()),
        GlooSleeper,
    ));
    let sink = Rc::new(ToastSink::new(toaster));

    let slots = upload::discover_slots(document, &config.upload, sink.clone());
    let (page, listeners) = page::wire(window, document, config.scroll, sink);
    showcase_info!(
        "showcase ready: {} upload slot(s), {} page listener(s)",
        slots.len(),
        listeners.len()
    );

    BINDINGS.with(|bindings| {
        *bindings.borrow_mut() = Some(PageBindings {
            _slots: slots,
            _page: page,
            _listeners: listeners,
        });
    });
}
