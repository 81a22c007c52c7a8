use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo::timers::future::TimeoutFuture;
use showcase_core::{Notification, ToastId};
use showcase_engine::{NotificationSink, Sleeper, ToastSurface, Toaster};
use showcase_logging::showcase_warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use super::ui::constants::{TOAST_BASE_STYLE, TOAST_HIDDEN_TRANSFORM, TOAST_SHOWN_TRANSFORM};

pub(crate) type PageToaster = Toaster<DomToastSurface, GlooSleeper>;

/// Renders notifications as fixed-position elements appended to `<body>`.
pub(crate) struct DomToastSurface {
    document: Document,
    mounted: RefCell<HashMap<ToastId, HtmlElement>>,
}

impl DomToastSurface {
    pub(crate) fn new(document: Document) -> Self {
        Self {
            document,
            mounted: RefCell::new(HashMap::new()),
        }
    }

    fn set_transform(&self, id: ToastId, transform: &str) {
        if let Some(element) = self.mounted.borrow().get(&id) {
            let _ = element.style().set_property("transform", transform);
        }
    }
}

impl ToastSurface for DomToastSurface {
    fn mount(&self, id: ToastId, notification: &Notification) {
        let Some(body) = self.document.body() else {
            showcase_warn!("no <body> to show notification {:?}", notification.text);
            return;
        };
        let element = match self
            .document
            .create_element("div")
            .map(|el| el.dyn_into::<HtmlElement>())
        {
            Ok(Ok(element)) => element,
            _ => {
                showcase_warn!("failed to create notification element");
                return;
            }
        };
        element.set_class_name(&notification.class_name());
        element.set_text_content(Some(&notification.text));
        let style = format!(
            "{TOAST_BASE_STYLE} background: {};",
            notification.kind.background_color()
        );
        let _ = element.set_attribute("style", &style);
        if body.append_child(&element).is_ok() {
            self.mounted.borrow_mut().insert(id, element);
        }
    }

    fn reveal(&self, id: ToastId) {
        self.set_transform(id, TOAST_SHOWN_TRANSFORM);
    }

    fn hide(&self, id: ToastId) {
        self.set_transform(id, TOAST_HIDDEN_TRANSFORM);
    }

    fn unmount(&self, id: ToastId) {
        if let Some(element) = self.mounted.borrow_mut().remove(&id) {
            element.remove();
        }
    }
}

pub(crate) struct GlooSleeper;

#[async_trait::async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}

/// Notification sink shared by every slot and page behaviour.
pub(crate) struct ToastSink {
    toaster: Rc<PageToaster>,
}

impl ToastSink {
    pub(crate) fn new(toaster: Rc<PageToaster>) -> Self {
        Self { toaster }
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, notification: Notification) {
        let toaster = self.toaster.clone();
        spawn_local(async move {
            toaster.present(notification).await;
        });
    }
}
