use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions};
use gloo::file::FileReadError;
use showcase_core::{ControlChange, FileMeta, SlotMsg, SlotView, UploadLimits};
use showcase_engine::{
    ImageReader, ReadError, ReadJob, SlotId, SlotRuntime, SlotSurface, SourceFile,
};
use showcase_logging::{begin_event, showcase_debug, showcase_warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, DragEvent, Element, Event, FileList, HtmlElement, HtmlInputElement, Node};

use super::toast::ToastSink;
use super::ui::constants::*;

pub(crate) struct BrowserFile(web_sys::File);

impl SourceFile for BrowserFile {
    fn meta(&self) -> FileMeta {
        FileMeta::new(self.0.name(), self.0.type_(), self.0.size() as u64)
    }
}

pub(crate) struct BrowserReader;

#[async_trait::async_trait(?Send)]
impl ImageReader<BrowserFile> for BrowserReader {
    async fn read_data_uri(&self, file: &BrowserFile) -> Result<String, ReadError> {
        let blob = gloo::file::File::from(file.0.clone());
        gloo::file::futures::read_as_data_url(&blob)
            .await
            .map_err(|err| match err {
                FileReadError::AbortedEarly => ReadError::Aborted,
                other => ReadError::Io(other.to_string()),
            })
    }
}

/// One `.image-placeholder` on the page and the runtime behind it.
pub(crate) struct DomSlot {
    runtime: RefCell<SlotRuntime<BrowserFile>>,
    surface: DomSurface,
    sink: Rc<ToastSink>,
    listeners: RefCell<Vec<EventListener>>,
}

struct DomSurface {
    document: Document,
    placeholder: HtmlElement,
    input: HtmlInputElement,
    upload_area: HtmlElement,
    remove_control: RefCell<Option<RemoveControl>>,
    owner: Weak<DomSlot>,
}

struct RemoveControl {
    button: Element,
    _listener: EventListener,
}

/// Builds a slot for every placeholder on the page. Placeholders missing a
/// file input or upload area are skipped.
pub(crate) fn discover_slots(
    document: &Document,
    limits: &UploadLimits,
    sink: Rc<ToastSink>,
) -> Vec<Rc<DomSlot>> {
    let placeholders = match document.query_selector_all(SLOT_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            showcase_warn!("placeholder lookup failed: {:?}", err);
            return Vec::new();
        }
    };

    let mut slots = Vec::new();
    for index in 0..placeholders.length() {
        let Some(placeholder) = placeholders
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let input = find_child::<HtmlInputElement>(&placeholder, FILE_INPUT_SELECTOR);
        let upload_area = find_child::<HtmlElement>(&placeholder, UPLOAD_AREA_SELECTOR);
        let (Some(input), Some(upload_area)) = (input, upload_area) else {
            showcase_warn!("placeholder {} lacks a file input or upload area", index);
            continue;
        };
        let slot = DomSlot::new(
            slots.len(),
            limits.clone(),
            document.clone(),
            placeholder,
            input,
            upload_area,
            sink.clone(),
        );
        slot.wire();
        slots.push(slot);
    }
    slots
}

fn find_child<T: JsCast>(parent: &HtmlElement, selector: &str) -> Option<T> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

impl DomSlot {
    fn new(
        id: SlotId,
        limits: UploadLimits,
        document: Document,
        placeholder: HtmlElement,
        input: HtmlInputElement,
        upload_area: HtmlElement,
        sink: Rc<ToastSink>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|owner| DomSlot {
            runtime: RefCell::new(SlotRuntime::new(id, limits)),
            surface: DomSurface {
                document,
                placeholder,
                input,
                upload_area,
                remove_control: RefCell::new(None),
                owner: owner.clone(),
            },
            sink,
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn wire(self: &Rc<Self>) {
        let placeholder = self.surface.placeholder.clone();
        let input = self.surface.input.clone();
        let mut listeners = Vec::with_capacity(5);

        let weak = Rc::downgrade(self);
        let file_input = input.clone();
        listeners.push(EventListener::new(&placeholder, "click", move |event| {
            // Clicks forwarded to the file input bubble back up here.
            if is_from(event, &file_input) {
                return;
            }
            with_slot(&weak, |slot| slot.dispatch(SlotMsg::Activated));
        }));

        for (name, msg) in [("dragover", SlotMsg::DragOver), ("dragleave", SlotMsg::DragLeft)] {
            let weak = Rc::downgrade(self);
            listeners.push(EventListener::new_with_options(
                &placeholder,
                name,
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    with_slot(&weak, |slot| slot.dispatch(msg.clone()));
                },
            ));
        }

        let weak = Rc::downgrade(self);
        listeners.push(EventListener::new_with_options(
            &placeholder,
            "drop",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let files = event
                    .dyn_ref::<DragEvent>()
                    .and_then(DragEvent::data_transfer)
                    .and_then(|transfer| transfer.files());
                with_slot(&weak, |slot| slot.drop_files(files));
            },
        ));

        let weak = Rc::downgrade(self);
        let picker = input.clone();
        listeners.push(EventListener::new(&input, "change", move |_event| {
            let Some(file) = picker.files().and_then(|files| files.get(0)) else {
                return;
            };
            with_slot(&weak, |slot| slot.choose_file(BrowserFile(file)));
        }));

        self.listeners.borrow_mut().extend(listeners);
        self.surface.adopt_markup_control();
        self.runtime.borrow().refresh(&self.surface);
    }

    fn dispatch(self: &Rc<Self>, msg: SlotMsg) {
        let job = self
            .runtime
            .borrow_mut()
            .dispatch(msg, &self.surface, self.sink.as_ref());
        self.spawn_read(job);
    }

    fn choose_file(self: &Rc<Self>, file: BrowserFile) {
        let job = self
            .runtime
            .borrow_mut()
            .choose_file(file, &self.surface, self.sink.as_ref());
        self.spawn_read(job);
    }

    fn drop_files(self: &Rc<Self>, files: Option<FileList>) {
        let files = files.into_iter().flat_map(|list| {
            (0..list.length()).filter_map(move |index| list.get(index).map(BrowserFile))
        });
        let job = self
            .runtime
            .borrow_mut()
            .drop_files(files, &self.surface, self.sink.as_ref());
        self.spawn_read(job);
    }

    fn spawn_read(self: &Rc<Self>, job: Option<ReadJob<BrowserFile>>) {
        let Some(job) = job else {
            return;
        };
        let slot_id = self.runtime.borrow().id();
        let weak = Rc::downgrade(self);
        spawn_local(async move {
            let ticket = job.ticket();
            let Some(msg) = job.run(&BrowserReader).await else {
                showcase_debug!("slot {} read #{} cancelled", slot_id, ticket);
                return;
            };
            begin_event();
            match weak.upgrade() {
                Some(slot) => slot.dispatch(msg),
                None => showcase_debug!(
                    "slot {} read #{} finished after the slot went away",
                    slot_id,
                    ticket
                ),
            }
        });
    }
}

fn with_slot(weak: &Weak<DomSlot>, action: impl FnOnce(&Rc<DomSlot>)) {
    begin_event();
    if let Some(slot) = weak.upgrade() {
        action(&slot);
    }
}

fn is_from(event: &Event, element: &HtmlInputElement) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .is_some_and(|node| element.is_same_node(Some(&node)))
}

impl DomSurface {
    /// Takes over a removal control shipped in the markup so the first render
    /// reconciles it like one this surface attached itself.
    fn adopt_markup_control(&self) {
        if let Ok(Some(button)) = self.placeholder.query_selector(REMOVE_BUTTON_SELECTOR) {
            self.bind_remove_control(button);
        }
    }

    fn attach_remove_control(&self) {
        if let Some(button) = self.create_remove_button() {
            self.bind_remove_control(button);
        }
    }

    fn bind_remove_control(&self, button: Element) {
        let owner = self.owner.clone();
        let listener = EventListener::new(&button, "click", move |event| {
            event.stop_propagation();
            with_slot(&owner, |slot| slot.dispatch(SlotMsg::RemoveClicked));
        });
        *self.remove_control.borrow_mut() = Some(RemoveControl {
            button,
            _listener: listener,
        });
    }

    fn create_remove_button(&self) -> Option<Element> {
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(err) => {
                showcase_warn!("failed to create remove control: {:?}", err);
                return None;
            }
        };
        button.set_class_name(REMOVE_BUTTON_CLASS);
        button.set_text_content(Some(REMOVE_BUTTON_LABEL));
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("title", REMOVE_BUTTON_TITLE);
        self.placeholder.append_child(&button).ok()?;
        Some(button)
    }

    fn detach_remove_control(&self) {
        let Some(control) = self.remove_control.borrow_mut().take() else {
            return;
        };
        control.button.remove();
        // The control's own click handler may be the caller; drop its closure later.
        spawn_local(async move {
            drop(control);
        });
    }
}

impl SlotSurface for DomSurface {
    fn render(&self, view: &SlotView) {
        let classes = self.placeholder.class_list();
        for (name, on) in view.class_flags() {
            let _ = classes.toggle_with_force(name, on);
        }

        let style = self.upload_area.style();
        let _ = match view.background_image() {
            Some(value) => style.set_property("background-image", &value),
            None => style.remove_property("background-image").map(|_| ()),
        };

        let attached = self.remove_control.borrow().is_some();
        match view.reconcile_remove_control(attached) {
            ControlChange::Attach => self.attach_remove_control(),
            ControlChange::Detach => self.detach_remove_control(),
            ControlChange::Keep => {}
        }
    }

    fn open_picker(&self) {
        self.input.click();
    }

    fn reset_picker(&self) {
        self.input.set_value("");
    }
}
