pub const CLASS_LOADING: &str = "loading";
pub const CLASS_HAS_IMAGE: &str = "has-image";
pub const CLASS_DRAG_OVER: &str = "drag-over";

/// Visual projection of a slot. Surfaces apply it after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotView {
    pub armed: bool,
    pub loading: bool,
    pub preview_uri: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChange {
    Attach,
    Detach,
    Keep,
}

impl SlotView {
    pub fn has_image(&self) -> bool {
        self.preview_uri.is_some()
    }

    pub fn shows_remove_control(&self) -> bool {
        self.has_image()
    }

    /// Class toggles for the placeholder element.
    pub fn class_flags(&self) -> [(&'static str, bool); 3] {
        [
            (CLASS_LOADING, self.loading),
            (CLASS_HAS_IMAGE, self.has_image()),
            (CLASS_DRAG_OVER, self.armed),
        ]
    }

    /// CSS `background-image` value for the upload area, if any.
    pub fn background_image(&self) -> Option<String> {
        self.preview_uri.as_ref().map(|uri| format!("url({uri})"))
    }

    /// What to do with the removal control given whether one is attached now.
    /// Never asks for a second control.
    pub fn reconcile_remove_control(&self, attached: bool) -> ControlChange {
        match (self.shows_remove_control(), attached) {
            (true, false) => ControlChange::Attach,
            (false, true) => ControlChange::Detach,
            _ => ControlChange::Keep,
        }
    }
}
