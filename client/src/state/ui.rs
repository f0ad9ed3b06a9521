//! Local UI chrome state (modals, lightbox).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the wall state so rendering
//! controls can evolve independently of item data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which add-item modal is open, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddModal {
    #[default]
    None,
    Image,
    Sticky,
}

/// Image shown in the lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal: AddModal,
    pub lightbox: Option<LightboxImage>,
    /// Add request in flight; modals disable their submit button.
    pub submitting: bool,
}

impl UiState {
    /// Open the lightbox. Suppressed while editing, where clicks belong to
    /// editing affordances.
    pub fn open_lightbox(&mut self, image: LightboxImage, edit_mode: bool) -> bool {
        if edit_mode {
            return false;
        }
        self.lightbox = Some(image);
        true
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    pub fn open_modal(&mut self, modal: AddModal) {
        self.modal = modal;
        self.submitting = false;
    }

    pub fn close_modal(&mut self) {
        self.modal = AddModal::None;
        self.submitting = false;
    }
}

/// Whether a key press should dismiss an overlay.
#[must_use]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
