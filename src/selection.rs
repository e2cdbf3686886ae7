//! Single-image selection.
//!
//! The compositor owns the one [`Selection`]; gesture code only sees it
//! through the [`SelectionScope`] capability.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::doc::ImageId;

/// Read the current selection and request changes to it.
pub trait SelectionScope {
    /// The selected image, if any.
    fn current(&self) -> Option<ImageId>;

    /// Replace the selection. `None` deselects. Returns true if it changed.
    fn request(&mut self, id: Option<ImageId>) -> bool;

    fn is_selected(&self, id: &ImageId) -> bool {
        self.current().as_ref() == Some(id)
    }
}

/// At most one selected image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ImageId>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, deselecting whatever was selected before.
    pub fn select(&mut self, id: ImageId) -> bool {
        self.request(Some(id))
    }

    /// Deselect. Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.request(None)
    }
}

impl SelectionScope for Selection {
    fn current(&self) -> Option<ImageId> {
        self.selected
    }

    fn request(&mut self, id: Option<ImageId>) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id;
        true
    }
}
