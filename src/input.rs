//! Input model: mouse buttons, cursors, and the gesture state machine.
//!
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying everything needed to apply per-event deltas and to
//! commit the result on release. `PlacementState` is the per-image view of
//! that state combined with the selection.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::doc::ImageId;
use crate::geom::{Delta, Point};
use crate::hit::ResizeAnchor;
use crate::resize::ResizeSession;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Default,
    /// Over the selected image body.
    Move,
    /// Over a resize handle; carries the CSS cursor name.
    Resize(&'static str),
}

impl Cursor {
    /// CSS cursor keyword.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::Resize(name) => name,
        }
    }

    /// Resize cursor for a handle on an image turned by `rotation` degrees.
    #[must_use]
    pub fn for_anchor(anchor: ResizeAnchor, rotation: u16) -> Self {
        let diagonal = matches!(anchor, ResizeAnchor::Ne | ResizeAnchor::Sw | ResizeAnchor::Nw | ResizeAnchor::Se);
        let rising = matches!(anchor, ResizeAnchor::Ne | ResizeAnchor::Sw);
        let vertical = matches!(anchor, ResizeAnchor::N | ResizeAnchor::S);
        // A quarter turn swaps vertical/horizontal and rising/falling diagonals.
        let turned = rotation % 180 == 90;
        let name = if diagonal {
            if rising != turned { "nesw-resize" } else { "nwse-resize" }
        } else if vertical != turned {
            "ns-resize"
        } else {
            "ew-resize"
        };
        Self::Resize(name)
    }
}

/// Interaction state of a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementState {
    /// Not selected.
    Idle,
    /// Selected; shows handles and the control panel.
    Selected,
    /// Selected and following the pointer.
    Dragging,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving the selected image.
    Dragging {
        /// Id of the image being dragged.
        id: ImageId,
        /// Committed position when the drag started.
        origin: Point,
        /// Accumulated position: `origin` plus every movement delta so far.
        pos: Point,
    },
    /// The user is resizing the selected image with one of its handles.
    Resizing {
        /// Id of the image being resized.
        id: ImageId,
        /// Which handle is being dragged.
        anchor: ResizeAnchor,
        /// Image rotation, used to map pointer movement into the image frame.
        rotation: u16,
        /// Pointer movement since the handle was grabbed, in frame pixels.
        total: Delta,
        /// Live size and aspect handling.
        session: ResizeSession,
    },
}

impl InputState {
    /// Id of the image the active gesture targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<ImageId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
