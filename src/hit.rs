#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::Serialize;

use crate::consts::{HANDLE_RADIUS_PX, POPUP_HEIGHT_PX, POPUP_OFFSET_PX, POPUP_WIDTH_PX};
use crate::doc::{ImageId, ImageRecord, ImageStore};
use crate::geom::{Point, Rect};

/// Which part of an image was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    /// The control panel shown under the selected image.
    Popup,
}

/// Anchor position for resize handles, in the image's unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    pub const ALL: [ResizeAnchor; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Horizontal pull direction: -1 left edge, 1 right edge, 0 neither.
    #[must_use]
    pub fn x_sign(self) -> f64 {
        match self {
            Self::Ne | Self::E | Self::Se => 1.0,
            Self::Nw | Self::W | Self::Sw => -1.0,
            Self::N | Self::S => 0.0,
        }
    }

    /// Vertical pull direction: -1 top edge, 1 bottom edge, 0 neither.
    #[must_use]
    pub fn y_sign(self) -> f64 {
        match self {
            Self::Se | Self::S | Self::Sw => 1.0,
            Self::Ne | Self::N | Self::Nw => -1.0,
            Self::E | Self::W => 0.0,
        }
    }

    /// Handle position on `rect`.
    #[must_use]
    pub fn point_on(self, rect: &Rect) -> Point {
        let c = rect.center();
        Point::new(c.x + self.x_sign() * rect.width / 2.0, c.y + self.y_sign() * rect.height / 2.0)
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub image_id: ImageId,
    pub part: HitPart,
}

/// Control panel rectangle for a selected image: just under its on-screen
/// bounding box, left-aligned with it.
#[must_use]
pub fn popup_rect(rec: &ImageRecord) -> Rect {
    let bounds = rec.rect().rotated_bounds(rec.rotation);
    Rect::new(bounds.x, bounds.y + bounds.height + POPUP_OFFSET_PX, POPUP_WIDTH_PX, POPUP_HEIGHT_PX)
}

/// Test which image (if any) is under `pt`, in frame pixels.
///
/// The selected image is checked first (control panel, then resize handles,
/// then body) because it is drawn on top. Other images are checked from the
/// highest collection index down.
#[must_use]
pub fn hit_test(pt: Point, store: &ImageStore, selected: Option<ImageId>) -> Option<Hit> {
    let selected_rec = selected.and_then(|id| store.get(&id));

    if let Some(rec) = selected_rec {
        if popup_rect(rec).contains(pt) {
            return Some(Hit { image_id: rec.id, part: HitPart::Popup });
        }
        if let Some(anchor) = handle_at(rec, pt) {
            return Some(Hit { image_id: rec.id, part: HitPart::ResizeHandle(anchor) });
        }
        if body_contains(rec, pt) {
            return Some(Hit { image_id: rec.id, part: HitPart::Body });
        }
    }

    store
        .records()
        .iter()
        .rev()
        .filter(|rec| Some(rec.id) != selected)
        .find(|rec| body_contains(rec, pt))
        .map(|rec| Hit { image_id: rec.id, part: HitPart::Body })
}

fn body_contains(rec: &ImageRecord, pt: Point) -> bool {
    let rect = rec.rect();
    rect.contains(rect.to_local(pt, rec.rotation))
}

fn handle_at(rec: &ImageRecord, pt: Point) -> Option<ResizeAnchor> {
    let rect = rec.rect();
    let local = rect.to_local(pt, rec.rotation);
    ResizeAnchor::ALL.into_iter().find(|anchor| {
        let h = anchor.point_on(&rect);
        (local.x - h.x).abs() <= HANDLE_RADIUS_PX && (local.y - h.y).abs() <= HANDLE_RADIUS_PX
    })
}
