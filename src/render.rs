//! Scene composition: what the display layer draws and in which order.
//!
//! The engine does not paint. It produces a [`Scene`] describing the frame and
//! every image with its live geometry (including an in-flight drag or resize),
//! clip outline and stacking order, and the host draws it however it likes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{SELECTED_Z_INDEX, SLIDER_MAX_PX, SLIDER_MIN_PX};
use crate::doc::{ClipShape, ImageId, ImageRecord, ImageStore};
use crate::geom::{Point, Rect, Size};
use crate::hit::popup_rect;
use crate::input::{InputState, PlacementState};

/// Hexagon vertices as fractions of the bounding box, clockwise from top-left.
pub const HEXAGON_VERTICES: [(f64, f64); 6] =
    [(0.25, 0.067), (0.75, 0.067), (1.0, 0.5), (0.75, 0.933), (0.25, 0.933), (0.0, 0.5)];

/// Clip outline in the image's local pixel space (origin at its top-left).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClipPath {
    None,
    Circle { center: Point, radius: f64 },
    Polygon { points: Vec<Point> },
}

impl ClipPath {
    /// Resolve `shape` for an image of `size`.
    ///
    /// The circle radius follows CSS `circle(50%)`: half of the box diagonal
    /// divided by √2, which is half the side for a square.
    #[must_use]
    pub fn for_shape(shape: ClipShape, size: Size) -> Self {
        match shape {
            ClipShape::None => Self::None,
            ClipShape::Circle => Self::Circle {
                center: Point::new(size.width / 2.0, size.height / 2.0),
                radius: 0.5 * ((size.width * size.width + size.height * size.height) / 2.0).sqrt(),
            },
            ClipShape::Hexagon => Self::Polygon {
                points: HEXAGON_VERTICES
                    .iter()
                    .map(|(fx, fy)| Point::new(fx * size.width, fy * size.height))
                    .collect(),
            },
        }
    }
}

/// CSS `clip-path` value for a shape.
#[must_use]
pub fn clip_css(shape: ClipShape) -> &'static str {
    match shape {
        ClipShape::None => "none",
        ClipShape::Circle => "circle(50%)",
        ClipShape::Hexagon => "polygon(25% 6.7%, 75% 6.7%, 100% 50%, 75% 93.3%, 25% 93.3%, 0% 50%)",
    }
}

/// The frame images are placed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub width: f64,
    pub height: f64,
    pub background: String,
}

/// Values shown in the selected image's control panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    /// Where the panel sits, in frame pixels.
    pub popup: Rect,
    pub clip_shape: ClipShape,
    pub lock_aspect_ratio: bool,
    /// Width slider position, clamped to the slider range.
    pub width: i64,
    /// Height slider position, clamped to the slider range.
    pub height: i64,
}

/// One image as it should be drawn right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: ImageId,
    /// Position in the collection.
    pub index: usize,
    pub src: String,
    /// Displayed bounds, before rotation.
    pub rect: Rect,
    pub rotation: u16,
    pub clip: ClipPath,
    pub clip_css: &'static str,
    /// Stacking order; higher draws on top.
    pub z_index: i64,
    pub state: PlacementState,
    /// Present only for the selected image.
    pub controls: Option<Controls>,
}

/// Everything the display layer needs for one frame of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub frame: FrameView,
    /// Items in collection order.
    pub items: Vec<RenderItem>,
}

impl Scene {
    /// Items sorted bottom to top.
    #[must_use]
    pub fn draw_order(&self) -> Vec<&RenderItem> {
        let mut items: Vec<&RenderItem> = self.items.iter().collect();
        items.sort_by_key(|item| (item.z_index, item.index));
        items
    }
}

/// Build the scene from engine state.
#[must_use]
pub fn compose(store: &ImageStore, selected: Option<ImageId>, input: &InputState, frame: FrameView) -> Scene {
    let items = store
        .records()
        .iter()
        .enumerate()
        .map(|(index, rec)| render_item(index, rec, selected, input))
        .collect();
    Scene { frame, items }
}

fn render_item(index: usize, rec: &ImageRecord, selected: Option<ImageId>, input: &InputState) -> RenderItem {
    let is_selected = selected == Some(rec.id);
    let rect = display_rect(rec, input);

    let state = match input {
        InputState::Dragging { id, .. } if *id == rec.id && is_selected => PlacementState::Dragging,
        _ if is_selected => PlacementState::Selected,
        _ => PlacementState::Idle,
    };

    let controls = is_selected.then(|| {
        let shown = ImageRecord { x: rect.x, y: rect.y, width: rect.width, height: rect.height, ..rec.clone() };
        Controls {
            popup: popup_rect(&shown),
            clip_shape: rec.clip_shape,
            lock_aspect_ratio: rec.lock_aspect_ratio,
            width: slider_position(rect.width),
            height: slider_position(rect.height),
        }
    });

    RenderItem {
        id: rec.id,
        index,
        src: rec.src.clone(),
        rect,
        rotation: rec.rotation,
        clip: ClipPath::for_shape(rec.clip_shape, Size::new(rect.width, rect.height)),
        clip_css: clip_css(rec.clip_shape),
        z_index: if is_selected { SELECTED_Z_INDEX } else { i64::try_from(index).unwrap_or(i64::MAX) },
        state,
        controls,
    }
}

/// Committed geometry, overridden by the active gesture on this image.
fn display_rect(rec: &ImageRecord, input: &InputState) -> Rect {
    match input {
        InputState::Dragging { id, pos, .. } if *id == rec.id => Rect::new(pos.x, pos.y, rec.width, rec.height),
        InputState::Resizing { id, session, .. } if *id == rec.id => {
            let size = session.current();
            Rect::new(rec.x, rec.y, size.width, size.height)
        }
        _ => rec.rect(),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn slider_position(px: f64) -> i64 {
    (px.round() as i64).clamp(SLIDER_MIN_PX, SLIDER_MAX_PX)
}
