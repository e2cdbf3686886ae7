use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CanvasConfig;
use crate::consts::{SLIDER_MAX_PX, SLIDER_MIN_PX};
use crate::doc::{ClipShape, ImageId, ImageRecord, ImageStore, Ingest, PartialImageRecord};
use crate::error::PlacementError;
use crate::geom::{Delta, Point, Size};
use crate::hit::{Hit, HitPart, hit_test};
use crate::input::{Button, Cursor, InputState, PlacementState};
use crate::locator::FileHandle;
use crate::render::{FrameView, Scene, compose};
use crate::resize::ResizeSession;
use crate::selection::{Selection, SelectionScope};
use crate::units::{FrameDimensions, Unit};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    /// The collection was rebuilt by an ingestion call.
    ImagesChanged(Ingest),
    ImageUpdated { id: ImageId, fields: PartialImageRecord },
    ImageRotated { id: ImageId, rotation: u16 },
    ImageDeleted { id: ImageId },
    SelectionChanged(Option<ImageId>),
    FrameChanged,
    SetCursor(Cursor),
    RenderNeeded,
}

/// Which slider a dimension edit comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}

/// The placement engine: frame settings, the image store, the selection and
/// the active gesture.
///
/// Every handler is synchronous and returns the [`Action`]s the host needs to
/// react to. The engine never panics on bad ids; unknown or unselected targets
/// are ignored.
#[derive(Debug)]
pub struct Engine {
    store: ImageStore,
    selection: Selection,
    input: InputState,
    frame: FrameDimensions,
    background: String,
    cursor: Cursor,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given initial frame.
    #[must_use]
    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            store: ImageStore::new(),
            selection: Selection::new(),
            input: InputState::Idle,
            frame: config.frame,
            background: config.background,
            cursor: Cursor::Default,
        }
    }

    // --- Frame ---

    /// Set the frame size in real-world units.
    pub fn set_frame(&mut self, width: f64, height: f64, unit: Unit) -> Result<Vec<Action>, PlacementError> {
        if !width.is_finite() {
            return Err(PlacementError::NonFinite { field: "width" });
        }
        if !height.is_finite() {
            return Err(PlacementError::NonFinite { field: "height" });
        }
        self.frame = FrameDimensions::new(width, height, unit);
        Ok(vec![Action::FrameChanged, Action::RenderNeeded])
    }

    /// Set the frame background color.
    pub fn set_background(&mut self, color: &str) -> Result<Vec<Action>, PlacementError> {
        let color = color.trim();
        if color.is_empty() {
            return Err(PlacementError::EmptyColor);
        }
        self.background = color.to_string();
        Ok(vec![Action::FrameChanged, Action::RenderNeeded])
    }

    /// Frame size in pixels.
    #[must_use]
    pub fn frame_size(&self) -> Size {
        self.frame.to_pixels()
    }

    #[must_use]
    pub fn frame(&self) -> &FrameDimensions {
        &self.frame
    }

    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    // --- Ingestion ---

    /// Add uploaded files. See [`ImageStore::ingest_files`].
    pub fn ingest_files<I>(&mut self, files: I) -> Vec<Action>
    where
        I: IntoIterator<Item = FileHandle>,
    {
        let outcome = self.store.ingest_files(files);
        let mut actions = vec![Action::ImagesChanged(outcome)];
        self.reconcile(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Replace URL images with those listed in `text`. See [`ImageStore::ingest_urls`].
    pub fn ingest_urls(&mut self, text: &str) -> Vec<Action> {
        let outcome = self.store.ingest_urls(text);
        let mut actions = vec![Action::ImagesChanged(outcome)];
        self.reconcile(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Drop selection and gesture state that point at records no longer in the store.
    fn reconcile(&mut self, actions: &mut Vec<Action>) {
        if let Some(id) = self.input.target() {
            if self.store.get(&id).is_none() {
                self.input = InputState::Idle;
            }
        }
        if let Some(id) = self.selection.current() {
            if self.store.get(&id).is_none() && self.selection.clear() {
                actions.push(Action::SelectionChanged(None));
            }
        }
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt` (frame pixels).
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        // No cancel gesture exists; a press that arrives mid-gesture ends it.
        let mut actions = self.finish_gesture();

        let hit = hit_test(pt, &self.store, self.selection.current());
        let was_selected = hit.is_some_and(|h| self.selection.is_selected(&h.image_id));
        if let Some(selected) = press_selection(&mut self.selection, hit.as_ref()) {
            debug!(?selected, "selection changed by press");
            actions.push(Action::SelectionChanged(selected));
            actions.push(Action::RenderNeeded);
        }

        match hit {
            None => self.set_cursor(Cursor::Default, &mut actions),
            Some(hit) => match hit.part {
                HitPart::Popup => {}
                HitPart::ResizeHandle(anchor) => {
                    if let Some(rec) = self.store.get(&hit.image_id) {
                        debug!(id = %rec.id, ?anchor, "resize started");
                        self.input = InputState::Resizing {
                            id: rec.id,
                            anchor,
                            rotation: rec.rotation,
                            total: Delta::default(),
                            session: ResizeSession::begin(rec.size(), rec.lock_aspect_ratio),
                        };
                        let cursor = Cursor::for_anchor(anchor, rec.rotation);
                        self.set_cursor(cursor, &mut actions);
                    }
                }
                HitPart::Body => {
                    if was_selected {
                        if let Some(rec) = self.store.get(&hit.image_id) {
                            debug!(id = %rec.id, "drag started");
                            self.input = InputState::Dragging { id: rec.id, origin: rec.position(), pos: rec.position() };
                        }
                    }
                    self.set_cursor(Cursor::Move, &mut actions);
                }
            },
        }
        actions
    }

    /// Pointer moved to `pt`, by `delta` since the previous event.
    ///
    /// Drags follow `delta` rather than `pt` so the image never jumps to the
    /// pointer.
    pub fn on_pointer_move(&mut self, pt: Point, delta: Delta) -> Vec<Action> {
        if self.input.is_idle() {
            let mut actions = Vec::new();
            let cursor = self.hover_cursor(pt);
            self.set_cursor(cursor, &mut actions);
            return actions;
        }

        match &mut self.input {
            InputState::Dragging { pos, .. } => {
                *pos = pos.offset(delta);
            }
            InputState::Resizing { anchor, rotation, total, session, .. } => {
                total.dx += delta.dx;
                total.dy += delta.dy;
                let local = total.rotate_quarters(-i32::from(*rotation));
                session.drag(*anchor, local);
            }
            InputState::Idle => return Vec::new(),
        }
        vec![Action::RenderNeeded]
    }

    /// Pointer released. Commits any gesture in progress.
    pub fn on_pointer_up(&mut self, _pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        self.finish_gesture()
    }

    /// Commit a size reported by a host-side resize primitive.
    ///
    /// The size gets the same treatment as a handle drag: the minimum handle
    /// size and, when locked, the image's aspect ratio.
    pub fn on_resize_stop(&mut self, id: &ImageId, realized: Size) -> Vec<Action> {
        if !self.require_selected(id, "resize") {
            return Vec::new();
        }
        if !realized.width.is_finite() || !realized.height.is_finite() {
            debug!(%id, width = realized.width, height = realized.height, "resize stop ignored: non-finite size");
            return Vec::new();
        }
        let Some(mut session) = self.store.get(id).map(|rec| ResizeSession::begin(rec.size(), rec.lock_aspect_ratio))
        else {
            return Vec::new();
        };
        if matches!(self.input, InputState::Resizing { id: active, .. } if active == *id) {
            self.input = InputState::Idle;
        }
        session.propose(realized);
        self.commit(id, PartialImageRecord::size(session.finish()))
    }

    fn finish_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Dragging { id, origin, pos } => {
                debug!(%id, dx = pos.x - origin.x, dy = pos.y - origin.y, "drag committed");
                self.commit(&id, PartialImageRecord::position(pos))
            }
            InputState::Resizing { id, session, .. } => {
                let size = session.finish();
                debug!(%id, width = size.width, height = size.height, "resize committed");
                self.commit(&id, PartialImageRecord::size(size))
            }
        }
    }

    fn commit(&mut self, id: &ImageId, fields: PartialImageRecord) -> Vec<Action> {
        if self.store.update(id, &fields) {
            vec![Action::ImageUpdated { id: *id, fields }, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn hover_cursor(&self, pt: Point) -> Cursor {
        let Some(hit) = hit_test(pt, &self.store, self.selection.current()) else {
            return Cursor::Default;
        };
        let selected = self.selection.is_selected(&hit.image_id);
        match hit.part {
            HitPart::Body if selected => Cursor::Move,
            HitPart::ResizeHandle(anchor) => {
                let rotation = self.store.get(&hit.image_id).map_or(0, |r| r.rotation);
                Cursor::for_anchor(anchor, rotation)
            }
            _ => Cursor::Default,
        }
    }

    fn set_cursor(&mut self, cursor: Cursor, actions: &mut Vec<Action>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            actions.push(Action::SetCursor(cursor));
        }
    }

    // --- Commands on the selected image ---

    fn require_selected(&self, id: &ImageId, command: &'static str) -> bool {
        if self.selection.is_selected(id) && self.store.get(id).is_some() {
            true
        } else {
            debug!(%id, command, "command ignored: image not selected");
            false
        }
    }

    /// Turn the selected image a quarter clockwise.
    pub fn rotate(&mut self, id: &ImageId) -> Vec<Action> {
        if !self.require_selected(id, "rotate") {
            return Vec::new();
        }
        match self.store.rotate(id) {
            Some(rotation) => vec![Action::ImageRotated { id: *id, rotation }, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Clip the selected image to `shape`.
    pub fn set_clip_shape(&mut self, id: &ImageId, shape: ClipShape) -> Vec<Action> {
        if !self.require_selected(id, "shape") {
            return Vec::new();
        }
        self.commit(id, PartialImageRecord { clip_shape: Some(shape), ..Default::default() })
    }

    /// Flip the aspect-ratio lock of the selected image.
    pub fn toggle_aspect_lock(&mut self, id: &ImageId) -> Vec<Action> {
        if !self.require_selected(id, "aspect") {
            return Vec::new();
        }
        let Some(locked) = self.store.get(id).map(|r| r.lock_aspect_ratio) else {
            return Vec::new();
        };
        self.commit(id, PartialImageRecord { lock_aspect_ratio: Some(!locked), ..Default::default() })
    }

    /// Apply a width or height slider edit to the selected image.
    ///
    /// `raw` is read like a base-10 integer prefix (`"120px"` is 120). Values
    /// outside the slider range are clamped. Input with no leading integer is
    /// rejected and the dimension keeps its previous value.
    pub fn set_dimension(&mut self, id: &ImageId, dimension: Dimension, raw: &str) -> Result<Vec<Action>, PlacementError> {
        if !self.require_selected(id, "slider") {
            return Ok(Vec::new());
        }
        let Some(value) = parse_dimension(raw) else {
            warn!(%id, ?dimension, raw, "rejected slider input");
            return Err(PlacementError::InvalidDimension { raw: raw.to_string() });
        };
        #[allow(clippy::cast_precision_loss)]
        let px = value.clamp(SLIDER_MIN_PX, SLIDER_MAX_PX) as f64;
        let fields = match dimension {
            Dimension::Width => PartialImageRecord { width: Some(px), ..Default::default() },
            Dimension::Height => PartialImageRecord { height: Some(px), ..Default::default() },
        };
        Ok(self.commit(id, fields))
    }

    /// Delete the selected image.
    pub fn delete(&mut self, id: &ImageId) -> Vec<Action> {
        if !self.require_selected(id, "delete") {
            return Vec::new();
        }
        let Some(rec) = self.store.delete(id) else {
            return Vec::new();
        };
        if self.input.target() == Some(rec.id) {
            self.input = InputState::Idle;
        }
        let mut actions = vec![Action::ImageDeleted { id: rec.id }];
        if self.selection.clear() {
            actions.push(Action::SelectionChanged(None));
        }
        self.set_cursor(Cursor::Default, &mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Remove every image and release every file locator.
    pub fn reset(&mut self) -> Vec<Action> {
        self.store.clear();
        self.input = InputState::Idle;
        let mut actions = vec![Action::ImagesChanged(Ingest::default())];
        if self.selection.clear() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// The currently selected image, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ImageId> {
        self.selection.current()
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&ImageRecord> {
        self.selection.current().and_then(|id| self.store.get(&id))
    }

    /// Look up an image by id.
    #[must_use]
    pub fn image(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.store.get(id)
    }

    /// Interaction state of one image, or `None` if it doesn't exist.
    #[must_use]
    pub fn placement_state(&self, id: &ImageId) -> Option<PlacementState> {
        self.store.get(id)?;
        if !self.selection.is_selected(id) {
            return Some(PlacementState::Idle);
        }
        match self.input {
            InputState::Dragging { id: active, .. } if active == *id => Some(PlacementState::Dragging),
            _ => Some(PlacementState::Selected),
        }
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Build the scene for the display layer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let size = self.frame_size();
        let frame = FrameView { width: size.width, height: size.height, background: self.background.clone() };
        compose(&self.store, self.selection.current(), &self.input, frame)
    }
}

/// Selection effect of a pointer press on `hit`.
///
/// A miss deselects; a press on the body of an unselected image selects it.
/// Handles and the popup belong to the selected image and leave it alone.
/// Returns the new selection when it changed.
fn press_selection(scope: &mut impl SelectionScope, hit: Option<&Hit>) -> Option<Option<ImageId>> {
    match hit {
        None => scope.request(None).then_some(None),
        Some(Hit { image_id, part: HitPart::Body }) if !scope.is_selected(image_id) => {
            scope.request(Some(*image_id)).then_some(Some(*image_id))
        }
        Some(_) => None,
    }
}

/// Read a base-10 integer prefix: optional leading whitespace, optional sign,
/// then digits up to the first non-digit. `None` if there are no digits.
/// Values beyond `i64` saturate.
#[must_use]
pub fn parse_dimension(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
