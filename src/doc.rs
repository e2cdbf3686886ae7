//! Document model: placed images, their properties, and the bounded store.
//!
//! This module defines what sits on the frame (`ImageRecord`, `ClipShape`),
//! a sparse-update type for incremental edits (`PartialImageRecord`), and the
//! ordered store that owns every live record (`ImageStore`).
//!
//! Records enter the store only through the two ingestion paths, which use
//! different merge policies:
//!
//! - **files**: existing URL records move to the front, existing file records
//!   follow in their relative order, new file records are appended.
//! - **URLs**: existing file records are kept in order, new URL records follow,
//!   and every previous URL record is discarded.
//!
//! Both paths cut the result to [`MAX_IMAGES`]. Collection order is also the
//! stacking order the renderer uses.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::consts::{DEFAULT_IMAGE_SIZE_PX, MAX_IMAGES, ROTATE_STEP_DEG};
use crate::geom::{Point, Rect, Size};
use crate::locator::{FileHandle, LocatorRegistry, is_blob};

/// Stable identifier for a placed image.
pub type ImageId = Uuid;

/// Where an image's pixels come from, derived from its `src` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Session-local file locator.
    Blob,
    /// Remote URL typed or pasted by the user.
    Url,
}

impl Origin {
    #[must_use]
    pub fn of(src: &str) -> Self {
        if is_blob(src) { Self::Blob } else { Self::Url }
    }
}

/// Outline an image is clipped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipShape {
    /// Full rectangle.
    #[default]
    None,
    /// Circle inscribed in the bounding box.
    Circle,
    /// Flat-topped hexagon inscribed in the bounding box.
    Hexagon,
}

/// One image placed on the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Unique identifier, fixed at creation.
    pub id: ImageId,
    /// `blob:` locator or remote URL.
    pub src: String,
    /// Left edge in frame pixels.
    pub x: f64,
    /// Top edge in frame pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Clockwise rotation in degrees; always a multiple of 90 below 360.
    pub rotation: u16,
    /// Clip outline.
    pub clip_shape: ClipShape,
    /// Whether resizing keeps the width/height ratio.
    pub lock_aspect_ratio: bool,
}

impl ImageRecord {
    /// A record at the frame origin with default geometry.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            src: src.into(),
            x: 0.0,
            y: 0.0,
            width: DEFAULT_IMAGE_SIZE_PX,
            height: DEFAULT_IMAGE_SIZE_PX,
            rotation: 0,
            clip_shape: ClipShape::None,
            lock_aspect_ratio: false,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Origin {
        Origin::of(&self.src)
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Unrotated bounding box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Sparse update for an image record. Only present fields are applied.
///
/// Rotation is absent on purpose: it only changes through [`ImageStore::rotate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialImageRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip_shape: Option<ClipShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_aspect_ratio: Option<bool>,
}

impl PartialImageRecord {
    /// Position-only update.
    #[must_use]
    pub fn position(pt: Point) -> Self {
        Self { x: Some(pt.x), y: Some(pt.y), ..Default::default() }
    }

    /// Size-only update.
    #[must_use]
    pub fn size(size: Size) -> Self {
        Self { width: Some(size.width), height: Some(size.height), ..Default::default() }
    }
}

/// Outcome of one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Ingest {
    /// New records that made it into the store.
    pub added: usize,
    /// New entries cut off by the capacity limit.
    pub dropped: usize,
    /// Existing records discarded by the merge policy.
    pub removed: usize,
    /// Files rejected because they are not images.
    pub skipped: usize,
}

/// Split free-form URL text on commas and newlines, trimming each entry and
/// dropping empty ones.
#[must_use]
pub fn parse_url_list(text: &str) -> Vec<&str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Ordered, bounded store of placed images.
#[derive(Debug, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
    locators: LocatorRegistry,
}

impl ImageStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Ingestion ---

    /// Add uploaded files as new records.
    ///
    /// URL records move ahead of file records; new files go last. Files that
    /// do not fit under the cap are dropped before a locator is created.
    pub fn ingest_files<I>(&mut self, files: I) -> Ingest
    where
        I: IntoIterator<Item = FileHandle>,
    {
        let (mut merged, blobs): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| r.origin() == Origin::Url);
        merged.extend(blobs);

        let mut outcome = Ingest::default();
        for file in files {
            if !file.is_image() {
                warn!(name = %file.name, media_type = %file.media_type, "skipping non-image file");
                outcome.skipped += 1;
                continue;
            }
            if merged.len() >= MAX_IMAGES {
                outcome.dropped += 1;
                continue;
            }
            let src = self.locators.register(file);
            merged.push(ImageRecord::new(src));
            outcome.added += 1;
        }

        self.records = merged;
        info!(
            added = outcome.added,
            dropped = outcome.dropped,
            skipped = outcome.skipped,
            total = self.records.len(),
            "ingested files"
        );
        outcome
    }

    /// Replace every URL record with the URLs listed in `text`.
    ///
    /// File records are kept ahead of the new URLs in their original order.
    pub fn ingest_urls(&mut self, text: &str) -> Ingest {
        let urls = parse_url_list(text);

        let before = self.records.len();
        self.records.retain(|r| r.origin() == Origin::Blob);
        let removed = before - self.records.len();

        let room = MAX_IMAGES.saturating_sub(self.records.len());
        let added = urls.len().min(room);
        self.records.extend(urls.iter().take(room).map(|src| ImageRecord::new(*src)));

        let outcome = Ingest { added, dropped: urls.len() - added, removed, skipped: 0 };
        info!(
            added = outcome.added,
            dropped = outcome.dropped,
            removed = outcome.removed,
            total = self.records.len(),
            "ingested urls"
        );
        outcome
    }

    // --- Mutation ---

    /// Merge `partial` into the record with `id`. Returns false if it doesn't exist.
    pub fn update(&mut self, id: &ImageId, partial: &PartialImageRecord) -> bool {
        let Some(rec) = self.get_mut(id) else {
            debug!(%id, "update ignored: unknown image");
            return false;
        };
        if let Some(x) = partial.x {
            rec.x = x;
        }
        if let Some(y) = partial.y {
            rec.y = y;
        }
        if let Some(w) = partial.width {
            rec.width = w;
        }
        if let Some(h) = partial.height {
            rec.height = h;
        }
        if let Some(shape) = partial.clip_shape {
            rec.clip_shape = shape;
        }
        if let Some(lock) = partial.lock_aspect_ratio {
            rec.lock_aspect_ratio = lock;
        }
        true
    }

    /// Turn the record a quarter clockwise. Returns the new rotation.
    pub fn rotate(&mut self, id: &ImageId) -> Option<u16> {
        let Some(rec) = self.get_mut(id) else {
            debug!(%id, "rotate ignored: unknown image");
            return None;
        };
        rec.rotation = (rec.rotation + ROTATE_STEP_DEG) % 360;
        Some(rec.rotation)
    }

    /// Remove a record, shifting later records down by one. Its file locator,
    /// if any, is released.
    pub fn delete(&mut self, id: &ImageId) -> Option<ImageRecord> {
        let Some(index) = self.index_of(id) else {
            debug!(%id, "delete ignored: unknown image");
            return None;
        };
        let rec = self.records.remove(index);
        if rec.origin() == Origin::Blob {
            self.locators.release(&rec.src);
        }
        Some(rec)
    }

    /// Remove every record and release every locator.
    pub fn clear(&mut self) {
        self.records.clear();
        self.locators.release_all();
    }

    // --- Queries ---

    #[must_use]
    pub fn get(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    fn get_mut(&mut self, id: &ImageId) -> Option<&mut ImageRecord> {
        self.records.iter_mut().find(|r| r.id == *id)
    }

    /// Current collection position of a record.
    #[must_use]
    pub fn index_of(&self, id: &ImageId) -> Option<usize> {
        self.records.iter().position(|r| r.id == *id)
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// All records in collection order.
    #[must_use]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ImageId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// The file behind a `blob:` source, for the display layer.
    #[must_use]
    pub fn resolve_file(&self, src: &str) -> Option<&FileHandle> {
        self.locators.resolve(src)
    }

    /// Number of live file locators.
    #[must_use]
    pub fn live_locators(&self) -> usize {
        self.locators.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Drop for ImageStore {
    fn drop(&mut self) {
        if !self.locators.is_empty() {
            debug!(count = self.locators.len(), "releasing file locators");
        }
        self.locators.release_all();
    }
}
