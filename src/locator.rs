//! Session-local `blob:` locators for uploaded files.
//!
//! A file picked by the user has no address the display layer can load from,
//! so each one is registered here and handed back as an opaque
//! `blob:<uuid>` string. The registry keeps the file alive until the record
//! that references it is deleted or the store is torn down.

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::consts::BLOB_PREFIX;

/// A local file handed over by the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// File name as reported by the picker.
    pub name: String,
    /// MIME type, e.g. `image/png`.
    pub media_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileHandle {
    #[must_use]
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), media_type: media_type.into(), bytes }
    }

    /// Whether the picker's `image/*` filter would accept this file.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Whether `src` is a session-local locator rather than a remote URL.
#[must_use]
pub fn is_blob(src: &str) -> bool {
    src.starts_with(BLOB_PREFIX)
}

/// Owner of every live `blob:` locator.
#[derive(Debug, Default)]
pub struct LocatorRegistry {
    files: HashMap<String, FileHandle>,
}

impl LocatorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `file` and return a fresh locator for it.
    pub fn register(&mut self, file: FileHandle) -> String {
        let locator = format!("{BLOB_PREFIX}{}", Uuid::new_v4());
        self.files.insert(locator.clone(), file);
        locator
    }

    /// Look up the file behind a locator.
    #[must_use]
    pub fn resolve(&self, locator: &str) -> Option<&FileHandle> {
        self.files.get(locator)
    }

    /// Drop the file behind `locator`. Returns false if it was not live.
    pub fn release(&mut self, locator: &str) -> bool {
        self.files.remove(locator).is_some()
    }

    /// Drop every file.
    pub fn release_all(&mut self) {
        self.files.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
