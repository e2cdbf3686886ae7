//! Shared numeric constants for the placement engine.

// ── Collection ──────────────────────────────────────────────────

/// Maximum number of images the frame holds at once.
pub const MAX_IMAGES: usize = 10;

/// Prefix that marks a session-local file locator.
pub const BLOB_PREFIX: &str = "blob:";

// ── Record defaults ─────────────────────────────────────────────

/// Width and height given to freshly ingested images, in pixels.
pub const DEFAULT_IMAGE_SIZE_PX: f64 = 100.0;

/// Degrees added by one rotate command.
pub const ROTATE_STEP_DEG: u16 = 90;

// ── Units ───────────────────────────────────────────────────────

/// Pixels per centimetre.
pub const PX_PER_CM: f64 = 0.6;

/// Pixels per metre.
pub const PX_PER_M: f64 = 60.0;

/// Pixels per foot.
pub const PX_PER_FT: f64 = 20.0;

// ── Controls ────────────────────────────────────────────────────

/// Lower bound of the width/height sliders, in pixels.
pub const SLIDER_MIN_PX: i64 = 20;

/// Upper bound of the width/height sliders, in pixels.
pub const SLIDER_MAX_PX: i64 = 500;

/// Smallest size a resize handle drag can produce, in pixels.
pub const RESIZE_MIN_PX: f64 = 10.0;

/// Z-index given to the selected image so it renders above every other one.
pub const SELECTED_Z_INDEX: i64 = 1000;

// ── Hit-testing ─────────────────────────────────────────────────

/// Hit slop around resize handles, in pixels.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Gap between the bottom edge of the selected image and its control panel.
pub const POPUP_OFFSET_PX: f64 = 8.0;

/// Control panel width, in pixels.
pub const POPUP_WIDTH_PX: f64 = 180.0;

/// Control panel height, in pixels.
pub const POPUP_HEIGHT_PX: f64 = 104.0;
