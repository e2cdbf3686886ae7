//! Image placement engine for framed photo layouts.
//!
//! A user picks a frame size in physical units, adds up to ten images from
//! local files or URLs, and arranges them on the frame: drag to move, pull a
//! handle to resize, rotate in quarter turns, clip to a circle or hexagon, and
//! lock the aspect ratio. The crate owns all of that state and its rules. The
//! host wires pointer events and control inputs into [`engine::Engine`], acts
//! on the returned [`engine::Action`]s, and draws the [`render::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine: pointer handlers, commands, queries |
//! | [`doc`] | Image records and the capped, merge-on-ingest store |
//! | [`units`] | Physical frame units and pixel conversion |
//! | [`locator`] | Opaque `blob:` locators for local files and their release |
//! | [`selection`] | Single-selection capability shared with child controls |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`resize`] | Resize sessions with minimum size and aspect lock |
//! | [`hit`] | Hit-testing against images, handles and the control popup |
//! | [`render`] | Scene composition: geometry, clip paths, stacking order |
//! | [`geom`] | Points, deltas, sizes, rectangles, quarter-turn rotation |
//! | [`config`] | Environment-driven initial frame settings |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (caps, scales, slider bounds, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod locator;
pub mod render;
pub mod resize;
pub mod selection;
pub mod units;
