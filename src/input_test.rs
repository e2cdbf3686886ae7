use uuid::Uuid;

use super::*;
use crate::geom::Size;

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert!(state.target().is_none());
}

#[test]
fn dragging_targets_its_image() {
    let id = Uuid::new_v4();
    let state = InputState::Dragging { id, origin: Point::new(0.0, 0.0), pos: Point::new(5.0, 5.0) };
    assert_eq!(state.target(), Some(id));
    assert!(!state.is_idle());
}

#[test]
fn resizing_targets_its_image() {
    let id = Uuid::new_v4();
    let state = InputState::Resizing {
        id,
        anchor: ResizeAnchor::Se,
        rotation: 0,
        total: Delta::default(),
        session: ResizeSession::begin(Size::new(100.0, 100.0), false),
    };
    assert_eq!(state.target(), Some(id));
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_default_is_default() {
    assert_eq!(Cursor::default().css(), "default");
    assert_eq!(Cursor::Move.css(), "move");
}

#[test]
fn cursor_for_anchor_unrotated() {
    assert_eq!(Cursor::for_anchor(ResizeAnchor::N, 0).css(), "ns-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::E, 0).css(), "ew-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::Se, 0).css(), "nwse-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::Ne, 0).css(), "nesw-resize");
}

#[test]
fn cursor_for_anchor_quarter_turn_swaps() {
    assert_eq!(Cursor::for_anchor(ResizeAnchor::N, 90).css(), "ew-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::E, 270).css(), "ns-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::Se, 90).css(), "nesw-resize");
    assert_eq!(Cursor::for_anchor(ResizeAnchor::Se, 180).css(), "nwse-resize");
}

#[test]
fn cursor_serializes_kebab_case() {
    assert_eq!(serde_json::to_string(&Cursor::Move).unwrap(), "\"move\"");
    assert_eq!(serde_json::to_string(&Cursor::Resize("ns-resize")).unwrap(), "{\"resize\":\"ns-resize\"}");
}

// =============================================================
// PlacementState
// =============================================================

#[test]
fn placement_state_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&PlacementState::Dragging).unwrap(), "\"dragging\"");
}

#[test]
fn button_equality() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}
