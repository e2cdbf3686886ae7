//! Direct-manipulation resize.
//!
//! A [`ResizeSession`] is opened with the image's size when a handle is
//! grabbed, fed proposed sizes while the pointer moves, and closed on release
//! to yield the size to commit. The session owns the aspect-ratio lock and
//! the minimum handle size so callers never compute either themselves.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::consts::RESIZE_MIN_PX;
use crate::geom::{Delta, Size};
use crate::hit::ResizeAnchor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    initial: Size,
    current: Size,
    /// Width / height to preserve, when locked.
    ratio: Option<f64>,
}

impl ResizeSession {
    /// Open a session at `initial`. With `lock_aspect` set every proposed size
    /// is adjusted to keep the initial width/height ratio.
    #[must_use]
    pub fn begin(initial: Size, lock_aspect: bool) -> Self {
        let ratio = if lock_aspect { initial.aspect().filter(|r| r.is_finite() && *r > 0.0) } else { None };
        Self { initial, current: initial, ratio }
    }

    #[must_use]
    pub fn initial(&self) -> Size {
        self.initial
    }

    /// The last size produced by the session.
    #[must_use]
    pub fn current(&self) -> Size {
        self.current
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.ratio.is_some()
    }

    /// Feed a proposed size; returns the size actually shown.
    pub fn propose(&mut self, proposed: Size) -> Size {
        let width = proposed.width.max(RESIZE_MIN_PX);
        let height = proposed.height.max(RESIZE_MIN_PX);

        self.current = match self.ratio {
            None => Size::new(width, height),
            Some(ratio) => lock_to_ratio(self.initial, Size::new(width, height), ratio),
        };
        self.current
    }

    /// Feed the total handle movement since the session began, already in the
    /// image's unrotated frame.
    pub fn drag(&mut self, anchor: ResizeAnchor, total: Delta) -> Size {
        self.propose(Size::new(
            self.initial.width + anchor.x_sign() * total.dx,
            self.initial.height + anchor.y_sign() * total.dy,
        ))
    }

    /// Close the session and return the size to commit.
    #[must_use]
    pub fn finish(self) -> Size {
        self.current
    }
}

/// Whichever axis moved further (relative to its start) drives the other.
fn lock_to_ratio(initial: Size, proposed: Size, ratio: f64) -> Size {
    let dw = (proposed.width / initial.width - 1.0).abs();
    let dh = (proposed.height / initial.height - 1.0).abs();

    let (mut width, mut height) = if dw >= dh {
        (proposed.width, proposed.width / ratio)
    } else {
        (proposed.height * ratio, proposed.height)
    };

    if width < RESIZE_MIN_PX {
        width = RESIZE_MIN_PX;
        height = width / ratio;
    }
    if height < RESIZE_MIN_PX {
        height = RESIZE_MIN_PX;
        width = height * ratio;
    }
    Size::new(width, height)
}
