//! Real-world frame dimensions and their conversion to pixels.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use serde::{Deserialize, Serialize};

use crate::consts::{PX_PER_CM, PX_PER_FT, PX_PER_M};
use crate::geom::Size;

/// Unit a frame dimension is entered in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Centimetres.
    #[default]
    Cm,
    /// Metres.
    M,
    /// Feet.
    Ft,
    /// Any other tag; values pass through as pixels.
    Other(String),
}

impl Unit {
    /// Map a unit tag to a unit. Unknown tags are kept as [`Unit::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cm" => Self::Cm,
            "m" => Self::M,
            "ft" => Self::Ft,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Cm => "cm",
            Self::M => "m",
            Self::Ft => "ft",
            Self::Other(tag) => tag,
        }
    }

    /// Pixels per unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        match self {
            Self::Cm => PX_PER_CM,
            Self::M => PX_PER_M,
            Self::Ft => PX_PER_FT,
            Self::Other(_) => 1.0,
        }
    }
}

/// Convert a length in `unit` to pixels.
///
/// No rounding or bounds checking: negative lengths stay negative.
#[must_use]
pub fn to_pixels(value: f64, unit: &Unit) -> f64 {
    match unit {
        Unit::Other(_) => value,
        named => value * named.scale(),
    }
}

/// Frame size as the user entered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameDimensions {
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
}

impl FrameDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64, unit: Unit) -> Self {
        Self { width, height, unit }
    }

    /// Frame size in pixels.
    #[must_use]
    pub fn to_pixels(&self) -> Size {
        Size::new(to_pixels(self.width, &self.unit), to_pixels(self.height, &self.unit))
    }
}
