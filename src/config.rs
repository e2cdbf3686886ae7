//! Engine defaults parsed from environment variables.

use crate::error::ConfigError;
use crate::units::{FrameDimensions, Unit};

pub const DEFAULT_FRAME_WIDTH: f64 = 30.0;
pub const DEFAULT_FRAME_HEIGHT: f64 = 20.0;
pub const DEFAULT_FRAME_UNIT: &str = "cm";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// Initial frame settings for a new engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub frame: FrameDimensions,
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            frame: FrameDimensions::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT, Unit::from_tag(DEFAULT_FRAME_UNIT)),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `FRAME_WIDTH`: default 30
    /// - `FRAME_HEIGHT`: default 20
    /// - `FRAME_UNIT`: `cm` (default), `m`, `ft`, anything else is pixels
    /// - `FRAME_BACKGROUND`: default `#ffffff`
    pub fn from_env() -> Result<Self, ConfigError> {
        let width = env_parse_f64("FRAME_WIDTH", DEFAULT_FRAME_WIDTH)?;
        let height = env_parse_f64("FRAME_HEIGHT", DEFAULT_FRAME_HEIGHT)?;
        let unit = Unit::from_tag(
            std::env::var("FRAME_UNIT")
                .unwrap_or_else(|_| DEFAULT_FRAME_UNIT.to_string())
                .trim(),
        );
        let background = match std::env::var("FRAME_BACKGROUND") {
            Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => DEFAULT_BACKGROUND.to_string(),
        };

        Ok(Self { frame: FrameDimensions::new(width, height, unit), background })
    }
}

fn env_parse_f64(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Parse { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
