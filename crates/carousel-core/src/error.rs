//! Error types for slider configuration

use std::fmt;

/// Errors from validating or parsing a [`SliderConfig`](crate::SliderConfig)
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Autoplay interval is not a positive, finite number of milliseconds
    InvalidInterval(f64),
    /// Swipe threshold is outside `(0, 1]`
    InvalidThreshold(f32),
    /// Click zoom level does not magnify
    InvalidZoomLevel(u16),
    /// Config JSON could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidInterval(ms) => {
                write!(f, "Invalid autoplay interval: {} ms", ms)
            }
            ConfigError::InvalidThreshold(t) => {
                write!(f, "Invalid swipe threshold: {} (expected 0 < t <= 1)", t)
            }
            ConfigError::InvalidZoomLevel(level) => {
                write!(f, "Invalid zoom level: {}% (must exceed baseline)", level)
            }
            ConfigError::Parse(msg) => write!(f, "Invalid config JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
