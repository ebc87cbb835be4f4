//! Slider configuration
//!
//! Hosts usually pass this as JSON, so every field has a default and the
//! wire names follow the component's camelCase props.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::zoom::{BASELINE_ZOOM, CLICK_ZOOM};

/// Default autoplay interval in milliseconds
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: f64 = 3000.0;

/// Default swipe threshold as a fraction of the slider width
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 0.3;

/// Configuration flags and tuning for a slider instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SliderConfig {
    /// Wrap around the ends using boundary clones
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Advance automatically every `auto_play_interval_ms`
    pub auto_play: bool,
    /// Autoplay interval in milliseconds
    #[serde(rename = "autoPlayInterval")]
    pub auto_play_interval_ms: f64,
    /// Render the previous/next arrows
    pub show_navigation: bool,
    /// Fraction of the slider width a drag must exceed to change slides
    pub swipe_threshold: f32,
    /// Magnification applied by the click toggle, in percent
    pub zoom_level: u16,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            looping: false,
            auto_play: false,
            auto_play_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            show_navigation: true,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            zoom_level: CLICK_ZOOM,
        }
    }
}

impl SliderConfig {
    /// Builder-style loop toggle
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Builder-style autoplay toggle with interval
    pub fn with_auto_play(mut self, interval_ms: f64) -> Self {
        self.auto_play = true;
        self.auto_play_interval_ms = interval_ms;
        self
    }

    /// Check the numeric fields.
    ///
    /// The engine itself never validates; hosts call this before mounting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.auto_play_interval_ms.is_finite() || self.auto_play_interval_ms <= 0.0 {
            return Err(ConfigError::InvalidInterval(self.auto_play_interval_ms));
        }
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold(self.swipe_threshold));
        }
        if self.zoom_level <= BASELINE_ZOOM {
            return Err(ConfigError::InvalidZoomLevel(self.zoom_level));
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SliderConfig::default();
        assert!(!config.looping);
        assert!(!config.auto_play);
        assert!((config.auto_play_interval_ms - 3000.0).abs() < 0.001);
        assert!(config.show_navigation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SliderConfig::from_json(r#"{ "loop": true, "autoPlay": true }"#).unwrap();
        assert!(config.looping);
        assert!(config.auto_play);
        assert!((config.auto_play_interval_ms - 3000.0).abs() < 0.001);
        assert!(config.show_navigation);
    }

    #[test]
    fn test_negative_interval_rejected() {
        let config = SliderConfig::default().with_auto_play(-5.0);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidInterval(_))));
    }

    #[test]
    fn test_threshold_bounds() {
        let mut config = SliderConfig::default();
        config.swipe_threshold = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))));
        config.swipe_threshold = 1.5;
        assert!(config.validate().is_err());
        config.swipe_threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zoom_level_must_exceed_baseline() {
        let mut config = SliderConfig::default();
        config.zoom_level = BASELINE_ZOOM;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidZoomLevel(100))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SliderConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
