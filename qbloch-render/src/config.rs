//! Scene and animation configuration

use crate::camera::ViewAngle;
use crate::color::Color;
use crate::error::{RenderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Grid resolution of the wireframe sphere
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireframeDensity {
    /// Samples over φ ∈ [0, 2π]; one meridian is drawn per sample
    pub longitudes: usize,
    /// Samples over θ ∈ [0, π]; one parallel is drawn per sample
    pub latitudes: usize,
}

impl Default for WireframeDensity {
    fn default() -> Self {
        Self {
            longitudes: 20,
            latitudes: 10,
        }
    }
}

/// Configuration for a single scene (one figure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Camera orientation
    ///
    /// Default: elev 30°, azim −60°
    pub view: ViewAngle,

    /// Wireframe grid of the reference sphere
    ///
    /// Default: 20 longitudes × 10 latitudes
    pub wireframe: WireframeDensity,

    /// Image width in pixels
    ///
    /// Default: 640
    pub width: u32,

    /// Image height in pixels
    ///
    /// Default: 480
    pub height: u32,

    /// Label font size in pixels
    ///
    /// Default: 16
    pub font_size: u32,

    /// Font family for labels and title
    ///
    /// Default: "serif"
    pub font_family: String,

    /// Background fill
    ///
    /// Default: white
    pub background: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            view: ViewAngle::default(),
            wireframe: WireframeDensity::default(),
            width: 640,
            height: 480,
            font_size: 16,
            font_family: "serif".to_string(),
            background: Color::WHITE,
        }
    }
}

impl SceneConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Low, oblique camera used for published figures
    ///
    /// - elev 10°, azim −45°
    /// - square 480 × 480 image
    pub fn presentation() -> Self {
        Self {
            view: ViewAngle::new(10.0, -45.0),
            width: 480,
            height: 480,
            ..Default::default()
        }
    }

    /// Set the camera orientation
    pub fn with_view(mut self, elev: f64, azim: f64) -> Self {
        self.view = ViewAngle::new(elev, azim);
        self
    }

    /// Set the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the wireframe resolution
    pub fn with_wireframe(mut self, longitudes: usize, latitudes: usize) -> Self {
        self.wireframe = WireframeDensity {
            longitudes,
            latitudes,
        };
        self
    }

    /// Set the label font size
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::invalid_config(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.wireframe.longitudes < 2 || self.wireframe.latitudes < 2 {
            return Err(RenderError::invalid_config(format!(
                "wireframe needs at least 2x2 samples, got {}x{}",
                self.wireframe.longitudes, self.wireframe.latitudes
            )));
        }

        if !self.view.elev.is_finite() || !self.view.azim.is_finite() {
            return Err(RenderError::invalid_config("view angles must be finite"));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

/// Configuration for an animated trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Draw the equatorial disk in every frame
    ///
    /// Default: false
    pub show_equator: bool,

    /// One color per trace; `None` takes the default palette
    ///
    /// Default: None
    pub colors: Option<Vec<Color>>,

    /// Transparency of the current-frame arrows
    ///
    /// Default: 0.5
    pub alpha: f64,

    /// Title each frame with its index
    ///
    /// Default: true
    pub label_steps: bool,

    /// Overlay the step-0 arrows as a fixed reference
    ///
    /// Default: false
    pub show_initial: bool,

    /// Loop the animation instead of playing once
    ///
    /// Default: true
    pub repeat: bool,

    /// Delay between frames in milliseconds
    ///
    /// Default: 100
    pub interval_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            show_equator: false,
            colors: None,
            alpha: 0.5,
            label_steps: true,
            show_initial: false,
            repeat: true,
            interval_ms: 100,
        }
    }
}

impl AnimationConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the equatorial disk
    pub fn with_equator(mut self, show: bool) -> Self {
        self.show_equator = show;
        self
    }

    /// Set one color per trace
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Set the arrow transparency
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Enable or disable frame titles
    pub fn with_step_labels(mut self, enabled: bool) -> Self {
        self.label_steps = enabled;
        self
    }

    /// Enable or disable the step-0 overlay
    pub fn with_initial(mut self, enabled: bool) -> Self {
        self.show_initial = enabled;
        self
    }

    /// Loop or play once
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the frame delay
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the frame delay from a frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.interval_ms = 1000 / u64::from(fps.max(1));
        self
    }

    /// Delay between frames
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(RenderError::invalid_config(format!(
                "alpha must be in [0,1], got {}",
                self.alpha
            )));
        }

        if self.interval_ms == 0 {
            return Err(RenderError::invalid_config("interval must be > 0"));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.wireframe, WireframeDensity { longitudes: 20, latitudes: 10 });
        assert_eq!(config.view, ViewAngle::new(30.0, -60.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presentation_preset() {
        let config = SceneConfig::presentation();
        assert_eq!(config.view, ViewAngle::new(10.0, -45.0));
        assert_eq!((config.width, config.height), (480, 480));
    }

    #[test]
    fn test_scene_validation() {
        assert!(SceneConfig::new().with_size(0, 10).validate().is_err());
        assert!(SceneConfig::new().with_wireframe(1, 10).validate().is_err());
        assert!(SceneConfig::new().with_view(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_scene_from_partial_json() {
        let config = SceneConfig::from_json(r#"{"view": {"elev": 10.0, "azim": -45.0}, "width": 300}"#)
            .unwrap();
        assert_eq!(config.view, ViewAngle::new(10.0, -45.0));
        assert_eq!(config.width, 300);
        assert_eq!(config.height, 480);
    }

    #[test]
    fn test_animation_defaults() {
        let config = AnimationConfig::default();
        assert_eq!(config.interval(), Duration::from_millis(100));
        assert!(config.repeat);
        assert!(config.label_steps);
        assert!(!config.show_initial);
        assert!(config.colors.is_none());
    }

    #[test]
    fn test_animation_fps() {
        assert_eq!(AnimationConfig::new().with_fps(20).interval_ms, 50);
        assert_eq!(AnimationConfig::new().with_fps(0).interval_ms, 1000);
    }

    #[test]
    fn test_interval_saturates() {
        let config = AnimationConfig::new().with_interval(Duration::MAX);
        assert_eq!(config.interval_ms, u64::MAX);
        assert_eq!(
            AnimationConfig::new()
                .with_interval(Duration::from_micros(2_500))
                .interval_ms,
            2
        );
    }

    #[test]
    fn test_animation_validation() {
        assert!(AnimationConfig::new().with_alpha(1.5).validate().is_err());
        assert!(AnimationConfig::new()
            .with_interval(Duration::from_millis(0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_animation_from_json() {
        let config =
            AnimationConfig::from_json(r#"{"colors": ["r", "g"], "repeat": false, "show_initial": true}"#)
                .unwrap();
        assert_eq!(config.colors, Some(vec![Color::RED, Color::rgb(0, 128, 0)]));
        assert!(!config.repeat);
        assert!(config.show_initial);
        assert_eq!(config.interval_ms, 100);

        assert!(matches!(
            AnimationConfig::from_json(r#"{"colors": ["nope"]}"#),
            Err(RenderError::Json(_))
        ));
    }
}
