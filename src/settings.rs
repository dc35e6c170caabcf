//! Demo settings
//!
//! Everything here has a sensible default taken from `consts`. A page can
//! override any subset through a JSON document; missing keys keep defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::*;

/// An sRGB colour with a straight alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0, 0, 0, 1.0)
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` form, as accepted by canvas fill and shadow styles
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Drop shadow drawn under the ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadow {
    pub color: Rgba,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Rgba::new(0, 0, 0, 0.5),
            blur: 15.0,
            offset_x: 5.0,
            offset_y: 5.0,
        }
    }
}

/// Ball shape and motion tunables, copied into each `PhysicsState`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Horizontal drift per tick (% of surface width)
    pub drift_percent: f32,
    /// Floor-contact speed below which the ball is considered stopped
    pub rest_threshold: f32,
    /// Trail capacity (oldest evicted first)
    pub trail_length: usize,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            drift_percent: DRIFT_PERCENT,
            rest_threshold: REST_THRESHOLD,
            trail_length: TRAIL_LENGTH,
        }
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ball: BallConfig,

    // === Timing ===
    /// Nominal dt fed to the integrator each frame
    pub frame_dt: f32,

    // === Presentation ===
    pub ball_color: Rgba,
    /// Trail colour; alpha is replaced per circle
    pub trail_color: Rgba,
    /// Alpha of the newest trail circle
    pub trail_max_alpha: f32,
    pub shadow: Shadow,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball: BallConfig::default(),

            frame_dt: FRAME_DT,

            // #3498db
            ball_color: Rgba::new(52, 152, 219, 1.0),
            trail_color: Rgba::new(52, 152, 219, 1.0),
            trail_max_alpha: TRAIL_MAX_ALPHA,
            shadow: Shadow::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, then sanitize.
    ///
    /// The document is merged key by key over the defaults, so a partial
    /// nested object (`{"shadow": {"blur": 3}}`) only replaces what it names.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_json(&mut merged, overrides);
        let settings: Settings = serde_json::from_value(merged)?;
        Ok(settings.sanitized())
    }

    /// Parse settings from JSON, logging and falling back to defaults on error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings override");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring invalid settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Replace values the simulation cannot work with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.ball.radius.is_finite() && self.ball.radius > 0.0) {
            self.ball.radius = defaults.ball.radius;
        }
        if !self.ball.drift_percent.is_finite() {
            self.ball.drift_percent = defaults.ball.drift_percent;
        }
        if !(self.ball.rest_threshold.is_finite() && self.ball.rest_threshold >= 0.0) {
            self.ball.rest_threshold = defaults.ball.rest_threshold;
        }
        if self.ball.trail_length == 0 {
            self.ball.trail_length = defaults.ball.trail_length;
        }
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            self.frame_dt = defaults.frame_dt;
        }
        self.trail_max_alpha = if self.trail_max_alpha.is_finite() {
            self.trail_max_alpha.clamp(0.0, 1.0)
        } else {
            defaults.trail_max_alpha
        };
        self
    }
}

/// Overlay `overrides` onto `base`. Objects merge recursively; keys `base`
/// does not know are dropped; anything else replaces the base value.
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => log::debug!("Ignoring unknown setting {key:?}"),
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
