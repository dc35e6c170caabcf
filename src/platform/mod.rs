//! Platform abstraction layer
//!
//! Surface sizing shared by every target, plus the browser bindings:
//! - Canvas backing-store sizing for high-DPI displays
//! - DOM control lookup and event wiring (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use serde::{Deserialize, Serialize};

/// Drawable surface dimensions in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Backing-store size for a canvas laid out at `css_width` x `css_height`
    /// CSS pixels on a display with the given device pixel ratio
    pub fn for_display(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: (css_width * dpr).max(0.0) as f32,
            height: (css_height * dpr).max(0.0) as f32,
        }
    }

    /// Backing-store dimensions as integers, for canvas width/height attributes
    pub fn pixels(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_display_scales_by_dpr() {
        let size = SurfaceSize::for_display(400.0, 300.0, 2.0);
        assert_eq!(size, SurfaceSize::new(800.0, 600.0));
        assert_eq!(size.pixels(), (800, 600));
    }

    #[test]
    fn test_for_display_bad_dpr_is_one() {
        assert_eq!(SurfaceSize::for_display(400.0, 300.0, 0.0), SurfaceSize::new(400.0, 300.0));
        assert_eq!(
            SurfaceSize::for_display(400.0, 300.0, f64::NAN),
            SurfaceSize::new(400.0, 300.0)
        );
    }

    #[test]
    fn test_empty_surface() {
        assert!(SurfaceSize::default().is_empty());
        assert!(!SurfaceSize::new(1.0, 1.0).is_empty());
    }
}
