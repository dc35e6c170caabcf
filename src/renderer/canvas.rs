//! Canvas 2D backend

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Circle, DrawSurface};
use crate::platform::SurfaceSize;
use crate::settings::Shadow;

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&mut self, size: SurfaceSize) {
        self.clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_circle(&mut self, circle: &Circle) {
        self.begin_path();
        if let Err(e) = self.arc(
            circle.center.x as f64,
            circle.center.y as f64,
            circle.radius as f64,
            0.0,
            TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.set_fill_style_str(&circle.color.to_css());
        self.fill();
        self.close_path();
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.set_shadow_color(&shadow.color.to_css());
        self.set_shadow_blur(shadow.blur as f64);
        self.set_shadow_offset_x(shadow.offset_x as f64);
        self.set_shadow_offset_y(shadow.offset_y as f64);
    }

    fn clear_shadow(&mut self) {
        self.set_shadow_color("rgba(0, 0, 0, 0)");
        self.set_shadow_blur(0.0);
        self.set_shadow_offset_x(0.0);
        self.set_shadow_offset_y(0.0);
    }
}
