//! Draw surface that records calls instead of drawing

use super::{Circle, DrawSurface};
use crate::platform::SurfaceSize;
use crate::settings::Shadow;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(SurfaceSize),
    Circle(Circle),
    Shadow(Shadow),
    ClearShadow,
}

/// Recorded draw calls, used headless and in tests
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    pub calls: Vec<DrawCall>,
}

impl DrawLog {
    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Circle(c) => Some(c),
            _ => None,
        })
    }
}

impl DrawSurface for DrawLog {
    fn clear(&mut self, size: SurfaceSize) {
        self.calls.push(DrawCall::Clear(size));
    }

    fn fill_circle(&mut self, circle: &Circle) {
        self.calls.push(DrawCall::Circle(*circle));
    }

    fn set_shadow(&mut self, shadow: &Shadow) {
        self.calls.push(DrawCall::Shadow(*shadow));
    }

    fn clear_shadow(&mut self) {
        self.calls.push(DrawCall::ClearShadow);
    }
}
