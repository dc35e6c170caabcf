//! Rendering module
//!
//! The presenter holds no state: each frame it clears the surface, draws the
//! trail as fading circles, then draws the ball with a drop shadow.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod record;
pub mod shapes;

pub use record::{DrawCall, DrawLog};
pub use shapes::Circle;

use crate::platform::SurfaceSize;
use crate::settings::{Settings, Shadow};
use crate::sim::PhysicsState;

/// The 2D primitives the presenter needs from a drawing backend
pub trait DrawSurface {
    /// Clear the whole surface
    fn clear(&mut self, size: SurfaceSize);
    fn fill_circle(&mut self, circle: &Circle);
    /// Shadow applied to subsequent fills until cleared
    fn set_shadow(&mut self, shadow: &Shadow);
    fn clear_shadow(&mut self);
}

/// Draw one frame of the current state
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    state: &PhysicsState,
    settings: &Settings,
    size: SurfaceSize,
) {
    surface.clear(size);

    let trail = shapes::ball_trail(
        state.trail.iter(),
        state.radius(),
        settings.trail_color,
        settings.trail_max_alpha,
    );
    for circle in &trail {
        surface.fill_circle(circle);
    }

    surface.set_shadow(&settings.shadow);
    surface.fill_circle(&shapes::ball(state, settings));
    surface.clear_shadow();
}
