//! Bounce Lab - a single bouncing ball under tunable gravity and restitution
//!
//! Core modules:
//! - `sim`: Fixed-timestep physics and preset/parameter reconciliation
//! - `controller`: Command dispatch and the step-then-render frame loop
//! - `renderer`: Stateless trail + ball presenter over a 2D draw surface
//! - `platform`: Surface sizing and browser bindings
//! - `settings`: Tunable constants, optionally overridden from JSON

pub mod controller;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::{Command, Controller};
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Nominal frame time fed to the integrator (~16ms, never wall-clock)
    pub const FRAME_DT: f32 = 0.016;

    /// Ball radius in device pixels
    pub const BALL_RADIUS: f32 = 12.0;
    /// Horizontal drift per tick, as a percentage of surface width
    pub const DRIFT_PERCENT: f32 = 0.1;
    /// Vertical speed below which a ball touching the floor is at rest.
    /// Tunable heuristic, not derived from energy loss.
    pub const REST_THRESHOLD: f32 = 0.1;

    /// Maximum number of trail points kept
    pub const TRAIL_LENGTH: usize = 250;
    /// Alpha of the newest trail circle
    pub const TRAIL_MAX_ALPHA: f32 = 0.5;
}

/// Horizontal drift applied each tick for a surface of the given width
#[inline]
pub fn drift_per_tick(drift_percent: f32, surface_width: f32) -> f32 {
    (drift_percent / 100.0) * surface_width
}
