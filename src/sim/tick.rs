//! Fixed timestep simulation tick
//!
//! Advances the ball by one nominal frame: horizontal drift with wrap-around,
//! Euler integration of gravity, floor bounce, rest detection and relaunch.

use super::state::PhysicsState;
use crate::drift_per_tick;
use crate::platform::SurfaceSize;

/// Parameters consumed by a single step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInput {
    /// Downward acceleration (>= 0)
    pub gravity: f32,
    /// Coefficient of restitution in [0, 1]
    pub restitution: f32,
    /// Speed applied upward when the ball comes to rest with looping on
    pub relaunch_speed: f32,
    /// Relaunch automatically after coming to rest
    pub loop_enabled: bool,
}

/// Advance the ball by one fixed timestep
pub fn step(state: &mut PhysicsState, input: &StepInput, surface: SurfaceSize, dt: f32) {
    let radius = state.radius();
    let width = surface.width;

    // Horizontal drift, independent of gravity and restitution
    state.pos.x += drift_per_tick(state.config().drift_percent, width);

    // Wrap horizontally (re-enter from the opposite side)
    if state.pos.x - radius > width {
        state.pos.x = -radius;
    } else if state.pos.x + radius < 0.0 {
        state.pos.x = width + radius;
    }

    // Gravity
    state.vy += input.gravity * dt;
    state.pos.y += state.vy;

    // Floor. There is deliberately no ceiling: the ball may leave through the top.
    let floor_y = state.floor_y(surface.height);
    if state.pos.y > floor_y {
        state.pos.y = floor_y;
        state.vy = -state.vy * input.restitution;
        log::trace!("bounce at tick {}: vy={:.4}", state.ticks, state.vy);

        if state.vy.abs() < state.config().rest_threshold {
            state.vy = 0.0;
            state.pos.y = floor_y;

            if input.loop_enabled {
                state.vy = -input.relaunch_speed;
                log::trace!("relaunch at tick {}: vy={}", state.ticks, state.vy);
            }
        }
    }

    state.record_trail();
    state.ticks += 1;
}
