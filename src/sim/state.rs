//! Ball state for the bounce simulation

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::SurfaceSize;
use crate::settings::BallConfig;

/// The single simulated ball and its recent history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Centre position, y measured downward from the top of the surface
    pub pos: Vec2,
    /// Vertical velocity (pixels per tick, positive is downward)
    pub vy: f32,
    /// Steps taken since the last reset
    pub ticks: u64,
    /// Trail history for rendering (oldest first)
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
    config: BallConfig,
}

impl PhysicsState {
    /// Create a ball resting at the bottom centre of the surface
    pub fn new(config: BallConfig, surface: SurfaceSize) -> Self {
        let mut state = Self {
            pos: Vec2::ZERO,
            vy: 0.0,
            ticks: 0,
            trail: VecDeque::with_capacity(config.trail_length + 1),
            config,
        };
        state.place_at_bottom(surface);
        state
    }

    pub fn config(&self) -> &BallConfig {
        &self.config
    }

    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Y coordinate of the ball centre when touching the floor
    pub fn floor_y(&self, surface_height: f32) -> f32 {
        surface_height - self.config.radius
    }

    /// Put the ball at bottom centre, stopped, with an empty trail
    pub fn place_at_bottom(&mut self, surface: SurfaceSize) {
        self.pos = Vec2::new(surface.width / 2.0, self.floor_y(surface.height));
        self.vy = 0.0;
        self.ticks = 0;
        self.trail.clear();
    }

    /// Record current position to trail (call once per tick)
    pub fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        if self.trail.len() > self.config.trail_length {
            self.trail.pop_front();
        }
    }

    /// True when the ball sits on the floor with no vertical motion
    pub fn is_resting(&self, surface_height: f32) -> bool {
        self.vy == 0.0 && self.pos.y == self.floor_y(surface_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800.0, 600.0)
    }

    #[test]
    fn test_new_ball_at_bottom_centre() {
        let state = PhysicsState::new(BallConfig::default(), surface());
        assert_eq!(state.pos, Vec2::new(400.0, 588.0));
        assert_eq!(state.vy, 0.0);
        assert!(state.trail.is_empty());
        assert!(state.is_resting(600.0));
    }

    #[test]
    fn test_trail_evicts_oldest() {
        let config = BallConfig {
            trail_length: 3,
            ..Default::default()
        };
        let mut state = PhysicsState::new(config, surface());
        for i in 0..5 {
            state.pos.x = i as f32;
            state.record_trail();
        }
        let xs: Vec<f32> = state.trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_place_at_bottom_clears_history() {
        let mut state = PhysicsState::new(BallConfig::default(), surface());
        state.pos = Vec2::new(10.0, 10.0);
        state.vy = -7.0;
        state.ticks = 42;
        state.record_trail();

        state.place_at_bottom(SurfaceSize::new(1000.0, 500.0));
        assert_eq!(state.pos, Vec2::new(500.0, 488.0));
        assert_eq!(state.vy, 0.0);
        assert_eq!(state.ticks, 0);
        assert!(state.trail.is_empty());
    }
}
