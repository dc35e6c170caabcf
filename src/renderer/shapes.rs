//! Shape generation for the trail and ball

use glam::Vec2;

use crate::settings::{Rgba, Settings};
use crate::sim::PhysicsState;

/// A filled circle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

/// One circle per trail point, oldest first. Alpha rises linearly with the
/// index, from 0 for the oldest point to just under `max_alpha` for the newest.
pub fn ball_trail<'a, I>(trail: I, radius: f32, color: Rgba, max_alpha: f32) -> Vec<Circle>
where
    I: ExactSizeIterator<Item = &'a Vec2>,
{
    let trail_len = trail.len() as f32;
    trail
        .enumerate()
        .map(|(i, &center)| Circle {
            center,
            radius,
            color: color.with_alpha(i as f32 / trail_len * max_alpha),
        })
        .collect()
}

/// The ball itself, at full colour
pub fn ball(state: &PhysicsState, settings: &Settings) -> Circle {
    Circle {
        center: state.pos,
        radius: state.radius(),
        color: settings.ball_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_alpha_ramp() {
        let points: Vec<Vec2> = (0..4).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let circles = ball_trail(points.iter(), 12.0, Rgba::new(52, 152, 219, 1.0), 0.5);

        let alphas: Vec<f32> = circles.iter().map(|c| c.color.a).collect();
        assert_eq!(alphas, vec![0.0, 0.125, 0.25, 0.375]);
        assert!(circles.iter().all(|c| c.radius == 12.0));
        assert_eq!(circles[3].center, Vec2::new(3.0, 0.0));
        assert_eq!(circles[0].color.r, 52);
    }

    #[test]
    fn test_empty_trail() {
        let points: Vec<Vec2> = Vec::new();
        assert!(ball_trail(points.iter(), 12.0, Rgba::new(0, 0, 0, 1.0), 0.5).is_empty());
    }
}
