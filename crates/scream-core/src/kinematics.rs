//! Drag-limited movement integration for the actor point.

use crate::constants::{
    ACCEL, ACCEL_BOOST, CANVAS_HEIGHT, CANVAS_WIDTH, FRICTION, MAX_SPEED, MAX_SPEED_BOOST,
};
use crate::input::{DirectionSet, TickInput};
use glam::Vec2;

/// Visible canvas extent. Positions are kept within `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Hard clamp per axis; no bounce or wrap.
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub accel: f32,
    pub accel_boost: f32,
    pub friction: f32,
    pub max_speed: f32,
    pub max_speed_boost: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            accel: ACCEL,
            accel_boost: ACCEL_BOOST,
            friction: FRICTION,
            max_speed: MAX_SPEED,
            max_speed_boost: MAX_SPEED_BOOST,
        }
    }
}

impl MotionParams {
    #[inline]
    pub fn accel_for(&self, boost: bool) -> f32 {
        if boost {
            self.accel_boost
        } else {
            self.accel
        }
    }

    #[inline]
    pub fn speed_cap(&self, boost: bool) -> f32 {
        if boost {
            self.max_speed_boost
        } else {
            self.max_speed
        }
    }
}

/// Sum of per-direction pushes; opposing directions cancel.
pub fn acceleration(directions: DirectionSet, magnitude: f32) -> Vec2 {
    directions
        .iter()
        .fold(Vec2::ZERO, |acc, d| acc + d.unit() * magnitude)
}

/// Rescale `v` to `cap` when longer, keeping its direction.
#[inline]
pub fn limit_speed(v: Vec2, cap: f32) -> Vec2 {
    let speed = v.length();
    // zero (and NaN) vectors have no direction to keep
    if speed > cap && speed > 0.0 {
        v * (cap / speed)
    } else {
        v
    }
}

/// Advance one tick: accelerate, apply friction, cap speed, move and clamp.
pub fn integrate(
    position: &mut Vec2,
    velocity: &mut Vec2,
    input: &TickInput,
    params: &MotionParams,
    bounds: &Bounds,
) {
    let accel = acceleration(input.directions, params.accel_for(input.boost));
    let v = (*velocity + accel) * params.friction;
    *velocity = limit_speed(v, params.speed_cap(input.boost));
    *position = bounds.clamp(*position + *velocity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;

    #[test]
    fn limit_speed_preserves_direction() {
        let v = limit_speed(Vec2::new(30.0, 40.0), 5.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!((v.x / v.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn limit_speed_ignores_zero_vector() {
        assert_eq!(limit_speed(Vec2::ZERO, 0.0), Vec2::ZERO);
        assert_eq!(limit_speed(Vec2::ZERO, 5.0), Vec2::ZERO);
    }

    #[test]
    fn rest_is_a_fixed_point() {
        let mut p = Vec2::new(100.0, 100.0);
        let mut v = Vec2::ZERO;
        for _ in 0..100 {
            integrate(
                &mut p,
                &mut v,
                &TickInput::idle(),
                &MotionParams::default(),
                &Bounds::default(),
            );
        }
        assert_eq!(p, Vec2::new(100.0, 100.0));
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn opposing_inputs_cancel_additively() {
        let dirs: DirectionSet = [Direction::Left, Direction::Right, Direction::Up]
            .into_iter()
            .collect();
        let a = acceleration(dirs, 2.0);
        assert_eq!(a, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn clamp_is_per_axis() {
        let b = Bounds::new(100.0, 50.0);
        assert_eq!(b.clamp(Vec2::new(-5.0, 20.0)), Vec2::new(0.0, 20.0));
        assert_eq!(b.clamp(Vec2::new(150.0, 60.0)), Vec2::new(100.0, 50.0));
    }
}
