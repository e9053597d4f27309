//! Every simulation tunable in one place.
//!
//! Nothing in the simulation reads a literal directly: it all flows from a
//! [`Tuning`], whose `Default` is built from [`crate::constants`].

use crate::charge::ChargeParams;
use crate::constants::{START_POSITION_FRAC, START_VELOCITY};
use crate::kinematics::{Bounds, MotionParams};
use crate::waves::WaveParams;
use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("friction must lie strictly between 0 and 1, got {0}")]
    Friction(f32),
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("boost speed cap {boost} must exceed base cap {base}")]
    BoostSpeedCap { base: f32, boost: f32 },
    #[error("boost acceleration {boost} must not be below base acceleration {base}")]
    BoostAccel { base: f32, boost: f32 },
    #[error("start position fraction must lie in [0, 1], got ({x}, {y})")]
    StartFraction { x: f32, y: f32 },
    #[error("start velocity must be finite, got ({x}, {y})")]
    StartVelocity { x: f32, y: f32 },
    #[error("canvas must have a positive size, got {width}x{height}")]
    Bounds { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub motion: MotionParams,
    pub charge: ChargeParams,
    pub waves: WaveParams,
    /// Start position as a fraction of the canvas size.
    pub start_position_frac: Vec2,
    pub start_velocity: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            motion: MotionParams::default(),
            charge: ChargeParams::default(),
            waves: WaveParams::default(),
            start_position_frac: Vec2::from(START_POSITION_FRAC),
            start_velocity: Vec2::from(START_VELOCITY),
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    // written this way so NaN is rejected too
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { name, value })
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        let m = &self.motion;
        if !(m.friction > 0.0 && m.friction < 1.0) {
            return Err(TuningError::Friction(m.friction));
        }
        positive("accel", m.accel)?;
        positive("max_speed", m.max_speed)?;
        if !(m.accel_boost >= m.accel) {
            return Err(TuningError::BoostAccel {
                base: m.accel,
                boost: m.accel_boost,
            });
        }
        if !(m.max_speed_boost > m.max_speed) {
            return Err(TuningError::BoostSpeedCap {
                base: m.max_speed,
                boost: m.max_speed_boost,
            });
        }

        positive("charge rise", self.charge.rise)?;
        positive("charge decay", self.charge.decay)?;

        let w = &self.waves;
        positive("wave start alpha", w.start_alpha)?;
        positive("wave growth base", w.growth_base)?;
        positive("wave growth scale", w.growth_scale)?;
        positive("wave fade base", w.fade_base)?;
        positive("wave fade scale", w.fade_scale)?;
        if !(w.start_radius >= 0.0) {
            return Err(TuningError::NonPositive {
                name: "wave start radius",
                value: w.start_radius,
            });
        }

        let f = self.start_position_frac;
        if !((0.0..=1.0).contains(&f.x) && (0.0..=1.0).contains(&f.y)) {
            return Err(TuningError::StartFraction { x: f.x, y: f.y });
        }
        let v = self.start_velocity;
        if !v.is_finite() {
            return Err(TuningError::StartVelocity { x: v.x, y: v.y });
        }
        Ok(())
    }

    /// Actor position used by `reset`.
    #[inline]
    pub fn start_position(&self, bounds: &Bounds) -> Vec2 {
        bounds.clamp(self.start_position_frac * bounds.size())
    }
}

pub fn validate_bounds(bounds: &Bounds) -> Result<(), TuningError> {
    let finite = bounds.width.is_finite() && bounds.height.is_finite();
    if finite && bounds.width > 0.0 && bounds.height > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Bounds {
            width: bounds.width,
            height: bounds.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
        assert_eq!(validate_bounds(&Bounds::default()), Ok(()));
    }

    #[test]
    fn rejects_friction_out_of_range() {
        let mut t = Tuning::default();
        t.motion.friction = 1.0;
        assert_eq!(t.validate(), Err(TuningError::Friction(1.0)));
        t.motion.friction = 0.0;
        assert_eq!(t.validate(), Err(TuningError::Friction(0.0)));
    }

    #[test]
    fn rejects_boost_cap_not_above_base() {
        let mut t = Tuning::default();
        t.motion.max_speed_boost = t.motion.max_speed;
        assert!(matches!(
            t.validate(),
            Err(TuningError::BoostSpeedCap { .. })
        ));
    }

    #[test]
    fn rejects_weaker_boost_accel() {
        let mut t = Tuning::default();
        t.motion.accel_boost = t.motion.accel * 0.5;
        assert!(matches!(t.validate(), Err(TuningError::BoostAccel { .. })));
    }

    #[test]
    fn rejects_nan_rates() {
        let mut t = Tuning::default();
        t.charge.decay = f32::NAN;
        assert!(matches!(
            t.validate(),
            Err(TuningError::NonPositive {
                name: "charge decay",
                ..
            })
        ));
    }

    #[test]
    fn accepts_rates_smaller_than_the_snap_window() {
        let mut t = Tuning::default();
        t.charge.rise = 5e-5;
        t.charge.decay = 5e-5;
        assert_eq!(t.validate(), Ok(()));
    }

    #[test]
    fn rejects_non_finite_start_velocity() {
        let mut t = Tuning::default();
        t.start_velocity = Vec2::new(f32::INFINITY, 0.0);
        assert!(matches!(
            t.validate(),
            Err(TuningError::StartVelocity { .. })
        ));
        t.start_velocity = Vec2::new(0.0, f32::NAN);
        assert!(matches!(
            t.validate(),
            Err(TuningError::StartVelocity { .. })
        ));
    }

    #[test]
    fn rejects_empty_canvas() {
        assert!(validate_bounds(&Bounds::new(0.0, 600.0)).is_err());
        assert!(validate_bounds(&Bounds::new(480.0, f32::INFINITY)).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = TuningError::NonPositive {
            name: "wave fade base",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "wave fade base must be positive, got -1");
    }
}
