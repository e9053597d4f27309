//! The single actor owned by a [`Session`](crate::Session).
//!
//! Fields are read through accessors; only the session mutates them, and only
//! through its documented operations.

use crate::config::Tuning;
use crate::kinematics::Bounds;
use crate::waves::WavePool;
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct ActorState {
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) charge: f32,
    pub(crate) charging: bool,
    pub(crate) help_visible: bool,
    pub(crate) waves: WavePool,
}

impl ActorState {
    pub(crate) fn new(tuning: &Tuning, bounds: &Bounds) -> Self {
        let mut state = Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            charge: 0.0,
            charging: false,
            help_visible: true,
            waves: WavePool::new(tuning.waves),
        };
        state.reset(tuning, bounds);
        state
    }

    /// Restore the continuous state; help visibility is a preference and survives.
    pub(crate) fn reset(&mut self, tuning: &Tuning, bounds: &Bounds) {
        self.position = tuning.start_position(bounds);
        self.velocity = tuning.start_velocity;
        self.charge = 0.0;
        self.charging = false;
        self.waves.clear();
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Accumulated hold energy in `[0, 1]`.
    #[inline]
    pub fn charge(&self) -> f32 {
        self.charge
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    #[inline]
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    #[inline]
    pub fn waves(&self) -> &WavePool {
        &self.waves
    }
}
