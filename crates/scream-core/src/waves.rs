//! Shockwave rings spawned on gesture release.
//!
//! A wave's `power` is a copy of the charge at release time. It sets how fast
//! that wave grows and fades: stronger releases give bigger, shorter-lived rings.

use crate::charge::clamp_unit;
use crate::constants::{
    WAVE_FADE_BASE, WAVE_FADE_SCALE, WAVE_GROWTH_BASE, WAVE_GROWTH_SCALE, WAVE_START_ALPHA,
    WAVE_START_RADIUS,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    pub start_radius: f32,
    pub start_alpha: f32,
    pub growth_base: f32,
    pub growth_scale: f32,
    pub fade_base: f32,
    pub fade_scale: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            start_radius: WAVE_START_RADIUS,
            start_alpha: WAVE_START_ALPHA,
            growth_base: WAVE_GROWTH_BASE,
            growth_scale: WAVE_GROWTH_SCALE,
            fade_base: WAVE_FADE_BASE,
            fade_scale: WAVE_FADE_SCALE,
        }
    }
}

impl WaveParams {
    #[inline]
    pub fn growth_for(&self, power: f32) -> f32 {
        self.growth_base + power * self.growth_scale
    }

    #[inline]
    pub fn fade_for(&self, power: f32) -> f32 {
        self.fade_base + power * self.fade_scale
    }
}

/// Only [`WavePool`] creates and removes waves; outside code reads them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    origin: Vec2,
    radius: f32,
    alpha: f32,
    power: f32,
}

impl Wave {
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
    #[inline]
    pub fn power(&self) -> f32 {
        self.power
    }
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }

    fn advanced(&self, params: &WaveParams) -> Wave {
        Wave {
            radius: self.radius + params.growth_for(self.power),
            alpha: self.alpha - params.fade_for(self.power),
            ..*self
        }
    }
}

/// Live waves in spawn order.
#[derive(Clone, Debug, Default)]
pub struct WavePool {
    waves: Vec<Wave>,
    params: WaveParams,
}

impl WavePool {
    pub fn new(params: WaveParams) -> Self {
        Self {
            waves: Vec::new(),
            params,
        }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Spawn a wave at `origin`; `power` is copied and clamped into `[0, 1]`.
    pub fn emit(&mut self, origin: Vec2, power: f32) -> Wave {
        let wave = Wave {
            origin,
            radius: self.params.start_radius,
            alpha: self.params.start_alpha,
            power: clamp_unit(power),
        };
        self.waves.push(wave);
        wave
    }

    /// Age every wave, then keep only the ones still visible.
    pub fn tick(&mut self) {
        let params = self.params;
        for w in self.waves.iter_mut() {
            *w = w.advanced(&params);
        }
        self.waves.retain(Wave::is_alive);
    }

    pub fn clear(&mut self) {
        self.waves.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter()
    }

    pub fn as_slice(&self) -> &[Wave] {
        &self.waves
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}
