use crate::constants::{CHARGE_DECAY_PER_TICK, CHARGE_RISE_PER_TICK, CHARGE_SNAP_EPSILON};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChargeParams {
    pub rise: f32,
    pub decay: f32,
}

impl Default for ChargeParams {
    fn default() -> Self {
        Self {
            rise: CHARGE_RISE_PER_TICK,
            decay: CHARGE_DECAY_PER_TICK,
        }
    }
}

/// Clamp into `[0, 1]`; non-finite values become 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// One tick of the accumulator.
///
/// A step landing within `CHARGE_SNAP_EPSILON` of the bound it is heading for
/// snaps onto it, so whole-step counts fill and drain exactly. Steps never
/// snap backwards, however small the rate.
#[inline]
pub fn step(charge: f32, charging: bool, params: &ChargeParams) -> f32 {
    let charge = clamp_unit(charge);
    if charging {
        let next = charge + params.rise;
        if next >= 1.0 - CHARGE_SNAP_EPSILON {
            1.0
        } else {
            clamp_unit(next)
        }
    } else {
        let next = charge - params.decay;
        if next <= CHARGE_SNAP_EPSILON {
            0.0
        } else {
            clamp_unit(next)
        }
    }
}
