use crate::charge;
use crate::config::{validate_bounds, Tuning, TuningError};
use crate::input::{Command, TickInput};
use crate::kinematics::{self, Bounds};
use crate::scene::{self, Scene};
use crate::state::ActorState;
use crate::waves::Wave;
use glam::Vec2;

/// One running character: owns the actor state and the tick counter.
///
/// Hosts call the event methods as input arrives and [`Session::tick`] once per
/// simulation step, then draw whatever [`Session::render`] returns.
#[derive(Clone, Debug)]
pub struct Session {
    state: ActorState,
    tuning: Tuning,
    bounds: Bounds,
    ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        let tuning = Tuning::default();
        let bounds = Bounds::default();
        Self {
            state: ActorState::new(&tuning, &bounds),
            tuning,
            bounds,
            ticks: 0,
        }
    }
}

impl Session {
    pub fn new(bounds: Bounds, tuning: Tuning) -> Result<Self, TuningError> {
        validate_bounds(&bounds)?;
        tuning.validate()?;
        log::debug!(
            "[session] new {}x{} start_velocity=({:.1},{:.1})",
            bounds.width,
            bounds.height,
            tuning.start_velocity.x,
            tuning.start_velocity.y
        );
        Ok(Self {
            state: ActorState::new(&tuning, &bounds),
            tuning,
            bounds,
            ticks: 0,
        })
    }

    #[inline]
    pub fn state(&self) -> &ActorState {
        &self.state
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Ticks run since the session started; `reset` does not rewind it.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one frame: movement, charge and wave aging, in that order.
    pub fn tick(&mut self, input: TickInput) {
        let s = &mut self.state;
        kinematics::integrate(
            &mut s.position,
            &mut s.velocity,
            &input,
            &self.tuning.motion,
            &self.bounds,
        );
        s.charge = charge::step(s.charge, s.charging, &self.tuning.charge);
        s.waves.tick();
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn on_gesture_press(&mut self) {
        self.state.charging = true;
    }

    /// Stop charging and spawn a wave at `(x, y)` carrying the current charge.
    pub fn on_gesture_release(&mut self, x: f32, y: f32) -> Wave {
        self.state.charging = false;
        let wave = self.state.waves.emit(Vec2::new(x, y), self.state.charge);
        log::debug!(
            "[wave] spawn at ({:.0},{:.0}) power={:.2} live={}",
            x,
            y,
            wave.power(),
            self.state.waves.len()
        );
        wave
    }

    pub fn on_command(&mut self, cmd: Command) {
        match cmd {
            Command::ToggleHelp => {
                self.state.help_visible = !self.state.help_visible;
                log::info!("[keys] help_visible={}", self.state.help_visible);
            }
            Command::Reset => {
                self.reset();
                log::info!("[keys] reset");
            }
        }
    }

    /// Back to the start position, drift velocity, zero charge and no waves.
    pub fn reset(&mut self) {
        self.state.reset(&self.tuning, &self.bounds);
        log::debug!("[session] reset");
    }

    pub fn render(&self) -> Scene {
        scene::compose(&self.state, self.ticks, &self.bounds)
    }
}
