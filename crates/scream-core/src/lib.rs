pub mod charge;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controls;
pub mod input;
pub mod kinematics;
pub mod scene;
pub mod session;
pub mod state;
pub mod waves;

pub use charge::ChargeParams;
pub use clock::FixedStep;
pub use config::{Tuning, TuningError};
pub use controls::{control_for_key, Control, HeldControls};
pub use input::{Command, Direction, DirectionSet, TickInput};
pub use kinematics::{Bounds, MotionParams};
pub use scene::{ActorAppearance, Ellipse, HelpPanel, Rgba, Ring, Scene};
pub use session::Session;
pub use state::ActorState;
pub use waves::{Wave, WaveParams, WavePool};
