// Shared tuning constants used by both web and native frontends.
//
// Channel values are 0..=255 like the canvas APIs the frontends draw with.

// Canvas
pub const CANVAS_WIDTH: f32 = 480.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

// Session start
pub const START_POSITION_FRAC: [f32; 2] = [0.5, 0.65]; // fraction of canvas size
pub const START_VELOCITY: [f32; 2] = [-5.0, -65.0]; // initial drift, capped on the first tick

// Movement (per tick)
pub const ACCEL: f32 = 0.45;
pub const ACCEL_BOOST: f32 = 1.2;
pub const FRICTION: f32 = 0.9; // velocity multiplier applied every tick
pub const MAX_SPEED: f32 = 5.5;
pub const MAX_SPEED_BOOST: f32 = 9.0;

// Charge (per tick)
pub const CHARGE_RISE_PER_TICK: f32 = 0.015;
pub const CHARGE_DECAY_PER_TICK: f32 = 0.02;
pub const CHARGE_SNAP_EPSILON: f32 = 1e-4; // distance from a bound that snaps onto it

// Shockwaves
pub const WAVE_START_RADIUS: f32 = 10.0;
pub const WAVE_START_ALPHA: f32 = 200.0;
pub const WAVE_GROWTH_BASE: f32 = 10.0;
pub const WAVE_GROWTH_SCALE: f32 = 20.0; // extra growth at full power
pub const WAVE_FADE_BASE: f32 = 4.0;
pub const WAVE_FADE_SCALE: f32 = 2.0; // extra fade at full power
pub const WAVE_STROKE_RGB: [f32; 3] = [255.0, 150.0, 0.0];
pub const WAVE_STROKE_WEIGHT: f32 = 3.0;

// Background tint
pub const TINT_CALM_RGB: [f32; 3] = [30.0, 30.0, 60.0];
pub const TINT_INTENSE_RGB: [f32; 3] = [255.0, 80.0, 60.0];
pub const TINT_ALPHA: f32 = 50.0;

// Face geometry, as fractions of FACE_SIZE unless noted
pub const FACE_SIZE: f32 = 80.0; // head width in canvas units
pub const FACE_ASPECT: f32 = 1.25; // head height / width
pub const OUTLINE_SCALE: [f32; 2] = [1.02, 1.27];
pub const OUTLINE_RGB: [f32; 3] = [50.0, 30.0, 30.0];
pub const OUTLINE_WEIGHT: f32 = 2.5;
pub const EYE_OFFSET: [f32; 2] = [0.18, -0.15]; // x is mirrored for the left eye
pub const EYE_SIZE: [f32; 2] = [0.18, 0.26];
pub const EYE_JITTER_FOLLOW: f32 = 0.3;
pub const MOUTH_OFFSET_Y: f32 = 0.18;
pub const MOUTH_WIDTH: f32 = 0.28;
pub const MOUTH_HEIGHT_MIN: f32 = 0.25;
pub const MOUTH_HEIGHT_MAX: f32 = 0.55;
pub const MOUTH_JITTER_FOLLOW: f32 = 0.2;

// Face palette (calm -> intense)
pub const FACE_CALM_RGB: [f32; 3] = [255.0, 220.0, 180.0];
pub const FACE_INTENSE_RGB: [f32; 3] = [255.0, 90.0, 60.0];
pub const MOUTH_CALM_RGB: [f32; 3] = [255.0, 140.0, 0.0];
pub const MOUTH_INTENSE_RGB: [f32; 3] = [120.0, 0.0, 80.0];
pub const EYE_CALM_RGB: [f32; 3] = [0.0, 0.0, 0.0];
pub const EYE_INTENSE_RGB: [f32; 3] = [255.0, 230.0, 180.0];

// Jitter
pub const JITTER_MAX: f32 = 5.0; // offset amplitude at full charge
pub const JITTER_FREQ_X: f64 = 0.3; // radians per tick
pub const JITTER_FREQ_Y: f64 = 0.29;

// Help panel (y values are measured up from the bottom edge)
pub const HELP_PANEL_X: f32 = 10.0;
pub const HELP_PANEL_BOTTOM_OFFSET: f32 = 84.0;
pub const HELP_PANEL_SIZE: [f32; 2] = [340.0, 74.0];
pub const HELP_PANEL_RADIUS: f32 = 8.0;
pub const HELP_PANEL_RGBA: [f32; 4] = [0.0, 0.0, 0.0, 150.0];
pub const HELP_TEXT_X: f32 = 16.0;
pub const HELP_TITLE_BOTTOM_OFFSET: f32 = 80.0;
pub const HELP_LINES_BOTTOM_OFFSET: f32 = 64.0;
pub const HELP_LINE_HEIGHT: f32 = 14.0;
pub const HELP_TEXT_SIZE: f32 = 12.0;
pub const HELP_TITLE: &str = "The Scream";
pub const HELP_LINES: &[&str] = &[
    "Hold Mouse: Charge | Release: Shockwave",
    "W/A/S/D or Arrows: Move | Shift: Boost",
    "H: Toggle Help | R: Reset",
];

// Simulation clock
pub const TICK_HZ: f64 = 60.0;
pub const MAX_TICKS_PER_FRAME: u32 = 5;
