//! Drawable description of one frame.
//!
//! [`compose`] is a pure function of the actor state and the tick counter. It
//! never mutates anything, so a frontend may call it as often as it likes. The
//! output is backend-neutral: canvas units with a top-left origin and 0..=255
//! color channels, which both the 2D canvas and the native renderer map from.

use crate::constants::*;
use crate::kinematics::Bounds;
use crate::state::ActorState;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb([255.0, 255.0, 255.0]);

    #[inline]
    pub const fn rgb(c: [f32; 3]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: 255.0,
        }
    }

    #[inline]
    pub const fn rgba(c: [f32; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 255.0),
            ..self
        }
    }

    /// Channel-wise blend; `t` is clamped into `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// CSS color string for 2D canvas styles.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a / 255.0).clamp(0.0, 1.0)
        )
    }

    /// Normalized `[r, g, b, a]` for GPU vertex data.
    pub fn to_unit_array(&self) -> [f32; 4] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a / 255.0]
    }
}

#[inline]
fn calm_to_intense(calm: [f32; 3], intense: [f32; 3], charge: f32) -> Rgba {
    Rgba::rgb(calm).lerp(Rgba::rgb(intense), charge)
}

/// Axis-aligned ellipse given by center and full width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub center: Vec2,
    pub size: Vec2,
}

/// Unfilled circle drawn for one wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub diameter: f32,
    pub stroke: Rgba,
    pub stroke_weight: f32,
}

impl Ring {
    #[inline]
    pub fn stroke_alpha(&self) -> f32 {
        self.stroke.a
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorAppearance {
    /// Actor position plus jitter.
    pub center: Vec2,
    pub jitter: Vec2,
    pub head: Ellipse,
    pub head_fill: Rgba,
    pub outline: Ellipse,
    pub outline_stroke: Rgba,
    pub outline_weight: f32,
    pub eyes: [Ellipse; 2],
    pub eye_fill: Rgba,
    pub mouth: Ellipse,
    pub mouth_fill: Rgba,
}

impl ActorAppearance {
    #[inline]
    pub fn mouth_height(&self) -> f32 {
        self.mouth.size.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelpPanel {
    pub origin: Vec2,
    pub size: Vec2,
    pub corner_radius: f32,
    pub fill: Rgba,
    pub text_fill: Rgba,
    pub text_size: f32,
    pub title: &'static str,
    pub title_pos: Vec2,
    pub lines: &'static [&'static str],
    /// Top-left of the first instruction line.
    pub lines_pos: Vec2,
    pub line_height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Vec2,
    /// Translucent full-canvas overlay.
    pub tint: Rgba,
    pub rings: SmallVec<[Ring; 8]>,
    pub actor: ActorAppearance,
    pub help: Option<HelpPanel>,
}

/// Sinusoidal wobble; amplitude scales with charge, so a calm face is still.
pub fn jitter_offset(tick: u64, charge: f32) -> Vec2 {
    let amp = JITTER_MAX * charge.clamp(0.0, 1.0);
    if amp == 0.0 {
        return Vec2::ZERO;
    }
    let t = tick as f64;
    Vec2::new(
        (t * JITTER_FREQ_X).sin() as f32 * amp,
        (t * JITTER_FREQ_Y).cos() as f32 * amp,
    )
}

/// Mouth height in canvas units, linear in charge.
#[inline]
pub fn mouth_height(charge: f32, face_size: f32) -> f32 {
    let t = charge.clamp(0.0, 1.0);
    face_size * (MOUTH_HEIGHT_MIN + (MOUTH_HEIGHT_MAX - MOUTH_HEIGHT_MIN) * t)
}

#[inline]
pub fn tint_color(charge: f32) -> Rgba {
    calm_to_intense(TINT_CALM_RGB, TINT_INTENSE_RGB, charge).with_alpha(TINT_ALPHA)
}

fn actor_appearance(position: Vec2, charge: f32, tick: u64) -> ActorAppearance {
    let s = FACE_SIZE;
    let jitter = jitter_offset(tick, charge);
    let center = position + jitter;

    let eye_size = Vec2::from(EYE_SIZE) * s;
    let eye_base = position + jitter * EYE_JITTER_FOLLOW;
    let eye = |side: f32| Ellipse {
        center: eye_base + Vec2::new(side * EYE_OFFSET[0] * s, EYE_OFFSET[1] * s),
        size: eye_size,
    };

    ActorAppearance {
        center,
        jitter,
        head: Ellipse {
            center,
            size: Vec2::new(s, s * FACE_ASPECT),
        },
        head_fill: calm_to_intense(FACE_CALM_RGB, FACE_INTENSE_RGB, charge),
        outline: Ellipse {
            center,
            size: Vec2::from(OUTLINE_SCALE) * s,
        },
        outline_stroke: Rgba::rgb(OUTLINE_RGB),
        outline_weight: OUTLINE_WEIGHT,
        eyes: [eye(-1.0), eye(1.0)],
        eye_fill: calm_to_intense(EYE_CALM_RGB, EYE_INTENSE_RGB, charge),
        mouth: Ellipse {
            center: position + jitter * MOUTH_JITTER_FOLLOW + Vec2::new(0.0, MOUTH_OFFSET_Y * s),
            size: Vec2::new(MOUTH_WIDTH * s, mouth_height(charge, s)),
        },
        mouth_fill: calm_to_intense(MOUTH_CALM_RGB, MOUTH_INTENSE_RGB, charge),
    }
}

fn help_panel(bounds: &Bounds) -> HelpPanel {
    let h = bounds.height;
    HelpPanel {
        origin: Vec2::new(HELP_PANEL_X, h - HELP_PANEL_BOTTOM_OFFSET),
        size: Vec2::from(HELP_PANEL_SIZE),
        corner_radius: HELP_PANEL_RADIUS,
        fill: Rgba::rgba(HELP_PANEL_RGBA),
        text_fill: Rgba::WHITE,
        text_size: HELP_TEXT_SIZE,
        title: HELP_TITLE,
        title_pos: Vec2::new(HELP_TEXT_X, h - HELP_TITLE_BOTTOM_OFFSET),
        lines: HELP_LINES,
        lines_pos: Vec2::new(HELP_TEXT_X, h - HELP_LINES_BOTTOM_OFFSET),
        line_height: HELP_LINE_HEIGHT,
    }
}

pub fn compose(state: &ActorState, tick: u64, bounds: &Bounds) -> Scene {
    let charge = state.charge();
    let ring_color = Rgba::rgb(WAVE_STROKE_RGB);
    let rings = state
        .waves()
        .iter()
        .map(|w| Ring {
            center: w.origin(),
            diameter: w.diameter(),
            stroke: ring_color.with_alpha(w.alpha()),
            stroke_weight: WAVE_STROKE_WEIGHT,
        })
        .collect();

    Scene {
        canvas: bounds.size(),
        tint: tint_color(charge),
        rings,
        actor: actor_appearance(state.position(), charge, tick),
        help: state.help_visible().then(|| help_panel(bounds)),
    }
}
