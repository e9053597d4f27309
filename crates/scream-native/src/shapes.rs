//! Flattens a [`Scene`] into GPU instances, back to front.

use glam::Vec2;
use scream_core::{Ellipse, Rgba, Scene};

pub const SHAPE_FILL_ELLIPSE: f32 = 0.0;
pub const SHAPE_STROKE_ELLIPSE: f32 = 1.0;
pub const SHAPE_ROUNDED_RECT: f32 = 2.0;

// Upper bound on instances per frame; extra rings are dropped.
pub const MAX_SHAPES: usize = 256;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeInstance {
    pub center: [f32; 2],
    pub half_size: [f32; 2],
    pub color: [f32; 4],
    /// kind, stroke width, corner radius, unused
    pub params: [f32; 4],
}

impl ShapeInstance {
    fn fill_ellipse(e: &Ellipse, color: &Rgba) -> Self {
        Self {
            center: e.center.to_array(),
            half_size: (e.size * 0.5).to_array(),
            color: color.to_unit_array(),
            params: [SHAPE_FILL_ELLIPSE, 0.0, 0.0, 0.0],
        }
    }

    fn stroke_ellipse(e: &Ellipse, color: &Rgba, weight: f32) -> Self {
        Self {
            center: e.center.to_array(),
            half_size: (e.size * 0.5).to_array(),
            color: color.to_unit_array(),
            params: [SHAPE_STROKE_ELLIPSE, weight, 0.0, 0.0],
        }
    }

    fn rect(origin: Vec2, size: Vec2, radius: f32, color: &Rgba) -> Self {
        let half = size * 0.5;
        Self {
            center: (origin + half).to_array(),
            half_size: half.to_array(),
            color: color.to_unit_array(),
            params: [SHAPE_ROUNDED_RECT, 0.0, radius, 0.0],
        }
    }
}

pub fn scene_instances(scene: &Scene) -> Vec<ShapeInstance> {
    let actor = &scene.actor;
    let mut out = Vec::with_capacity(scene.rings.len() + 8);

    out.push(ShapeInstance::rect(Vec2::ZERO, scene.canvas, 0.0, &scene.tint));

    // face and help need 7 slots; rings take what is left
    let ring_slots = MAX_SHAPES.saturating_sub(8);
    if scene.rings.len() > ring_slots {
        log::debug!("[shapes] dropping {} rings", scene.rings.len() - ring_slots);
    }
    for ring in scene.rings.iter().take(ring_slots) {
        let e = Ellipse {
            center: ring.center,
            size: Vec2::splat(ring.diameter),
        };
        out.push(ShapeInstance::stroke_ellipse(&e, &ring.stroke, ring.stroke_weight));
    }

    out.push(ShapeInstance::fill_ellipse(&actor.head, &actor.head_fill));
    out.push(ShapeInstance::stroke_ellipse(
        &actor.outline,
        &actor.outline_stroke,
        actor.outline_weight,
    ));
    for eye in &actor.eyes {
        out.push(ShapeInstance::fill_ellipse(eye, &actor.eye_fill));
    }
    out.push(ShapeInstance::fill_ellipse(&actor.mouth, &actor.mouth_fill));

    if let Some(panel) = &scene.help {
        out.push(ShapeInstance::rect(
            panel.origin,
            panel.size,
            panel.corner_radius,
            &panel.fill,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scream_core::{Command, Session, TickInput};

    #[test]
    fn default_scene_is_tint_face_and_panel() {
        let s = Session::default();
        let shapes = scene_instances(&s.render());
        // tint, head, outline, two eyes, mouth, panel
        assert_eq!(shapes.len(), 7);
        assert_eq!(shapes[0].params[0], SHAPE_ROUNDED_RECT);
        assert_eq!(shapes[0].half_size, [240.0, 300.0]);
        assert_eq!(shapes[6].params[0], SHAPE_ROUNDED_RECT);
    }

    #[test]
    fn rings_sit_between_tint_and_face() {
        let mut s = Session::default();
        s.on_command(Command::ToggleHelp);
        s.on_gesture_release(100.0, 100.0);
        s.on_gesture_release(200.0, 200.0);
        s.tick(TickInput::idle());
        let shapes = scene_instances(&s.render());
        assert_eq!(shapes.len(), 8);
        assert_eq!(shapes[1].params[0], SHAPE_STROKE_ELLIPSE);
        assert_eq!(shapes[1].center, [100.0, 100.0]);
        assert_eq!(shapes[2].center, [200.0, 200.0]);
        assert_eq!(shapes[3].params[0], SHAPE_FILL_ELLIPSE);
    }

    #[test]
    fn ring_count_is_capped() {
        let mut s = Session::default();
        for i in 0..400 {
            s.on_gesture_release(i as f32, 0.0);
        }
        let shapes = scene_instances(&s.render());
        assert!(shapes.len() <= MAX_SHAPES);
    }

    #[test]
    fn colors_are_normalized() {
        let s = Session::default();
        for shape in scene_instances(&s.render()) {
            assert!(shape.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
