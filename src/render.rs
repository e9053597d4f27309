use crate::constants::BACKGROUND_CSS;
use crate::overlay;
use scream_core::{ActorAppearance, Ellipse, Rgba, Ring, Scene};
use std::f64::consts::TAU;
use web_sys as web;

#[inline]
fn ellipse_path(ctx: &web::CanvasRenderingContext2d, e: &Ellipse) {
    ctx.begin_path();
    _ = ctx.ellipse(
        e.center.x as f64,
        e.center.y as f64,
        (e.size.x * 0.5).max(0.0) as f64,
        (e.size.y * 0.5).max(0.0) as f64,
        0.0,
        0.0,
        TAU,
    );
}

fn fill_ellipse(ctx: &web::CanvasRenderingContext2d, e: &Ellipse, fill: &Rgba) {
    ellipse_path(ctx, e);
    ctx.set_fill_style_str(&fill.to_css());
    ctx.fill();
}

fn stroke_ellipse(ctx: &web::CanvasRenderingContext2d, e: &Ellipse, stroke: &Rgba, weight: f32) {
    ellipse_path(ctx, e);
    ctx.set_stroke_style_str(&stroke.to_css());
    ctx.set_line_width(weight as f64);
    ctx.stroke();
}

fn draw_ring(ctx: &web::CanvasRenderingContext2d, ring: &Ring) {
    let e = Ellipse {
        center: ring.center,
        size: glam::Vec2::splat(ring.diameter),
    };
    stroke_ellipse(ctx, &e, &ring.stroke, ring.stroke_weight);
}

fn draw_actor(ctx: &web::CanvasRenderingContext2d, actor: &ActorAppearance) {
    fill_ellipse(ctx, &actor.head, &actor.head_fill);
    stroke_ellipse(ctx, &actor.outline, &actor.outline_stroke, actor.outline_weight);
    for eye in &actor.eyes {
        fill_ellipse(ctx, eye, &actor.eye_fill);
    }
    fill_ellipse(ctx, &actor.mouth, &actor.mouth_fill);
}

/// Paint one frame: backdrop, charge tint, rings, face, then help on top.
pub fn draw_scene(ctx: &web::CanvasRenderingContext2d, scene: &Scene) {
    let (w, h) = (scene.canvas.x as f64, scene.canvas.y as f64);
    ctx.set_fill_style_str(BACKGROUND_CSS);
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str(&scene.tint.to_css());
    ctx.fill_rect(0.0, 0.0, w, h);

    for ring in &scene.rings {
        draw_ring(ctx, ring);
    }

    draw_actor(ctx, &scene.actor);

    if let Some(panel) = &scene.help {
        overlay::draw_help(ctx, panel);
    }
}
