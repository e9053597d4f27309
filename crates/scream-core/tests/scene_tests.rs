// Scene composition read back from a running session.

use glam::Vec2;
use scream_core::constants::*;
use scream_core::*;

fn still_session() -> Session {
    let mut t = Tuning::default();
    t.start_velocity = Vec2::ZERO;
    Session::new(Bounds::default(), t).unwrap()
}

#[test]
fn calm_scene_uses_calm_colors_and_no_jitter() {
    let mut s = still_session();
    for _ in 0..13 {
        s.tick(TickInput::idle());
    }
    let scene = s.render();
    assert_eq!(scene.canvas, Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT));
    assert_eq!(scene.tint, Rgba::rgb(TINT_CALM_RGB).with_alpha(TINT_ALPHA));
    assert_eq!(scene.actor.jitter, Vec2::ZERO);
    assert_eq!(scene.actor.center, s.state().position());
    assert_eq!(scene.actor.head_fill, Rgba::rgb(FACE_CALM_RGB));
    assert!((scene.actor.mouth_height() - FACE_SIZE * MOUTH_HEIGHT_MIN).abs() < 1e-4);
    assert!(scene.rings.is_empty());
}

#[test]
fn full_charge_scene_is_intense() {
    let mut s = still_session();
    s.on_gesture_press();
    for _ in 0..100 {
        s.tick(TickInput::idle());
    }
    assert_eq!(s.state().charge(), 1.0);
    let scene = s.render();
    assert_eq!(scene.tint, Rgba::rgb(TINT_INTENSE_RGB).with_alpha(TINT_ALPHA));
    assert_eq!(scene.actor.head_fill, Rgba::rgb(FACE_INTENSE_RGB));
    assert_eq!(scene.actor.mouth_fill, Rgba::rgb(MOUTH_INTENSE_RGB));
    assert!((scene.actor.mouth_height() - FACE_SIZE * MOUTH_HEIGHT_MAX).abs() < 1e-4);
    assert!(scene.actor.jitter.length() > 0.0);
    assert!(scene.actor.jitter.x.abs() <= JITTER_MAX + 1e-4);
}

#[test]
fn rings_mirror_live_waves() {
    let mut s = still_session();
    s.on_gesture_release(100.0, 120.0);
    s.on_gesture_press();
    for _ in 0..30 {
        s.tick(TickInput::idle());
    }
    s.on_gesture_release(300.0, 200.0);
    s.tick(TickInput::idle());

    let scene = s.render();
    let waves = s.state().waves().as_slice();
    assert_eq!(scene.rings.len(), waves.len());
    for (ring, wave) in scene.rings.iter().zip(waves) {
        assert_eq!(ring.center, wave.origin());
        assert_eq!(ring.diameter, 2.0 * wave.radius());
        assert_eq!(ring.stroke_alpha(), wave.alpha());
        assert_eq!(ring.stroke_weight, WAVE_STROKE_WEIGHT);
    }
}

#[test]
fn help_panel_follows_visibility() {
    let mut s = Session::default();
    let panel = s.render().help.expect("help is visible by default");
    assert_eq!(panel.title, HELP_TITLE);
    assert_eq!(panel.lines, HELP_LINES);
    assert_eq!(
        panel.origin,
        Vec2::new(HELP_PANEL_X, CANVAS_HEIGHT - HELP_PANEL_BOTTOM_OFFSET)
    );
    s.on_command(Command::ToggleHelp);
    assert!(s.render().help.is_none());
}

#[test]
fn render_does_not_touch_state() {
    let mut s = Session::default();
    s.on_gesture_press();
    for _ in 0..20 {
        s.tick(TickInput::moving(&[Direction::Right]));
    }
    s.on_gesture_release(40.0, 40.0);
    let ticks = s.ticks();
    let position = s.state().position();
    let a = s.render();
    let b = s.render();
    assert_eq!(a, b);
    assert_eq!(s.ticks(), ticks);
    assert_eq!(s.state().position(), position);
}

#[test]
fn same_history_gives_same_frames() {
    let run = || {
        let mut s = Session::default();
        let mut frames = Vec::new();
        for i in 0..120u32 {
            if i % 30 == 0 {
                s.on_gesture_press();
            }
            if i % 30 == 20 {
                s.on_gesture_release(i as f32, 2.0 * i as f32);
            }
            s.tick(TickInput::moving(&[Direction::Up, Direction::Left]));
            frames.push(s.render());
        }
        frames
    };
    assert_eq!(run(), run());
}

#[test]
fn eyes_are_mirrored_around_the_face() {
    let s = still_session();
    let actor = s.render().actor;
    let [left, right] = actor.eyes;
    let mid = (left.center.x + right.center.x) * 0.5;
    assert!((mid - actor.center.x).abs() < 1e-4);
    assert!(left.center.x < right.center.x);
    assert_eq!(left.size, right.size);
}
