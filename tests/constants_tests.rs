// Host-side tests for tuning constants and their relationships.

use scream_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn movement_constants_are_consistent() {
    // Friction must damp, not stop or amplify
    assert!(FRICTION > 0.0 && FRICTION < 1.0);

    // Boost must be stronger than normal movement
    assert!(ACCEL > 0.0);
    assert!(ACCEL_BOOST >= ACCEL);
    assert!(MAX_SPEED > 0.0);
    assert!(MAX_SPEED_BOOST > MAX_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn charge_drains_faster_than_it_fills() {
    assert!(CHARGE_RISE_PER_TICK > 0.0);
    assert!(CHARGE_DECAY_PER_TICK > CHARGE_RISE_PER_TICK);
    // snapping must never skip a whole step
    assert!(CHARGE_SNAP_EPSILON < CHARGE_RISE_PER_TICK * 0.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn waves_always_grow_and_fade() {
    assert!(WAVE_START_RADIUS > 0.0);
    assert!(WAVE_START_ALPHA > 0.0 && WAVE_START_ALPHA <= 255.0);
    assert!(WAVE_GROWTH_BASE > 0.0 && WAVE_GROWTH_SCALE > 0.0);
    assert!(WAVE_FADE_BASE > 0.0 && WAVE_FADE_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn face_and_panel_fit_on_canvas() {
    assert!(MOUTH_HEIGHT_MIN < MOUTH_HEIGHT_MAX);
    assert!(FACE_SIZE * FACE_ASPECT < CANVAS_HEIGHT);
    assert!(HELP_PANEL_X + HELP_PANEL_SIZE[0] <= CANVAS_WIDTH);
    assert!(HELP_PANEL_BOTTOM_OFFSET >= HELP_PANEL_SIZE[1]);
    assert!(HELP_TITLE_BOTTOM_OFFSET < HELP_PANEL_BOTTOM_OFFSET);
    let last_line_bottom = HELP_LINES_BOTTOM_OFFSET
        - HELP_LINE_HEIGHT * (HELP_LINES.len() as f32 - 1.0)
        - HELP_TEXT_SIZE;
    let panel_bottom = HELP_PANEL_BOTTOM_OFFSET - HELP_PANEL_SIZE[1];
    assert!(last_line_bottom >= panel_bottom);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn start_state_is_on_canvas() {
    assert!((0.0..=1.0).contains(&START_POSITION_FRAC[0]));
    assert!((0.0..=1.0).contains(&START_POSITION_FRAC[1]));
    assert!(TICK_HZ > 0.0);
    assert!(MAX_TICKS_PER_FRAME >= 1);
}
