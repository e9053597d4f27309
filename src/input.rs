use glam::Vec2;

// ---------------- Pointer helpers ----------------

/// Map a client-space pointer position onto canvas units.
///
/// `rect_*` is the canvas bounding rect in CSS pixels; `canvas_size` is the
/// canvas backing size the scene is drawn in. A collapsed rect falls back to
/// an unscaled offset.
#[inline]
pub fn client_to_canvas(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Vec2 {
    let local = client - rect_origin;
    if rect_size.x > 0.0 && rect_size.y > 0.0 {
        local / rect_size * canvas_size
    } else {
        local
    }
}

/// Where a release lands: the pointer if it maps to a finite point, otherwise
/// the last finite point seen during the press.
#[inline]
pub fn release_point(pointer: Vec2, last_known: Vec2) -> Vec2 {
    if pointer.is_finite() {
        pointer
    } else {
        last_known
    }
}

// ---------------- Keyboard helpers ----------------

/// Keys whose browser default (page scroll, find-as-you-type) would fight the controls.
#[inline]
pub fn is_scroll_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
}
