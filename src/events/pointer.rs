use crate::input;
use glam::Vec2;
use scream_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    /// Set while a press that started on the canvas is held.
    pub pressed: Rc<RefCell<bool>>,
    /// Last finite canvas position seen on pointerdown.
    pub last_pos: Rc<RefCell<Vec2>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointerup(&w);
}

#[inline]
fn pointer_canvas_pos(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        *w.pressed.borrow_mut() = true;
        let pos = pointer_canvas_pos(&ev, &w.canvas);
        if pos.is_finite() {
            *w.last_pos.borrow_mut() = pos;
        }
        w.session.borrow_mut().on_gesture_press();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // ignore releases of presses that began outside the canvas
        if !w.pressed.replace(false) {
            return;
        }
        let pos = input::release_point(
            pointer_canvas_pos(&ev, &w.canvas),
            *w.last_pos.borrow(),
        );
        w.session.borrow_mut().on_gesture_release(pos.x, pos.y);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
