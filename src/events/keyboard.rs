use crate::input;
use scream_core::{HeldControls, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<Session>>,
    held: &Rc<RefCell<HeldControls>>,
) {
    let key = ev.key();
    let command = held.borrow_mut().key_down(&key);
    // auto-repeat keeps movement held but must not re-fire toggles
    if let Some(cmd) = command.filter(|_| !ev.repeat()) {
        session.borrow_mut().on_command(cmd);
    }
    if input::is_scroll_key(&key) {
        ev.prevent_default();
    }
}

pub fn handle_global_keyup(ev: &web::KeyboardEvent, held: &Rc<RefCell<HeldControls>>) {
    held.borrow_mut().key_up(&ev.key());
}

pub fn wire_global_keys(session: Rc<RefCell<Session>>, held: Rc<RefCell<HeldControls>>) {
    let Some(window) = web::window() else {
        return;
    };

    let held_down = held.clone();
    let keydown = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &session, &held_down);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let held_up = held.clone();
    let keyup = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keyup(&ev, &held_up);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // key-ups are lost while the page is unfocused
    let blur = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        held.borrow_mut().clear();
        log::info!("[keys] focus lost, released held keys");
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
