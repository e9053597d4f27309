#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scream_core::{Bounds, FixedStep, HeldControls, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scream-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ELEMENT_ID)?;
    let bounds = Bounds::default();
    dom::size_canvas(&canvas, &bounds);
    let ctx = dom::context_2d(&canvas)?;

    let session = Rc::new(RefCell::new(Session::default()));
    {
        let s = session.borrow();
        let p = s.state().position();
        log::info!(
            "[session] canvas={}x{} start=({:.0},{:.0})",
            bounds.width,
            bounds.height,
            p.x,
            p.y
        );
    }
    let held = Rc::new(RefCell::new(HeldControls::default()));

    // Keyboard controls
    events::wire_global_keys(session.clone(), held.clone());

    // Pointer handlers (down/up)
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        pressed: Rc::new(RefCell::new(false)),
        last_pos: Rc::new(RefCell::new(glam::Vec2::ZERO)),
    });

    // Fixed-step simulation + 2D renderer driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        held,
        ctx,
        clock: FixedStep::default(),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
