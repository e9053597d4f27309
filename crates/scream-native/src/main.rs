use std::time::Instant;

use glam::Vec2;
use scream_core::constants::{HELP_LINES, HELP_TITLE};
use scream_core::{Command, FixedStep, HeldControls, Session};
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

mod gpu;
mod shapes;

use gpu::GpuState;

/// DOM-style key name for a winit key, as understood by `HeldControls`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::Shift) => Some("Shift"),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Physical window pixels to canvas units; the canvas is stretched to fill the window.
fn window_to_canvas(
    pos: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    canvas: Vec2,
) -> Vec2 {
    if window.width == 0 || window.height == 0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        pos.x as f32 / window.width as f32 * canvas.x,
        pos.y as f32 / window.height as f32 * canvas.y,
    )
}

/// Help text is logged when a toggle has just made it visible.
fn help_shown_by(cmd: Command, help_visible: bool) -> bool {
    cmd == Command::ToggleHelp && help_visible
}

fn log_help() {
    log::info!("[help] {}", HELP_TITLE);
    for line in HELP_LINES {
        log::info!("[help]   {}", line);
    }
}

/// Everything the event loop mutates apart from the GPU.
struct App {
    session: Session,
    held: HeldControls,
    clock: FixedStep,
    last_frame: Instant,
    cursor: Vec2,
    pressed: bool,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            held: HeldControls::default(),
            clock: FixedStep::default(),
            last_frame: Instant::now(),
            cursor: Vec2::ZERO,
            pressed: false,
        }
    }

    fn on_key(&mut self, event: &KeyEvent) {
        let Some(name) = key_name(&event.logical_key) else {
            return;
        };
        match event.state {
            ElementState::Pressed => {
                let command = self.held.key_down(name);
                if let Some(cmd) = command.filter(|_| !event.repeat) {
                    self.session.on_command(cmd);
                    if help_shown_by(cmd, self.session.state().help_visible()) {
                        log_help();
                    }
                }
            }
            ElementState::Released => self.held.key_up(name),
        }
    }

    fn on_mouse(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed = true;
                self.session.on_gesture_press();
            }
            // a release that did not start in the window is ignored
            ElementState::Released if self.pressed => {
                self.pressed = false;
                self.session.on_gesture_release(self.cursor.x, self.cursor.y);
            }
            ElementState::Released => {}
        }
    }

    fn on_focus_lost(&mut self) {
        self.held.clear();
        log::info!("[keys] focus lost, released held keys");
    }

    fn advance(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        let ticks = self.clock.advance(dt);
        let input = self.held.tick_input();
        for _ in 0..ticks {
            self.session.tick(input);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let session = Session::default();
    let bounds = *session.bounds();
    let p = session.state().position();
    log::info!(
        "[session] canvas={}x{} start=({:.0},{:.0})",
        bounds.width,
        bounds.height,
        p.x,
        p.y
    );
    log_help();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("The Scream (native)")
        .with_inner_size(LogicalSize::new(bounds.width, bounds.height))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut app = App::new(session);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Focused(false) => app.on_focus_lost(),
            WindowEvent::KeyboardInput { event, .. } => app.on_key(&event),
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor =
                    window_to_canvas(position, state.window.inner_size(), bounds.size());
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => app.on_mouse(button_state),
            _ => {}
        },
        Event::AboutToWait => {
            app.advance();
            match state.render(&app.session.render()) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_use_dom_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::ArrowLeft)), Some("ArrowLeft"));
        assert_eq!(key_name(&Key::Named(NamedKey::Shift)), Some("Shift"));
        assert_eq!(key_name(&Key::Character("w".into())), Some("w"));
        assert_eq!(key_name(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn only_showing_help_logs_it() {
        assert!(help_shown_by(Command::ToggleHelp, true));
        assert!(!help_shown_by(Command::ToggleHelp, false));
        assert!(!help_shown_by(Command::Reset, true));
        assert!(!help_shown_by(Command::Reset, false));
    }

    #[test]
    fn cursor_scales_with_window() {
        let canvas = Vec2::new(480.0, 600.0);
        let p = window_to_canvas(
            PhysicalPosition::new(480.0, 600.0),
            PhysicalSize::new(960, 1200),
            canvas,
        );
        assert_eq!(p, Vec2::new(240.0, 300.0));
        let zero = window_to_canvas(
            PhysicalPosition::new(5.0, 5.0),
            PhysicalSize::new(0, 0),
            canvas,
        );
        assert_eq!(zero, Vec2::ZERO);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut app = App::new(Session::default());
        app.on_mouse(ElementState::Released);
        assert_eq!(app.session.state().waves().len(), 0);

        app.cursor = Vec2::new(50.0, 60.0);
        app.on_mouse(ElementState::Pressed);
        assert!(app.session.state().is_charging());
        app.on_mouse(ElementState::Released);
        assert!(!app.session.state().is_charging());
        assert_eq!(app.session.state().waves().len(), 1);
    }

    #[test]
    fn focus_loss_releases_movement() {
        let mut app = App::new(Session::default());
        app.held.key_down("ArrowLeft");
        app.held.key_down("Shift");
        app.on_focus_lost();
        let input = app.held.tick_input();
        assert!(input.directions.is_empty());
        assert!(!input.boost);
    }
}
