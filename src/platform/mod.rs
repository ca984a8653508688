//! Platform layer
//!
//! Owns the winit event loop and the window, feeds keyboard state into the
//! simulation and hands the result to the renderer. Everything runs on the
//! main thread: one step and one render per frame.
//!
//! Frame boundary is `RedrawRequested`. Redraws are requested from
//! `about_to_wait` once the frame clock says a frame is due, and the loop
//! sleeps with `ControlFlow::WaitUntil` until then.

mod clock;
mod input;

pub use clock::FrameClock;
pub use input::{Keyboard, bindings};

use std::sync::Arc;
use std::time::Instant;

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::PlatformError;
use crate::renderer::{Overlay, RenderState, build_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

pub const WINDOW_TITLE: &str = "Pong";

/// Open the window and run the game until it is closed
///
/// Returns `Ok(())` on a normal close (window close button or Escape).
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .map_err(PlatformError::EventLoopExecution)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => {
            info!(
                "Window closed, final score {}-{}",
                app.state.left_score, app.state.right_score
            );
            Ok(())
        }
    }
}

/// Application handler holding all per-process state
struct App {
    settings: Settings,
    state: GameState,
    keyboard: Keyboard,
    clock: FrameClock,
    /// Created lazily in `resumed()`
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    /// Fatal error raised inside a callback, reported after the loop exits
    error: Option<PlatformError>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let clock = FrameClock::new(settings.frame_duration());
        Self {
            settings,
            state: GameState::new(),
            keyboard: Keyboard::new(),
            clock,
            window: None,
            render_state: None,
            error: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.settings))?;
        info!(
            "Window {}x{} ready (scale factor {})",
            render_state.size.0,
            render_state.size.1,
            window.scale_factor()
        );

        self.render_state = Some(render_state);
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: PlatformError) {
        self.error = Some(error);
        event_loop.exit();
    }

    /// One step plus one render
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick(Instant::now());
        let input = self.keyboard.tick_input();
        self.keyboard.end_frame();

        tick(&mut self.state, &input, dt);
        log_events(&self.state.events);

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let overlay = Overlay {
            fps: self.settings.show_fps.then(|| self.clock.fps()),
        };
        let vertices = build_frame(&self.state, overlay);

        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        let PhysicalKey::Code(key) = event.physical_key else {
            return;
        };
        if key == bindings::QUIT && event.state.is_pressed() {
            info!("Escape pressed, exiting");
            event_loop.exit();
            return;
        }
        self.keyboard.handle_key(key, event.state, event.repeat);
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match *event {
            GameEvent::Scored { side, left, right } => {
                info!("Point to {} player, {}-{}", side.as_str(), left, right);
            }
            GameEvent::PauseToggled { paused } => {
                debug!("{}", if paused { "Paused" } else { "Resumed" });
            }
            GameEvent::PaddleHit { side, hit, speed } => {
                debug!("{} paddle hit at {:.2}, speed {:.1}", side.as_str(), hit, speed);
            }
            GameEvent::WallBounce => trace!("Wall bounce"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => self.keyboard.release_all(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let now = Instant::now();
        if self.clock.is_due(now) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_frame_at(now)));
    }
}
