//! triorbit - a small scene renderer
//!
//! Opens a window, uploads one of three fixed triangle scenes, and redraws
//! it with a time-driven camera orbit until the window is closed or Escape
//! is pressed. All fatal failures are initialization failures; once the
//! loop is running, a frame either draws or is skipped.

use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use triorbit::config::AppConfig;
use triorbit::input::{InputAction, InputMapper};
use triorbit::systems::{RenderError, RenderSystem, WindowSystem};
use triorbit_scene::{builtin, SceneDef};

/// Main application state
struct App {
    config: AppConfig,
    /// Validated scene, consumed when the render system comes up
    scene: SceneDef,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    /// Reference point for elapsed time fed to the camera
    started: Instant,
    /// Set when window or GPU initialization failed; drives the exit code
    init_failed: bool,
}

impl App {
    fn new(config: AppConfig, scene: SceneDef) -> Self {
        Self {
            config,
            scene,
            window: None,
            renderer: None,
            started: Instant::now(),
            init_failed: false,
        }
    }

    fn fail_init(&mut self, event_loop: &ActiveEventLoop, message: &str) {
        log::error!("{}", message);
        eprintln!("{}", message);
        self.init_failed = true;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                self.fail_init(event_loop, &format!("Failed to open window: {}", e));
                return;
            }
        };

        let renderer = match RenderSystem::new(
            window.window().clone(),
            &self.scene,
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                self.fail_init(event_loop, &format!("Failed to initialize GPU: {}", e));
                return;
            }
        };

        log::info!("Rendering scene '{}'", self.scene.name);
        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(InputAction::Exit) = InputMapper::map_keyboard(key, event.state) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let elapsed = self.started.elapsed().as_secs_f32();

                if let Some(renderer) = &mut self.renderer {
                    match renderer.render_frame(elapsed) {
                        Ok(()) => {}
                        Err(RenderError::SurfaceLost) => {
                            let (width, height) = renderer.size();
                            renderer.resize(width, height);
                        }
                        Err(RenderError::OutOfMemory) => {
                            log::error!("GPU out of memory, exiting");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Skipped frame: {}", e);
                        }
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Starting triorbit");

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let scene = match builtin::by_name(&config.scene.name) {
        Some(scene) => scene,
        None => {
            eprintln!(
                "Unknown scene '{}'; available scenes: {}",
                config.scene.name,
                builtin::names().join(", ")
            );
            std::process::exit(-1);
        }
    };

    let errors = scene.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("Scene configuration error: {}", error);
        }
        std::process::exit(-1);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            eprintln!("Failed to create event loop: {}", e);
            std::process::exit(-1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, scene);
    if let Err(e) = event_loop.run_app(&mut app) {
        eprintln!("Event loop error: {}", e);
        std::process::exit(-1);
    }

    if app.init_failed {
        std::process::exit(-1);
    }
}
