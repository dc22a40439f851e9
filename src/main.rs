use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use portfolio::camera::Camera;
use portfolio::cli::Cli;
use portfolio::clock::FrameClock;
use portfolio::config::AppConfig;
use portfolio::contact::{ContactForm, EmailJsMailer, Mailer};
use portfolio::content;
use portfolio::nav::{MovementState, PlayerController};
use portfolio::overlay::{self, Overlay};
use portfolio::renderer::Renderer;
use portfolio::scenes::{build_gallery, spawn_camera, SceneKind, TechSphereScene};

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 800;

struct App {
    cli: Cli,
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    input: MovementState,
    controller: PlayerController,
    clock: FrameClock,
    scene: SceneKind,
    sphere_scene: TechSphereScene,
    overlay: Overlay,
    form: ContactForm,
    mailer: Arc<dyn Mailer>,
    pointer_locked: bool,
}

impl App {
    fn new(cli: Cli, config: AppConfig) -> Self {
        let scene: SceneKind = cli.scene.into();
        let camera = spawn_camera(scene, config.nav.eye_height);
        let controller = PlayerController::new(config.nav, config.gallery.walk_bounds());
        let mailer: Arc<dyn Mailer> = Arc::new(EmailJsMailer::new(config.email.clone()));

        Self {
            cli,
            config,
            window: None,
            renderer: None,
            camera,
            input: MovementState::new(),
            controller,
            clock: FrameClock::new(),
            scene,
            sphere_scene: TechSphereScene::new(content::TECH_ENTRIES),
            overlay: Overlay::new(scene),
            form: ContactForm::new(),
            mailer,
            pointer_locked: false,
        }
    }

    fn upload_scene(&mut self) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match self.scene {
            SceneKind::Gallery => {
                let mesh = build_gallery(&self.config.gallery, content::ACHIEVEMENTS);
                renderer.upload_mesh(&mesh);
            }
            SceneKind::TechSphere => {
                renderer.upload_mesh(&self.sphere_scene.vertices());
            }
        }
    }

    /// Scene teardown/setup: release the keyboard and pointer, zero the
    /// velocity, respawn the camera, swap the mesh.
    fn switch_scene(&mut self, next: SceneKind) {
        log::info!("switching scene to {}", next.label());
        self.release_pointer();
        self.input.clear();
        self.controller.reset();
        self.scene = next;
        self.overlay.scene = next;
        self.camera = spawn_camera(next, self.config.nav.eye_height);
        self.upload_scene();
        self.clock.reset();
    }

    fn grab_pointer(&mut self) {
        let Some(window) = &self.window else { return };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.pointer_locked = true;
            }
            Err(e) => log::warn!("pointer lock unavailable: {}", e),
        }
    }

    fn release_pointer(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        self.pointer_locked = false;
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();

        match self.scene {
            SceneKind::Gallery => {
                self.controller.step(dt, &self.input, &mut self.camera);
            }
            SceneKind::TechSphere => {
                self.sphere_scene.advance(dt);
                if let Some(renderer) = &mut self.renderer {
                    renderer.upload_mesh(&self.sphere_scene.vertices());
                }
            }
        }
        self.form.tick(Instant::now());

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        let uniform = self.camera.to_uniform(renderer.aspect());
        let fps = self.clock.fps();
        let no_ui = self.cli.no_ui;
        let overlay = &mut self.overlay;
        let form = &mut self.form;
        let mailer = &self.mailer;
        let pointer_locked = self.pointer_locked;

        let result = renderer.render(&uniform, window, |ctx| {
            if !no_ui {
                overlay.ui(ctx, fps, pointer_locked, form, mailer);
            }
        });
        if let Err(e) = result {
            log::error!("render error: {}", e);
        }

        let wanted = self.overlay.scene;
        if wanted != self.scene {
            self.switch_scene(wanted);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state.is_pressed();

        if code == KeyCode::Escape && pressed {
            if self.pointer_locked {
                self.release_pointer();
            } else {
                event_loop.exit();
            }
            return;
        }

        // Keyboard navigation only exists inside the gallery.
        if self.scene == SceneKind::Gallery {
            self.input.apply_key(code, pressed);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Portfolio")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.overlay.compact =
            overlay::is_compact(Some(window.inner_size().width as f32 / window.scale_factor() as f32));
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.upload_scene();
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first; while the pointer is locked the
        // overlay is passive and the scene keeps the input.
        if !self.pointer_locked {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                let window = window.clone();
                if renderer.handle_event(&window, &event)
                    && !matches!(event, WindowEvent::RedrawRequested)
                {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(&event, event_loop),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let over_ui = self
                    .renderer
                    .as_ref()
                    .map(|r| r.wants_pointer())
                    .unwrap_or(false);
                if self.scene == SceneKind::Gallery && !self.pointer_locked && !over_ui {
                    self.grab_pointer();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                let scale = self
                    .window
                    .as_ref()
                    .map(|w| w.scale_factor() as f32)
                    .unwrap_or(1.0);
                self.overlay.compact = overlay::is_compact(Some(size.width as f32 / scale));
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused; drop held keys.
                self.input.clear();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.pointer_locked && self.scene == SceneKind::Gallery {
                self.camera.look(dx as f32, dy as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    log::info!("controls: WASD / arrows to walk, mouse to look, Esc to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
