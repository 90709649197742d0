use anyhow::{Context, Result};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::core::{Canvas, SurfaceRenderer, WindowContext, WindowDimensions};
use crate::display::Display;
use crate::pattern::RenderConfig;

pub const WINDOW_TITLE: &str = "Recursive Fractal Art";
pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// winit window paired with the renderer that presents onto it
struct HostWindow {
    window: Arc<Window>,
    renderer: SurfaceRenderer,
}

impl HostWindow {
    fn create(event_loop: &ActiveEventLoop) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );
        let renderer = SurfaceRenderer::new(window.clone())?;

        Ok(Self { window, renderer })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.renderer.resize(size.width, size.height);
    }
}

impl WindowContext for HostWindow {
    fn dimensions(&self) -> WindowDimensions {
        let logical: LogicalSize<u32> = self
            .window
            .inner_size()
            .to_logical(self.window.scale_factor());
        WindowDimensions::new(logical.width, logical.height)
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.renderer.present(canvas)
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Event loop handler: repaints the pattern whenever the host asks for it
pub struct App {
    display: Display,
    window: Option<HostWindow>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            display: Display::new(config),
            window: None,
            error: None,
        }
    }

    /// Open the window and block until it is closed
    ///
    /// Startup failures inside the event loop end the loop and are returned here.
    pub fn run(config: RenderConfig) -> Result<()> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let mut app = App::new(config);
        event_loop.run_app(&mut app).context("Event loop terminated abnormally")?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match HostWindow::create(event_loop) {
            Ok(window) => {
                log::info!(
                    "Window opened: depth {}, size {}",
                    self.display.config().max_depth,
                    self.display.config().initial_size
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(window) = &mut self.window {
                    window.resize(size);
                    window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(window) = &mut self.window else {
                    return;
                };
                if let Err(e) = self.display.redraw(window) {
                    self.fail(event_loop, e.context("Failed to present frame"));
                }
            }
            _ => {}
        }
    }
}
