mod canvas;
mod gpu_context;
mod surface;
mod surface_renderer;
mod window;

pub use canvas::Canvas;
pub use gpu_context::GpuContext;
pub use surface::{DrawList, DrawOp, Surface};
pub use surface_renderer::SurfaceRenderer;
pub use window::{WindowContext, WindowDimensions};
