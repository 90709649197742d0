use anyhow::Result;
use glam::IVec2;

use super::canvas::Canvas;

/// Window dimensions in logical units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Center point, using truncating division
    pub fn center(&self) -> IVec2 {
        IVec2::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

/// Window abstraction - knows its size and can show a finished canvas
pub trait WindowContext {
    /// Drawable area in logical units
    fn dimensions(&self) -> WindowDimensions;

    /// Show the canvas on screen
    fn present(&mut self, canvas: &Canvas) -> Result<()>;

    /// Ask the host to deliver another repaint request
    fn request_redraw(&self);
}
