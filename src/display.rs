use anyhow::Result;
use glam::IVec2;
use std::time::Instant;

use crate::core::{Canvas, Surface, WindowContext};
use crate::math::Color;
use crate::pattern::{paint_count, RenderConfig};

/// One frame: clear `surface` to `background`, then paint the pattern on `center`
pub fn paint_frame(
    surface: &mut impl Surface,
    config: &RenderConfig,
    background: Color,
    center: IVec2,
) {
    surface.clear(background);
    config.render(surface, center);
}

/// Display combines the pattern configuration with the canvas it paints into
pub struct Display {
    config: RenderConfig,
    background: Color,
    canvas: Canvas,
}

impl Display {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            background: Color::PANEL_GRAY,
            canvas: Canvas::new(0, 0),
        }
    }

    /// Full repaint: size canvas to window → clear → draw pattern → present
    pub fn redraw(&mut self, window: &mut dyn WindowContext) -> Result<()> {
        let dims = window.dimensions();
        if self.canvas.dimensions() != (dims.width, dims.height) {
            log::debug!("Canvas resized to {}x{}", dims.width, dims.height);
            self.canvas = Canvas::new(dims.width, dims.height);
        }

        let start = Instant::now();
        paint_frame(&mut self.canvas, &self.config, self.background, dims.center());
        log::debug!(
            "Painted {} squares in {:?}",
            paint_count(self.config.max_depth),
            start.elapsed()
        );

        window.present(&self.canvas)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The canvas as of the last redraw
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawList, DrawOp, WindowDimensions};

    struct MockWindow {
        dims: WindowDimensions,
        presented: Vec<Canvas>,
    }

    impl MockWindow {
        fn new(width: u32, height: u32) -> Self {
            Self {
                dims: WindowDimensions::new(width, height),
                presented: Vec::new(),
            }
        }
    }

    impl WindowContext for MockWindow {
        fn dimensions(&self) -> WindowDimensions {
            self.dims
        }

        fn present(&mut self, canvas: &Canvas) -> Result<()> {
            self.presented.push(canvas.clone());
            Ok(())
        }

        fn request_redraw(&self) {}
    }

    #[test]
    fn test_redraw_presents_canvas_sized_to_window() {
        let mut window = MockWindow::new(800, 600);
        let mut display = Display::new(RenderConfig::default());

        display.redraw(&mut window).unwrap();

        assert_eq!(window.presented.len(), 1);
        assert_eq!(window.presented[0].dimensions(), (800, 600));
    }

    #[test]
    fn test_redraw_clears_background() {
        let mut window = MockWindow::new(800, 600);
        let mut display = Display::new(RenderConfig::default());

        display.redraw(&mut window).unwrap();

        let canvas = display.canvas();
        assert_eq!(canvas.pixel(0, 0), Some(Color::PANEL_GRAY));
        assert_eq!(canvas.pixel(799, 599), Some(Color::PANEL_GRAY));
        // Root square covers 300..500 x 200..400
        assert_ne!(canvas.pixel(300, 200), Some(Color::PANEL_GRAY));
        assert_eq!(canvas.pixel(299, 200), Some(Color::PANEL_GRAY));
    }

    #[test]
    fn test_redraw_follows_resize() {
        let mut window = MockWindow::new(800, 600);
        let mut display = Display::new(RenderConfig::default());
        display.redraw(&mut window).unwrap();

        window.dims = WindowDimensions::new(400, 300);
        display.redraw(&mut window).unwrap();

        assert_eq!(window.presented[1].dimensions(), (400, 300));
    }

    #[test]
    fn test_zero_depth_shows_only_background() {
        let mut window = MockWindow::new(64, 48);
        let mut display = Display::new(RenderConfig::new(200, 0));

        display.redraw(&mut window).unwrap();

        assert!(display.canvas().pixels().iter().all(|p| *p == Color::PANEL_GRAY));
    }

    #[test]
    fn test_paint_frame_clears_before_painting() {
        let mut list = DrawList::new();
        let config = RenderConfig::new(200, 3);
        paint_frame(&mut list, &config, Color::PANEL_GRAY, IVec2::new(400, 300));

        assert_eq!(list.ops()[0], DrawOp::Clear(Color::PANEL_GRAY));
        assert_eq!(list.len() as u64, 1 + paint_count(3));
        assert_eq!(list.fills().count() as u64, paint_count(3));
    }
}
