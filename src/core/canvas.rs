use super::surface::Surface;
use crate::math::{Color, Rect};

/// Canvas state - RGBA pixel buffer
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Row-major RGBA pixels
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new canvas with dimensions, fully transparent
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Color::TRANSPARENT; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Pixel at (x, y), or None outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel buffer as raw RGBA8 bytes, ready for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.clip(self.width, self.height) else {
            return;
        };

        let stride = self.width as usize;
        let x0 = clipped.x as usize;
        let x1 = x0 + clipped.width as usize;
        for y in clipped.y..clipped.y + clipped.height {
            let row = y as usize * stride;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
