use crate::math::{Color, Rect};

/// Drawing target that can fill axis-aligned rectangles
///
/// Implementations clip silently: rectangles that fall partly or wholly
/// outside the target, or that have zero or negative extents, are not errors.
pub trait Surface {
    /// Fill `rect` with `color`, painting over whatever is already there
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill the entire target with `color`
    fn clear(&mut self, color: Color);
}

/// 2D drawing operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill entire target with color
    Clear(Color),

    /// Fill rectangle with color
    Rect { rect: Rect, color: Color },
}

/// Surface that records every operation instead of rasterizing it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Rectangle fills only, in the order they were issued
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { rect, color } => Some((*rect, *color)),
            DrawOp::Clear(_) => None,
        })
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Rect { rect, color });
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }
}
