use glam::IVec2;

/// Axis-aligned integer rectangle: top-left corner plus extent
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of side `size` centered on `center`, using truncating division
    ///
    /// The corner wraps on overflow instead of panicking.
    pub fn centered_square(center: IVec2, size: i32) -> Self {
        let half = size / 2;
        Self::new(center.x.wrapping_sub(half), center.y.wrapping_sub(half), size, size)
    }

    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// True for zero or negative extents
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Intersection with the `[0, width) x [0, height)` pixel grid
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        if self.is_empty() {
            return None;
        }

        let bound_w = i64::from(width);
        let bound_h = i64::from(height);
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(bound_w);
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(bound_h);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        // Bounded by the canvas grid, whose extents fit in i32
        Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as i32, (y1 - y0) as i32))
    }
}
