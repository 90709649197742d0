//! Recursive tiling of nested squares.
//!
//! Each call paints one square centered on its point, then recurses into the
//! four quadrant centers with half the size and one less level of depth. The
//! recursion bottoms out when `depth` reaches zero, so a tree of depth `d`
//! issues `(4^d - 1) / 3` fills.

use glam::IVec2;

use crate::core::Surface;
use crate::math::{depth_color, Rect};

pub const DEFAULT_INITIAL_SIZE: i32 = 200;
pub const DEFAULT_MAX_DEPTH: i32 = 8;

/// Parameters of one full pattern render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Side of the root square
    pub initial_size: i32,
    /// Depth of the root call; also the reference level for colors
    pub max_depth: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RenderConfig {
    pub fn new(initial_size: i32, max_depth: i32) -> Self {
        Self { initial_size, max_depth }
    }

    /// Paint the whole pattern centered on `center`
    pub fn render(&self, surface: &mut impl Surface, center: IVec2) {
        PatternRenderer::new(self.max_depth).render(
            surface,
            center,
            self.initial_size,
            self.max_depth,
        );
    }
}

/// Paints the recursive pattern onto any [`Surface`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRenderer {
    max_depth: i32,
}

impl PatternRenderer {
    pub fn new(max_depth: i32) -> Self {
        Self { max_depth }
    }

    /// Paint a square of side `size` at `center` and recurse `depth - 1` levels.
    ///
    /// Children are visited top-left, top-right, bottom-left, bottom-right, so
    /// later quadrants paint over earlier ones where they overlap. Sizes that
    /// halve down to zero still issue a fill; surfaces ignore empty rectangles.
    pub fn render(&self, surface: &mut impl Surface, center: IVec2, size: i32, depth: i32) {
        if depth <= 0 {
            return;
        }

        let color = depth_color(self.max_depth, depth);
        surface.fill_rect(Rect::centered_square(center, size), color);

        let quarter = size / 4;
        let child_size = size / 2;
        for offset in quadrant_offsets(quarter) {
            // Centers wrap on overflow; surfaces clip whatever lands off-target
            self.render(surface, center.wrapping_add(offset), child_size, depth - 1);
        }
    }
}

/// Offsets to the four child centers, in paint order
fn quadrant_offsets(quarter: i32) -> [IVec2; 4] {
    [
        IVec2::new(-quarter, -quarter),
        IVec2::new(quarter, -quarter),
        IVec2::new(-quarter, quarter),
        IVec2::new(quarter, quarter),
    ]
}

/// Number of fills a full render of the given depth issues
pub fn paint_count(depth: i32) -> u64 {
    if depth <= 0 {
        return 0;
    }
    (4u64.saturating_pow(depth as u32) - 1) / 3
}
