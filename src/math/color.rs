/// RGBA color, laid out exactly like one pixel of an `Rgba8Unorm` texture
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Default panel background of a classic desktop toolkit
    pub const PANEL_GRAY: Color = Color::rgb(238, 238, 238);

    /// Opaque color from three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Color of a square painted `max_depth - depth` levels below the root.
///
/// The first channel steps by 30 per level and wraps at 255, the second
/// channel is its complement and the third is fixed at 150.
pub fn depth_color(max_depth: i32, depth: i32) -> Color {
    let level = i64::from(max_depth) - i64::from(depth);
    // rem_euclid keeps the channel in range even if depth overshoots max_depth
    let component = (level * 30).rem_euclid(255) as u8;
    Color::rgb(component, 255 - component, 150)
}
