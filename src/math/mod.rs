mod color;
mod rect;

pub use color::{depth_color, Color};
pub use rect::Rect;
