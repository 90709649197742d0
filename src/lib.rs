pub mod app;
pub mod cli;
pub mod core;
pub mod display;
pub mod math;
pub mod pattern;

pub use pattern::{paint_count, PatternRenderer, RenderConfig};
