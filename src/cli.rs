// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::pattern::{RenderConfig, DEFAULT_INITIAL_SIZE, DEFAULT_MAX_DEPTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "recursive-tiles")]
#[command(about = "Recursive square tiling drawn in a window", long_about = None)]
pub struct Cli {
    /// Recursion depth of the root square
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = clap::value_parser!(i32).range(0..=12))]
    pub depth: i32,

    /// Side length of the root square
    #[arg(long, default_value_t = DEFAULT_INITIAL_SIZE, value_parser = clap::value_parser!(i32).range(1..=4096))]
    pub size: i32,
}

impl From<&Cli> for RenderConfig {
    fn from(cli: &Cli) -> Self {
        RenderConfig::new(cli.size, cli.depth)
    }
}
