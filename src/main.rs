use anyhow::Result;
use clap::Parser;

use recursive_tiles::app::App;
use recursive_tiles::cli::Cli;
use recursive_tiles::pattern::RenderConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RenderConfig::from(&cli);
    log::info!("Starting with {:?}", config);

    App::run(config)
}
