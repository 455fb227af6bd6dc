mod app;
mod color;
mod config;
mod grid;
mod inject;
mod input;
mod physics;
mod redraw;
mod render;
mod sim;

use anyhow::Result;
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stderr only; redirect it (2>sand.log) to keep the screen clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let settings = config::Settings::from(config::Cli::parse());
    app::run(settings).await
}
