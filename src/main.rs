mod actions;
mod app;
mod config;
mod editor;
mod error;
mod export;
mod format;
mod logging;
mod notify;
mod request;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(config.logging.level.as_deref(), &config.log_file())?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "debate-assistant-tui starting");

    let app = App::new(config)?;

    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();

    if let Err(ref err) = result {
        tracing::error!(error = %err, "Exited with error");
    }
    result
}
