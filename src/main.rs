mod actions;
mod api;
mod app;
mod config;
mod export;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let app_result = match App::new() {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    app_result
}
