use std::sync::Arc;

use anyhow::Result;
use tracing::info;

mod infrastructure;
mod presentation;
mod server;

use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Arc::new(Settings::from_env()?);

    init_logging(&settings.log_level)?;
    info!(
        backend_url = %settings.backend_url,
        api_url = %settings.api_url,
        static_dir = ?settings.static_dir,
        "starting board proxy"
    );

    let state = AppState::new(settings.clone())?;
    server::run_http(&settings, state).await
}
