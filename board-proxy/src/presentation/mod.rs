use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::infrastructure::settings::Settings;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    pub(crate) http: reqwest::Client,
}

impl AppState {
    pub(crate) fn new(settings: Arc<Settings>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(settings.proxy_request_timeout_secs))
            .build()
            .context("failed to build backend http client")?;

        Ok(Self { settings, http })
    }
}
