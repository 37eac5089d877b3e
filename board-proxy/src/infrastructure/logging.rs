use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// HTTP-стек (hyper, reqwest) логирует только предупреждения,
/// чтобы на `debug` была видна пересылка запросов, а не каждый сокет.
fn default_directives(level: &str) -> String {
    format!("{level},hyper=warn,hyper_util=warn,reqwest=warn")
}

/// `RUST_LOG` имеет приоритет; иначе используется `LOG_LEVEL` из настроек.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(level))
            .map_err(|e| anyhow!("invalid LOG_LEVEL {level:?}: {e}"))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init proxy logging: {e}"))?;

    Ok(())
}
