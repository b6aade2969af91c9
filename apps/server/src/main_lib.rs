use std::sync::Arc;

use crate::config::{Config, LogFormat};
use quotes_core::quotes::{QuoteService, QuoteServiceTrait};
use quotes_storage::QuoteStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    pub authorization_key: Option<String>,
}

/// Installs the global subscriber. `RUST_LOG` overrides `LOG_LVL` when set.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(config.log_level.into()));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = QuoteStore::connect(&config.db_uri).await?;
    let quote_service = Arc::new(QuoteService::new(Arc::new(store)));

    if config.authorization_key.is_none() {
        tracing::warn!("AUTHORIZATION_KEY is not set, POST and PUT /quotes will be rejected");
    }

    Ok(Arc::new(AppState {
        quote_service,
        authorization_key: config.authorization_key.clone(),
    }))
}
