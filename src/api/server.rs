// API server implementation using actix-web

use crate::api::{middleware, routes};
use crate::config::{AppConfig, ServerConfig};
use crate::metafield::RangeMetafieldUpdater;
use crate::shopify::ShopifyClient;
use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use std::sync::Arc;

pub struct ApiServer {
    pub server: ServerConfig,
    pub updater: RangeMetafieldUpdater,
}

impl ApiServer {
    /// Wire the Shopify client and updater from explicit configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ShopifyClient::new(&config.shopify)?;
        tracing::info!(
            endpoint = %client.endpoint(),
            timeout_secs = config.shopify.timeout_secs,
            "Shopify client ready"
        );

        Ok(Self {
            server: config.server.clone(),
            updater: RangeMetafieldUpdater::new(Arc::new(client)),
        })
    }

    /// Create server from environment variables
    pub fn from_env() -> Result<Self> {
        let config = AppConfig::from_env()?;
        Self::new(&config)
    }

    /// Start the HTTP server
    pub async fn run(self) -> Result<()> {
        let bind_addr = self.server.bind_addr();

        tracing::info!(
            host = %self.server.host,
            port = %self.server.port,
            "Starting metafield relay"
        );

        let updater = web::Data::new(self.updater);

        let server = HttpServer::new(move || {
            let (logger, compress) = middleware::setup_middleware();
            let cors = middleware::setup_cors();

            App::new()
                .app_data(updater.clone())
                .wrap(logger)
                .wrap(compress)
                .wrap(cors)
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

        tracing::info!("Server running at http://localhost:{}", self.server.port);

        server.run().await.context("HTTP server error")?;

        Ok(())
    }
}
