// HTTP entry point for the product metafield relay

use anyhow::Result;
use metafield_relay::api::ApiServer;
use metafield_relay::util::env as env_util;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load dotenv/env before the filter is read so RUST_LOG from .env applies
    env_util::init_env();

    metafield_relay::tracing::init_tracing(metafield_relay::tracing::DEFAULT_FILTER)?;

    tracing::info!("Initializing metafield relay");

    let server = ApiServer::from_env()?;
    server.run().await?;

    Ok(())
}
