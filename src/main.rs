//! # Storefront
//!
//! Loads configuration, builds the store, and prints the catalog as JSON.

use anyhow::Result;
use tracing::info;

use storefront::application::services::ProductService;
use storefront::config::Settings;
use storefront::startup::Storefront;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    storefront::telemetry::init_tracing();

    info!("Starting storefront...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        environment = %settings.environment,
        default_culture = %settings.language.default_culture,
        cultures = settings.language.cultures.len(),
        "Configuration loaded"
    );

    let store = Storefront::build(settings);
    let session = store.session();

    let catalog = session.products.get_all_products_view_model().await?;
    info!(products = catalog.len(), "Catalog ready");

    println!("{}", serde_json::to_string_pretty(&catalog)?);

    Ok(())
}
