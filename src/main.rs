use std::sync::Arc;

use price_poller::services::reporting::print_table;
use price_poller::{AppConfig, BinanceClient, PricePoller, PriceTable};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Load Configuration
    let config = AppConfig::load()?;

    // Setup Logging (RUST_LOG wins over the config file)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting price poller against {}", config.base_url);

    let client = BinanceClient::new(&config);
    let poller = PricePoller::new(Arc::new(client));

    let table = match poller.run().await {
        Ok(table) => table,
        Err(e) => {
            error!("❌ Run aborted: {}", e);
            PriceTable::new()
        }
    };

    print_table(&table)?;
    Ok(())
}
