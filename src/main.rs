use dns_dynu::config::Config;
use dns_dynu::{DNSProvider, DynuProvider};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().inspect_err(|e| error!("{}", e))?;
    let provider = DynuProvider::new(config.provider_config())?;

    let records = provider.get_records(&config.zone).await?;
    info!("{} records in {}", records.len(), config.zone);
    for record in records {
        println!(
            "{}\t{}\t{}\t{}",
            record.name,
            record.ttl.as_secs(),
            record.record_type,
            record.value
        );
    }

    Ok(())
}
