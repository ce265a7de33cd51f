use anyhow::Context;

use rna_config::RnaConfig;

/// Load layered configuration, `.env` included.
pub fn load_config() -> anyhow::Result<RnaConfig> {
    let config = RnaConfig::load_with_dotenv().context("failed to load configuration")?;

    if !config.usda.is_configured() {
        tracing::debug!("USDA API key not configured; lookups will fail until RNA_USDA__API_KEY is set");
    }

    Ok(config)
}
