//! Site server command.

use std::path::Path;

use anyhow::Result;
use scaffold_server::{SiteServer, SiteServerConfig, SiteState};

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    port: Option<u16>,
    host: Option<String>,
    open: bool,
) -> Result<()> {
    let config = super::load_config(config_path)?;
    let frames = super::responder(&config)?;

    tracing::info!(
        "Frame sequence has {} steps, base URL {}",
        frames.sequence().len(),
        frames.base_url()
    );

    let server_config = SiteServerConfig {
        host: host.unwrap_or_else(|| config.server.host.clone()),
        port: port.unwrap_or(config.server.port),
        public_dir: config.site.public_dir.clone(),
        open,
    };

    if !server_config.public_dir.exists() {
        tracing::warn!(
            "Public directory {} not found; frame images will 404",
            server_config.public_dir.display()
        );
    }

    let state = SiteState::new(frames, config.page_meta());

    SiteServer::new(server_config, state)
        .with_catalog(config.catalog_sources(), config.refresh_interval())
        .start()
        .await?;

    Ok(())
}
