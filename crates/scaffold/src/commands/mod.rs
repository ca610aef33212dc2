//! CLI subcommands.

pub mod extensions;
pub mod frame;
pub mod init;
pub mod serve;

use std::path::Path;

use anyhow::{Context, Result};
use scaffold_frames::FrameResponder;
use scaffold_server::SiteConfig;

/// Load site.toml, falling back to defaults when it is missing.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    SiteConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Build the frame responder from configuration.
///
/// The base URL is resolved here, once, from the config and environment.
pub fn responder(config: &SiteConfig) -> Result<FrameResponder> {
    let sequence = config.frame_sequence()?;
    let responder = FrameResponder::new(config.base_url(), sequence)
        .context("Failed to set up frame templates")?
        .with_title(&config.site.title);
    Ok(responder)
}
