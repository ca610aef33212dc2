//! Write a default configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let root = config_path.parent().unwrap_or(Path::new("."));
    let frames_dir = root.join("public").join("frames");
    if !frames_dir.exists() {
        fs::create_dir_all(&frames_dir).context("Failed to create public/frames directory")?;
        tracing::info!(
            "Created {} (add frame-1.png .. frame-5.png and buidlguidl.jpg)",
            frames_dir.display()
        );
    }

    tracing::info!("Run 'scaffold serve' to start the server.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# Scaffold site configuration

[site]
title = "Scaffold-ETH 2 - Open source toolkit to build dApps on Ethereum"

# Public origin. When unset, https://$VERCEL_URL (or $NEXT_PUBLIC_VERCEL_URL)
# is used, or http://localhost:3000 outside of a deployment.
# base_url = "https://scaffoldeth.io"

# Static assets, including frame images under frames/
public_dir = "public"

[server]
host = "127.0.0.1"
port = 3000

[catalog]
# Curated extensions (URL or local path)
curated = "https://raw.githubusercontent.com/scaffold-eth/create-eth/refs/heads/main/src/extensions.json"

# Third-party extension builds (URL or local path)
# builds = "https://buidlguidl-v3.ew.r.appspot.com/builds?type=extension"

# Seconds between catalog refreshes (0 disables)
refresh_secs = 21600

# Override the frame sequence. The last step must carry links.
# [[frames.steps]]
# image = "frames/frame-1.png"
# label = "Next →"
#
# [[frames.steps]]
# image = "frames/buidlguidl.jpg"
# links = [{ label = "📃 Docs", target = "https://docs.scaffoldeth.io/" }]
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_server::SiteConfig;

    #[test]
    fn default_config_parses() {
        let config = SiteConfig::parse(DEFAULT_CONFIG).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.refresh_secs, 21600);
        assert!(config.frames.steps.is_empty());
        assert_eq!(config.frame_sequence().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn writes_config_and_frames_dir() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");

        run(&path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
        assert!(temp.path().join("public/frames").is_dir());
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "# mine").unwrap();

        run(&path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");
    }
}
