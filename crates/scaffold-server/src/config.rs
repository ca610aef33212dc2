//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use scaffold_catalog::{CatalogSources, Source};
use scaffold_frames::{
    BaseUrl, FrameSequence, LinkButton, PageMeta, SequenceError, StepSpec, DEFAULT_DESCRIPTION,
    DEFAULT_TITLE,
};

/// Environment variable holding the deployment host (set by Vercel).
pub const HOST_ENV: &str = "VERCEL_URL";

/// Client-exposed copy of the deployment host, read when [`HOST_ENV`] is unset.
pub const PUBLIC_HOST_ENV: &str = "NEXT_PUBLIC_VERCEL_URL";

/// Default configuration file name.
pub const CONFIG_FILE: &str = "site.toml";

/// Configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub frames: FramesSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Explicit public origin; wins over the deployment host
    pub base_url: Option<String>,
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    /// URL or path of the curated extensions.json; empty disables it
    #[serde(default = "default_curated")]
    pub curated: Option<String>,
    /// URL or path of the third-party builds list
    pub builds: Option<String>,
    /// Seconds between catalog refreshes; 0 disables refreshing
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct FramesSection {
    /// Replaces the built-in sequence when non-empty
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

/// One configured frame step. A step with links is terminal.
#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub image: String,
    pub label: Option<String>,
    #[serde(default)]
    pub links: Vec<LinkButton>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}
fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_curated() -> Option<String> {
    Some(scaffold_catalog::source::CURATED_URL.to_string())
}
fn default_refresh_secs() -> u64 {
    21600
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            base_url: None,
            public_dir: default_public_dir(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            curated: default_curated(),
            builds: None,
            refresh_secs: default_refresh_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid frame sequence: {0}")]
    Sequence(#[from] SequenceError),
}

impl SiteConfig {
    /// Load configuration from `path` if it exists.
    ///
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Public origin, from the config file or the deployment environment.
    pub fn base_url(&self) -> BaseUrl {
        let host = deployment_host(|name| std::env::var(name).ok());
        self.base_url_with_host(host.as_deref())
    }

    /// Public origin given an explicit deployment host.
    pub fn base_url_with_host(&self, host: Option<&str>) -> BaseUrl {
        match self.site.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            Some(url) => BaseUrl::new(url.trim()),
            None => BaseUrl::from_host(host),
        }
    }

    /// The configured frame sequence, or the built-in one.
    pub fn frame_sequence(&self) -> Result<FrameSequence, ConfigError> {
        if self.frames.steps.is_empty() {
            return Ok(FrameSequence::scaffold());
        }

        let steps = self
            .frames
            .steps
            .iter()
            .map(|step| {
                if step.links.is_empty() {
                    StepSpec::forward(
                        step.image.clone(),
                        step.label
                            .clone()
                            .unwrap_or_else(|| scaffold_frames::sequence::NEXT_LABEL.to_string()),
                    )
                } else {
                    StepSpec::terminal(step.image.clone(), step.links.clone())
                }
            })
            .collect();

        Ok(FrameSequence::new(steps)?)
    }

    /// Landing page metadata.
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            ..PageMeta::default()
        }
    }

    /// Catalog sources derived from the `[catalog]` section.
    pub fn catalog_sources(&self) -> CatalogSources {
        CatalogSources {
            curated: location(self.catalog.curated.as_deref()),
            builds: location(self.catalog.builds.as_deref()),
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        }
    }

    /// Interval between catalog refreshes, if enabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.catalog.refresh_secs > 0).then(|| Duration::from_secs(self.catalog.refresh_secs))
    }
}

/// Deployment host from [`HOST_ENV`], falling back to [`PUBLIC_HOST_ENV`].
///
/// Empty values count as unset.
pub fn deployment_host(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    [HOST_ENV, PUBLIC_HOST_ENV]
        .into_iter()
        .filter_map(lookup)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// An empty location disables the source.
fn location(value: Option<&str>) -> Option<Source> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(Source::parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_file_uses_defaults() {
        let config = SiteConfig::parse("").unwrap();

        assert_eq!(config.site.title, DEFAULT_TITLE);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.site.public_dir, PathBuf::from("public"));
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(21600)));
        assert_eq!(
            config.frame_sequence().unwrap(),
            FrameSequence::scaffold()
        );
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let config = SiteConfig::load(&temp.path().join("site.toml")).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[server\nport = ").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn base_url_precedence() {
        let config = SiteConfig::default();
        assert_eq!(
            config.base_url_with_host(Some("se2.vercel.app")).as_str(),
            "https://se2.vercel.app"
        );
        assert_eq!(config.base_url_with_host(None).as_str(), BaseUrl::LOCAL);

        let config = SiteConfig::parse("[site]\nbase_url = \"https://scaffoldeth.io/\"").unwrap();
        assert_eq!(
            config.base_url_with_host(Some("se2.vercel.app")).as_str(),
            "https://scaffoldeth.io"
        );
    }

    #[test]
    fn deployment_host_falls_back_to_public_variable() {
        let only_public =
            |name: &str| (name == PUBLIC_HOST_ENV).then(|| "se2.vercel.app".to_string());
        assert_eq!(deployment_host(only_public).as_deref(), Some("se2.vercel.app"));

        let both = |name: &str| match name {
            HOST_ENV => Some("private.vercel.app".to_string()),
            _ => Some("public.vercel.app".to_string()),
        };
        assert_eq!(deployment_host(both).as_deref(), Some("private.vercel.app"));

        let empty_private = |name: &str| match name {
            HOST_ENV => Some(" ".to_string()),
            _ => Some("public.vercel.app".to_string()),
        };
        assert_eq!(deployment_host(empty_private).as_deref(), Some("public.vercel.app"));

        assert_eq!(deployment_host(|_| None), None);
    }

    #[test]
    fn configured_frame_sequence() {
        let config = SiteConfig::parse(
            r#"
[[frames.steps]]
image = "frames/intro.png"

[[frames.steps]]
image = "frames/outro.png"
links = [{ label = "Docs", target = "https://docs.scaffoldeth.io/" }]
"#,
        )
        .unwrap();

        let seq = config.frame_sequence().unwrap();

        assert_eq!(seq.len(), 2);
        assert!(!seq.steps()[0].is_terminal());
        assert!(seq.steps()[1].is_terminal());
    }

    #[test]
    fn rejects_sequence_without_terminal() {
        let config = SiteConfig::parse("[[frames.steps]]\nimage = \"a.png\"").unwrap();
        assert!(matches!(
            config.frame_sequence(),
            Err(ConfigError::Sequence(SequenceError::MissingTerminal))
        ));
    }

    #[test]
    fn catalog_sources_from_config() {
        let config = SiteConfig::parse(
            "[catalog]\nbuilds = \"data/builds.json\"\nrefresh_secs = 0",
        )
        .unwrap();
        let sources = config.catalog_sources();

        assert!(matches!(sources.curated, Some(Source::Url(_))));
        assert_eq!(
            sources.builds,
            Some(Source::File(PathBuf::from("data/builds.json")))
        );
        assert_eq!(config.refresh_interval(), None);
    }
}
