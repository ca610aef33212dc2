//! Loading catalog records from remote endpoints or local files.

use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::model::{BuildEntry, CuratedEntry};

/// Default location of the curated extension list.
pub const CURATED_URL: &str =
    "https://raw.githubusercontent.com/scaffold-eth/create-eth/refs/heads/main/src/extensions.json";

/// Where a JSON array of records comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from disk
    File(PathBuf),
}

impl Source {
    /// Interpret a configured location: `http://` and `https://` are URLs, anything else a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Url(location.to_string())
        } else {
            Source::File(PathBuf::from(location))
        }
    }

    async fn load<T: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
    ) -> Result<Vec<T>, CatalogError> {
        match self {
            Source::Url(url) => {
                let response = client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await?;
                Ok(serde_json::from_slice(&body)?)
            }
            Source::File(path) => {
                let content = tokio::fs::read(path)
                    .await
                    .map_err(|source| CatalogError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Ok(serde_json::from_slice(&content)?)
            }
        }
    }
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configured catalog sources.
#[derive(Debug, Clone)]
pub struct CatalogSources {
    /// Curated `extensions.json`
    pub curated: Option<Source>,

    /// Third-party builds of type "extension"
    pub builds: Option<Source>,

    /// Timeout for each HTTP request
    pub timeout: Duration,
}

impl Default for CatalogSources {
    fn default() -> Self {
        Self {
            curated: Some(Source::Url(CURATED_URL.to_string())),
            builds: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetch both record lists and merge them.
///
/// A missing source contributes no records.
pub async fn load_catalog(sources: &CatalogSources) -> Result<Catalog, CatalogError> {
    let client = reqwest::Client::builder().timeout(sources.timeout).build()?;

    let curated: Vec<CuratedEntry> = match &sources.curated {
        Some(source) => source.load(&client).await?,
        None => Vec::new(),
    };

    let builds: Vec<BuildEntry> = match &sources.builds {
        Some(source) => source.load(&client).await?,
        None => Vec::new(),
    };

    tracing::debug!(
        curated = curated.len(),
        builds = builds.len(),
        "Loaded catalog records"
    );

    Ok(Catalog::assemble(curated, builds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_locations() {
        assert_eq!(
            Source::parse("https://example.com/x.json"),
            Source::Url("https://example.com/x.json".to_string())
        );
        assert_eq!(
            Source::parse("data/extensions.json"),
            Source::File(PathBuf::from("data/extensions.json"))
        );
    }

    #[tokio::test]
    async fn loads_catalog_from_files() {
        let temp = tempdir().unwrap();
        let curated_path = temp.path().join("extensions.json");
        let builds_path = temp.path().join("builds.json");

        fs::write(
            &curated_path,
            r#"[{"extensionFlagValue":"ponder","repository":"https://github.com/scaffold-eth/ponder-ext","description":"Ponder indexer"}]"#,
        )
        .unwrap();
        fs::write(
            &builds_path,
            r#"[{"name":"Zk","desc":"zk stuff","branch":"https://github.com/bob/zk"}]"#,
        )
        .unwrap();

        let sources = CatalogSources {
            curated: Some(Source::File(curated_path)),
            builds: Some(Source::File(builds_path)),
            ..Default::default()
        };

        let catalog = load_catalog(&sources).await.unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.curated_count(), 1);
        assert_eq!(catalog.search("indexer").len(), 1);
    }

    #[tokio::test]
    async fn missing_sources_give_featured_only() {
        let sources = CatalogSources {
            curated: None,
            builds: None,
            ..Default::default()
        };

        let catalog = load_catalog(&sources).await.unwrap();
        assert_eq!(catalog, Catalog::featured_only());
    }

    #[tokio::test]
    async fn reports_unreadable_files() {
        let sources = CatalogSources {
            curated: Some(Source::File(PathBuf::from("/nonexistent/extensions.json"))),
            builds: None,
            ..Default::default()
        };

        let err = load_catalog(&sources).await.unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[tokio::test]
    async fn reports_malformed_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let sources = CatalogSources {
            curated: Some(Source::File(path)),
            builds: None,
            ..Default::default()
        };

        let err = load_catalog(&sources).await.unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
