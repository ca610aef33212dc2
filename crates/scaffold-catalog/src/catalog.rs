//! The merged extension catalog.

use serde::Serialize;

use crate::model::{BuildEntry, CuratedEntry, Extension};
use crate::normalize::{featured_extensions, from_build, from_curated, CHALLENGES_REPO};

/// Queries shorter than this match everything.
pub const MIN_QUERY_LEN: usize = 3;

/// An extension plus whether it is curated by the maintainers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub extension: Extension,
    pub curated: bool,
}

/// Curated, featured and third-party extensions, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Merge raw records into a catalog.
    ///
    /// Third-party builds that point at a curated repository are dropped, as
    /// are curated SpeedRunEthereum challenges.
    pub fn assemble(curated: Vec<CuratedEntry>, builds: Vec<BuildEntry>) -> Self {
        let curated: Vec<Extension> = curated.into_iter().map(from_curated).collect();

        let third_party: Vec<Extension> = builds
            .into_iter()
            .filter(|build| {
                !curated
                    .iter()
                    .any(|c| c.github.eq_ignore_ascii_case(&build.branch))
            })
            .filter_map(|build| {
                let url = build.branch.clone();
                let ext = from_build(build);
                if ext.is_none() {
                    tracing::debug!(url = %url, "Skipping build without owner/repo");
                }
                ext
            })
            .collect();

        let mut entries: Vec<CatalogEntry> = curated
            .into_iter()
            .filter(|ext| !ext.github.starts_with(CHALLENGES_REPO))
            .map(|extension| CatalogEntry {
                extension,
                curated: true,
            })
            .collect();

        entries.extend(featured_extensions().into_iter().map(|extension| CatalogEntry {
            extension,
            curated: false,
        }));

        entries.extend(third_party.into_iter().map(|extension| CatalogEntry {
            extension,
            curated: false,
        }));

        Self { entries }
    }

    /// Catalog with only the featured extensions.
    pub fn featured_only() -> Self {
        Self::assemble(Vec::new(), Vec::new())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn curated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.curated).count()
    }

    /// Entries whose name or description contains the query, ignoring case.
    ///
    /// A query shorter than [`MIN_QUERY_LEN`] characters returns everything.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return self.entries.iter().collect();
        }

        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.extension.name.to_lowercase().contains(&needle)
                    || e.extension.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
