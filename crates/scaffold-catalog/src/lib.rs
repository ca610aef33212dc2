//! Extension catalog for the Scaffold-ETH 2 site.
//!
//! Curated extensions come from the create-eth repository, third-party
//! extensions from the BuidlGuidl builds API. Both are normalized into one
//! [`Catalog`] that can be searched.

pub mod catalog;
pub mod model;
pub mod normalize;
pub mod source;

pub use catalog::{Catalog, CatalogEntry, MIN_QUERY_LEN};
pub use model::{BuildEntry, CuratedEntry, Extension};
pub use normalize::{featured_extensions, from_build, from_curated};
pub use source::{load_catalog, CatalogError, CatalogSources, Source};
