//! HTTP server for the Scaffold-ETH 2 site.
//!
//! Serves the landing page head, the frame sequence, the extension catalog
//! and static assets.

pub mod config;
pub mod error;
pub mod server;

pub use config::{deployment_host, ConfigError, SiteConfig, CONFIG_FILE, HOST_ENV, PUBLIC_HOST_ENV};
pub use error::{ApiError, ErrorResponse};
pub use server::{build_router, SiteServer, SiteServerConfig, SiteState, ServerError};
