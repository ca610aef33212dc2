//! Site server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use scaffold_catalog::{load_catalog, Catalog, CatalogEntry, CatalogSources};
use scaffold_frames::{FrameResponder, PageMeta, FRAME_ROUTE};

use crate::error::ApiError;

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory with static assets (frame images, favicon)
    pub public_dir: PathBuf,

    /// Open browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error on {0}: {1}")]
    Serve(SocketAddr, String),
}

/// State shared by all handlers.
///
/// Everything but the catalog is fixed at startup.
pub struct SiteState {
    pub frames: FrameResponder,
    pub page: PageMeta,
    pub catalog: RwLock<Catalog>,
}

impl SiteState {
    pub fn new(frames: FrameResponder, page: PageMeta) -> Self {
        Self {
            frames,
            page,
            catalog: RwLock::new(Catalog::featured_only()),
        }
    }
}

/// Query parameters of the extensions route.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Body of `GET /api/extensions`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtensionsResponse<T = CatalogEntry> {
    pub total: usize,
    pub extensions: Vec<T>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the site router.
pub fn build_router(state: Arc<SiteState>, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route(FRAME_ROUTE, get(frame_handler).post(frame_handler))
        .route("/api/extensions", get(extensions_handler))
        .route("/api/health", get(health_handler))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Site server.
pub struct SiteServer {
    config: SiteServerConfig,
    state: Arc<SiteState>,
    sources: Option<CatalogSources>,
    refresh: Option<Duration>,
}

impl SiteServer {
    /// Create a new site server.
    pub fn new(config: SiteServerConfig, state: SiteState) -> Self {
        Self {
            config,
            state: Arc::new(state),
            sources: None,
            refresh: None,
        }
    }

    /// Load the extension catalog from `sources`, refreshing every `refresh` if set.
    pub fn with_catalog(mut self, sources: CatalogSources, refresh: Option<Duration>) -> Self {
        self.sources = Some(sources);
        self.refresh = refresh;
        self
    }

    /// Start the server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        if let Some(sources) = self.sources.clone() {
            let state = Arc::clone(&self.state);
            let refresh = self.refresh;
            tokio::spawn(async move {
                match refresh {
                    Some(period) => {
                        let mut interval = tokio::time::interval(period);
                        loop {
                            interval.tick().await;
                            refresh_catalog(&state, &sources).await;
                        }
                    }
                    None => refresh_catalog(&state, &sources).await,
                }
            });
        }

        let app = build_router(Arc::clone(&self.state), &self.config.public_dir);

        tracing::info!(
            "Serving {} at http://{}",
            self.state.frames.base_url(),
            addr
        );

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        // Open browser if configured
        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Serve(addr, e.to_string()))?;

        Ok(())
    }
}

/// Reload the catalog. A failed load keeps the previous catalog.
pub async fn refresh_catalog(state: &SiteState, sources: &CatalogSources) {
    match load_catalog(sources).await {
        Ok(catalog) => {
            tracing::info!(
                extensions = catalog.len(),
                curated = catalog.curated_count(),
                "Extension catalog loaded"
            );
            *state.catalog.write().await = catalog;
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching extension catalog");
        }
    }
}

/// Handler for the frame sequence. GET and POST behave the same; the body is ignored.
///
/// Query pairs are taken as a list so a repeated `id` never rejects the request.
async fn frame_handler(
    State(state): State<Arc<SiteState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, ApiError> {
    let html = state.frames.respond(first_param(&params, "id"))?;
    Ok(Html(html))
}

/// First value of a query parameter.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Handler for the landing page.
async fn index_handler(State(state): State<Arc<SiteState>>) -> Result<Html<String>, ApiError> {
    let html = state
        .page
        .render(state.frames.templates(), state.frames.base_url())?;
    Ok(Html(html))
}

/// Handler for the extension list.
async fn extensions_handler(
    State(state): State<Arc<SiteState>>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    let extensions: Vec<CatalogEntry> = catalog.search(&query.q).into_iter().cloned().collect();

    Json(ExtensionsResponse {
        total: extensions.len(),
        extensions,
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
