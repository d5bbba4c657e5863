//! # Image Search Backend
//!
//! Web backend for the image search sample. Exposes one `POST /search`
//! endpoint that proxies a vector query to the search service, plus the
//! static routes serving the bundled frontend.

pub mod config;
pub mod routes;

pub use config::BackendConfig;

use std::path::Path;
use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use image_search_repository::{AzdEnvError, VectorSearchProvider};

/// Shared state handed to request handlers.
///
/// Holds the one search provider constructed at startup; handlers are
/// otherwise stateless.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn VectorSearchProvider>,
}

/// Build the application router around an injected search provider.
///
/// `static_dir` is the directory holding the built frontend (`index.html`,
/// `favicon.ico`, and an `assets/` tree).
pub fn create_app(search: Arc<dyn VectorSearchProvider>, static_dir: &Path) -> Router {
    let state = AppState { search };

    Router::new()
        .route("/search", post(routes::search))
        .with_state(state)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
        .layer(TraceLayer::new_for_http())
}

/// Errors that can occur during backend startup.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The azd environment could not be loaded.
    #[error("Environment error: {0}")]
    AzdEnvError(#[from] AzdEnvError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BackendError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
