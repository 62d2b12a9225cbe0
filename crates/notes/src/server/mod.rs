//! # HTTP Layer
//!
//! Routes, shared state and middleware. Handlers live in [`handlers`], the
//! error-to-status mapping in [`error`].
//!
//! | Method | Path | Success | Errors |
//! |--------|------|---------|--------|
//! | `GET` | `/` | 200 health | |
//! | `GET` | `/info` | 200 metadata | |
//! | `POST` | `/notes` | 201 note | 422 |
//! | `GET` | `/notes` | 200 page | 400, 422 |
//! | `GET` | `/notes/search?q=` | 200 notes | 400 |
//! | `GET` | `/notes/{id}` | 200 note | 404 |
//! | `PUT` | `/notes/{id}` | 200 note | 404, 422 |
//! | `DELETE` | `/notes/{id}` | 204 | 404 |
//!
//! The collection routes also answer with a trailing slash (`/notes/`).

pub mod error;
pub mod handlers;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use notesapp::config::NotesConfig;
use notesapp::store::fs::FileStore;
use notesapp::store::memory::InMemoryStore;
use notesapp::store::DataStore;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DataStore>,
    pub config: Arc<NotesConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>, config: NotesConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Pick the store implementation from configuration.
pub fn open_store(config: &NotesConfig) -> Result<Arc<dyn DataStore>> {
    match &config.data_file {
        Some(path) => {
            let store = FileStore::open_path(path)
                .with_context(|| format!("failed to open data file {}", path.display()))?
                .with_max_per_page(config.max_per_page);
            Ok(Arc::new(store))
        }
        None => {
            info!("no data_file configured; notes are kept in memory only");
            Ok(Arc::new(
                InMemoryStore::new().with_max_per_page(config.max_per_page),
            ))
        }
    }
}

fn cors_layer(config: &NotesConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(handlers::health))
        .route("/info", get(handlers::info))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/search", get(handlers::search_notes))
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .put(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: NotesConfig) -> Result<()> {
    let store = open_store(&config)?;
    let addr = config.bind_addr();
    let app = router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
