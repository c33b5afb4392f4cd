use std::{
    collections::HashMap,
    io,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use axum::{
    extract::{self, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Configuration;

/// Paths the frontend router renders a view for.
pub(crate) const FRONTEND_ROUTES: [&str; 2] = [
    "/calibrate/:instrument",
    "/calibrate/:instrument/:placeable",
];

#[derive(Debug, Error)]
pub(crate) enum ServeError {
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: SocketAddr,
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Clone)]
struct AppState {
    index: PathBuf,
}

/// Frontend routes are answered with the entry document, anything else is
/// looked up in `dist_dir`.
pub(crate) fn app(dist_dir: &Path) -> Router {
    let app_state = AppState {
        index: dist_dir.join("index.html"),
    };

    FRONTEND_ROUTES
        .iter()
        .fold(Router::new(), |router, pattern| {
            router.route(pattern, get(entry_document))
        })
        .fallback_service(ServeDir::new(dist_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub(crate) async fn serve_rest_endpoint(config: &Configuration) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServeError::Bind {
            address: config.listen,
            source,
        })?;

    tracing::info!(
        address = %config.listen,
        dist_dir = %config.dist_dir.display(),
        "serving calibration app"
    );

    axum::serve(listener, app(&config.dist_dir))
        .await
        .map_err(ServeError::Serve)
}

async fn entry_document(
    State(state): State<AppState>,
    extract::Path(params): extract::Path<HashMap<String, String>>,
) -> Result<Html<String>, StatusCode> {
    tracing::debug!(?params, "deep link");

    tokio::fs::read_to_string(&state.index)
        .await
        .map(Html)
        .map_err(|error| {
            tracing::error!(%error, index = %state.index.display(), "cannot read entry document");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}
