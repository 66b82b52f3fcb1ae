use axum::body::Bytes;
use axum::extract::Extension;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};

use super::router::RouteTable;
use crate::persistence::snapshot::SnapshotGateway;
use crate::store::memory::EntityStore;

/// The store has a single logical owner: every request takes the lock,
/// runs its domain operation to completion and releases it before the
/// response leaves. No operation suspends mid-mutation.
pub type SharedStore = Arc<Mutex<EntityStore>>;

/// Builds the Axum application. Every path funnels through the catch-all
/// into the core route table, because unmatched-route semantics (400, not
/// 404) belong to the core. CORS, preflight included, is handled here in
/// the transport layer.
pub fn board_app(store: SharedStore, snapshots: Arc<SnapshotGateway>) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    axum::Router::new()
        .route("/", any(handle_board_request))
        .route("/*path", any(handle_board_request))
        .layer(cors)
        .layer(Extension(store))
        .layer(Extension(Arc::new(RouteTable::new())))
        .layer(Extension(snapshots))
}

/// Transport bridge: method + raw path + materialized body in, status +
/// JSON body out. After a mutating request the full store is cloned under
/// the lock and written out fire-and-forget; a failed write is logged and
/// never surfaces to the caller.
pub async fn handle_board_request(
    Extension(store): Extension<SharedStore>,
    Extension(table): Extension<Arc<RouteTable>>,
    Extension(snapshots): Extension<Arc<SnapshotGateway>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let payload = match parse_body(&method, &body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("Rejected malformed request body: {}", err);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let mutating = matches!(method, Method::POST | Method::PUT | Method::DELETE);

    let (outcome, snapshot) = {
        let mut store = store.lock().await;
        let outcome = table.dispatch(&mut store, &method, uri.path(), payload.as_ref());
        let snapshot = mutating.then(|| store.clone());
        (outcome, snapshot)
    };

    if let Some(snapshot) = snapshot {
        tokio::spawn(async move {
            if let Err(err) = snapshots.save(&snapshot) {
                tracing::error!("Failed to write snapshot: {}", err);
            }
        });
    }

    match outcome.body {
        Some(body) => (outcome.status, Json(body)).into_response(),
        None => outcome.status.into_response(),
    }
}

/// GET and DELETE requests carry no payload; for everything else a
/// non-empty body must parse as JSON.
fn parse_body(method: &Method, body: &Bytes) -> Result<Option<Value>, serde_json::Error> {
    if *method == Method::GET || *method == Method::DELETE || body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some)
}
