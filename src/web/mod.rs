//! Web API: axum router, authentication, handlers and response envelope.

pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod state;

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::web::middleware::require_auth;
use crate::web::state::AppState;

/// Build the API router.
///
/// Every route except `/health` requires a resolved caller identity.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/articles/{id}/publish", patch(handlers::articles::transition_status))
        .route("/articles/{id}/duplicate", post(handlers::articles::duplicate))
        .route("/{collection}/reorder", put(handlers::reorder::reorder))
        .route("/media/{id}", delete(handlers::media::delete_media))
        .route("/analytics", get(handlers::analytics::snapshot))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(protected)
        .with_state(state)
}
