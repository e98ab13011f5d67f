//! Authentication middleware.
//!
//! Applied to every mutating or sensitive-read route: resolves a
//! [`CallerIdentity`] from the Bearer token and stores it in request
//! extensions, or rejects with 401 before any business logic runs.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use crate::models::CallerIdentity;
use crate::web::auth::extract_bearer_token;
use crate::web::response_types::ApiError;
use crate::web::state::AppState;

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.auth.enabled {
        debug!("authentication disabled - using local identity");
        request.extensions_mut().insert(CallerIdentity::local_admin());
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get("authorization")
        .ok_or(ApiError::Unauthorized)?;

    let auth_str = auth_header.to_str().map_err(|_| ApiError::Unauthorized)?;
    let token = extract_bearer_token(auth_str).map_err(|_| ApiError::Unauthorized)?;

    let identity = state.authenticator.validate_token(token).map_err(|e| {
        warn!(error = %e, "session token rejected");
        ApiError::Unauthorized
    })?;

    debug!(user_id = identity.user_id, "authenticated request");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
