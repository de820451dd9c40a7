//! Caller identity. Sessions are issued by the upstream gateway, which forwards
//! the authenticated user's id in `x-user-id`; this service only checks that
//! the header is present and well-formed.

use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use uuid::Uuid;

use crate::errors::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated owner of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

/// Extracts the caller id from request headers.
pub fn user_from_headers(headers: &HeaderMap) -> Result<CurrentUser, AppError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .map(CurrentUser)
        .ok_or(AppError::Unauthorized)
}

/// Middleware guarding every `/api/v1` route: rejects with 401 when no valid
/// identity is present, otherwise stores `CurrentUser` in request extensions.
pub async fn authenticate(mut request: Request, next: Next) -> Result<Response, AppError> {
    match user_from_headers(request.headers()) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!("identity missing, request denied: {}", request.uri().path());
            Err(e)
        }
    }
}
