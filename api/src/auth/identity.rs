//! Identity middleware
//!
//! The auth gateway in front of the API forwards the signed-in user's display
//! name in a header. Requests without it are served as guests.

use axum::{body::Body, http::Request, middleware::Next, response::Response};

use crate::domain::entities::Identity;

/// Header carrying the display name of the signed-in user
pub const USER_HEADER: &str = "x-eclips-user";

/// Extract the display name from the user header
fn extract_user(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(USER_HEADER)
        .and_then(|h| h.to_str().ok())
}

/// Identity middleware
///
/// Resolves the caller once and injects an `Identity` into request
/// extensions. Never rejects a request.
pub async fn identity_middleware(mut request: Request<Body>, next: Next) -> Response {
    let identity = Identity::from_name(extract_user(&request));

    if let Identity::Authenticated { name } = &identity {
        tracing::debug!(user = %name, "Resolved identity");
    }

    request.extensions_mut().insert(identity);
    next.run(request).await
}
