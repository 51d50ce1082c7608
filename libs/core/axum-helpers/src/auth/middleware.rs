use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use uuid::Uuid;

/// The authenticated identity attached to a request after token
/// verification succeeds. Read-only; resolving it grants no access to the
/// underlying user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: Uuid,
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// JWT authentication middleware.
///
/// Resolves the request's identity or rejects it: extracts the bearer
/// token, verifies signature and expiry, and inserts [`Identity`] into the
/// request extensions before running the inner handler. A missing, invalid,
/// or expired token short-circuits with 401 and the handler never runs.
/// Token absence and token invalidity are indistinguishable to the caller.
///
/// # Example
///
/// ```ignore
/// let protected = Router::new()
///     .route("/users/me", get(current_user))
///     .route_layer(axum::middleware::from_fn_with_state(jwt, auth_middleware));
/// ```
pub async fn auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&headers).ok_or_else(|| {
        tracing::debug!("No bearer token in Authorization header");
        AppError::Unauthorized("Authorization required".to_string())
    })?;

    let claims = auth.verify_token(&token).map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        AppError::Unauthorized("Authorization required".to_string())
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::debug!("Token subject is not a valid user id");
        AppError::Unauthorized("Authorization required".to_string())
    })?;

    request.extensions_mut().insert(Identity { user_id });
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Resolve-or-fail: a handler that takes `Identity` runs only for
    /// requests the middleware has authenticated.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .copied()
            .ok_or_else(|| AppError::Unauthorized("Authorization required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::config::JwtConfig;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::get};
    use tower::util::ServiceExt;

    fn jwt() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("middleware-test-secret-0123456789abcdef"))
    }

    fn app(auth: JwtAuth) -> Router {
        Router::new()
            .route(
                "/whoami",
                get(|identity: Identity| async move { identity.user_id.to_string() }),
            )
            .route_layer(axum::middleware::from_fn_with_state(auth, auth_middleware))
    }

    async fn request_with_header(auth: JwtAuth, header: Option<&str>) -> StatusCode {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        let request = builder.body(Body::empty()).unwrap();

        app(auth).oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        assert_eq!(
            request_with_header(jwt(), None).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn malformed_token_is_unauthorized() {
        assert_eq!(
            request_with_header(jwt(), Some("Bearer garbage")).await,
            StatusCode::UNAUTHORIZED
        );

        assert_eq!(
            request_with_header(jwt(), Some("garbage")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn token_from_other_secret_is_unauthorized() {
        let other = JwtAuth::new(&JwtConfig::new("a-different-secret-0123456789abcdef-01"));
        let token = other.create_token(Uuid::now_v7()).unwrap();

        assert_eq!(
            request_with_header(jwt(), Some(&format!("Bearer {}", token))).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn valid_token_resolves_identity() {
        let auth = jwt();
        let user_id = Uuid::now_v7();
        let token = auth.create_token(user_id).unwrap();

        let request = HttpRequest::builder()
            .uri("/whoami")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app(auth).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, user_id.to_string().as_bytes());
    }
}
