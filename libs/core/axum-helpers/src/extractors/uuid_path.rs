//! UUID path parameter extractor with early validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::IntoResponse,
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Parses the path parameter up front and rejects malformed identifiers as
/// `BadRequest` before any handler logic runs, so an invalid id never
/// reaches the storage layer as a cast failure.
///
/// # Example
/// ```ignore
/// async fn delete_item(UuidPath(id): UuidPath) { /* ... */ }
///
/// let app = Router::new().route("/items/{id}", delete(delete_item));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = axum::response::Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&raw) {
            Ok(id) => Ok(UuidPath(id)),
            Err(e) => Err(AppError::InvalidId(e).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::util::ServiceExt;

    fn app() -> Router {
        Router::new().route(
            "/items/{id}",
            get(|UuidPath(id): UuidPath| async move { id.to_string() }),
        )
    }

    #[tokio::test]
    async fn parses_valid_uuid() {
        let id = Uuid::now_v7();
        let request = Request::builder()
            .uri(format!("/items/{}", id))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_malformed_id_as_bad_request() {
        let request = Request::builder()
            .uri("/items/not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
