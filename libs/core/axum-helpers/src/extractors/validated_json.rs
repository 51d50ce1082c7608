//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that validates the body before the handler runs.
///
/// Deserialization and `Validate::validate` both happen inside the
/// extractor, so a handler holding a `ValidatedJson<T>` is guaranteed a
/// well-formed payload and no side effect can precede validation.
/// Violations are rejected as structured 400 responses through [`AppError`].
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct SignupRequest {
///     #[validate(length(min = 2, max = 30))]
///     name: String,
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn signup(ValidatedJson(payload): ValidatedJson<SignupRequest>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::util::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 2, max = 30))]
        name: String,
        #[validate(email)]
        email: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(p): ValidatedJson<Payload>| async move { p.name }),
        )
    }

    async fn send(body: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let status = send(r#"{"name": "Ann", "email": "a@x.com"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_field_violations() {
        let status = send(r#"{"name": "A", "email": "a@x.com"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let status = send(r#"{"name": "Ann", "email": "not-an-email"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let status = send("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
