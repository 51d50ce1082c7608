use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("Requested resource not found".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn fallback_returns_404() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
