use crate::errors::handlers::not_found;
use crate::http::cors::create_cors_layer;
use axum::Router;
use core_config::{Environment, server::ServerConfig};
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

use super::shutdown::shutdown_signal;

/// Start the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server fails while running.
///
/// # Example
/// ```ignore
/// let config = ServerConfig::default();
/// create_app(router, &config).await?;
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Assemble the application router with cross-cutting concerns.
///
/// Adds, around the provided API routes:
/// - Swagger UI at `/docs` backed by the aggregated OpenAPI document
/// - request tracing, response compression, CORS
/// - the 404 fallback handler
///
/// Domain routers apply their own state and auth layers before being passed
/// in; this function only composes them with the shared middleware.
///
/// # Type Parameters
/// * `T` - the aggregated `utoipa::OpenApi` document type
///
/// # Errors
/// Returns an error if the CORS configuration is missing or invalid
/// (see [`create_cors_layer`]).
pub fn create_router<T>(apis: Router, environment: &Environment) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_swagger_ui::SwaggerUi;

    let cors = create_cors_layer(environment)?;

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CompressionLayer::new())
        .layer(cors);

    Ok(router)
}
