use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the WTWR API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "WTWR API",
        description = "Authenticated backend for the What-To-Wear app: user accounts and weather-matched clothing items",
    ),
    nest(
        (path = "/", api = domain_users::handlers::ApiDoc),
        (path = "/items", api = domain_wardrobe::handlers::ApiDoc),
    )
)]
pub struct ApiDoc;
