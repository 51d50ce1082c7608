use axum::Router;
use axum_helpers::JwtAuth;
use domain_users::{UserRepository, UserService};
use domain_wardrobe::{ItemRepository, ItemService};

/// Compose the API routes.
///
/// Generic over the repositories so the integration tests can drive the
/// real router against in-memory storage. Each domain router wires its own
/// public/protected split; composition here adds only the path prefixes.
pub fn build_router<UR, IR>(
    users: UserService<UR>,
    items: ItemService<IR>,
    jwt: JwtAuth,
) -> Router
where
    UR: UserRepository + 'static,
    IR: ItemRepository + 'static,
{
    Router::new()
        .merge(domain_users::handlers::router(users, jwt.clone()))
        .nest("/items", domain_wardrobe::handlers::router(items, jwt))
}
