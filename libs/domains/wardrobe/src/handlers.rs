use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    AppError, ErrorResponse, UuidPath, ValidatedJson,
    auth::{Identity, JwtAuth, auth_middleware},
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::models::{ClothingItem, CreateClothingItem, DeletedResponse, WeatherKind};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the item endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, delete_item, like_item, unlike_item),
    components(schemas(
        ClothingItem,
        CreateClothingItem,
        WeatherKind,
        DeletedResponse,
        ErrorResponse
    )),
    tags(
        (name = "Items", description = "Clothing item operations")
    )
)]
pub struct ApiDoc;

/// Create the items router.
///
/// Listing is public; everything else carries the auth middleware as a
/// route layer and requires a resolved identity.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>, jwt: JwtAuth) -> Router {
    let shared_service = Arc::new(service);

    let public = Router::new().route("/", get(list_items));

    let protected = Router::new()
        .route("/", post(create_item))
        .route("/{id}", delete(delete_item))
        .route("/{id}/likes", put(like_item).delete(unlike_item))
        .route_layer(axum::middleware::from_fn_with_state(jwt, auth_middleware));

    public.merge(protected).with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items, newest first", body = Vec<ClothingItem>),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> Result<Json<Vec<ClothingItem>>, AppError> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item owned by the caller
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateClothingItem,
    responses(
        (status = 201, description = "Item created", body = ClothingItem),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    identity: Identity,
    ValidatedJson(input): ValidatedJson<CreateClothingItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = service.create_item(identity.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete an item (owner only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeletedResponse),
        (status = 400, description = "Invalid item ID", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Caller does not own the item", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    identity: Identity,
    UuidPath(id): UuidPath,
) -> Result<Json<DeletedResponse>, AppError> {
    service.delete_item(id, identity.user_id).await?;
    Ok(Json(DeletedResponse {
        message: "Item deleted".to_string(),
    }))
}

/// Like an item
#[utoipa::path(
    put,
    path = "/{id}/likes",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated item", body = ClothingItem),
        (status = 400, description = "Invalid item ID", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
async fn like_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    identity: Identity,
    UuidPath(id): UuidPath,
) -> Result<Json<ClothingItem>, AppError> {
    let item = service.like_item(id, identity.user_id).await?;
    Ok(Json(item))
}

/// Remove the caller's like from an item
#[utoipa::path(
    delete,
    path = "/{id}/likes",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Updated item", body = ClothingItem),
        (status = 400, description = "Invalid item ID", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
async fn unlike_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    identity: Identity,
    UuidPath(id): UuidPath,
) -> Result<Json<ClothingItem>, AppError> {
    let item = service.unlike_item(id, identity.user_id).await?;
    Ok(Json(item))
}
