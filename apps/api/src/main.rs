use axum_helpers::{JwtAuth, create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{MongoUserRepository, UserService};
use domain_wardrobe::{ItemService, MongoItemRepository};
use mongodb::Client;
use tracing::info;

use wtwr_api::config::Config;
use wtwr_api::{openapi, routes};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre before any fallible operation
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongo.uri);
    let client = Client::with_uri_str(&config.mongo.uri).await?;
    let db = client.database(&config.mongo.database);

    let user_repository = MongoUserRepository::new(db.clone());
    user_repository.ensure_indexes().await?;
    let item_repository = MongoItemRepository::new(db);

    let jwt = JwtAuth::new(&config.jwt);
    let users = UserService::with_config(user_repository, &config.password)?;
    let items = ItemService::new(item_repository);

    let api = routes::build_router(users, items, jwt);
    let router = create_router::<openapi::ApiDoc>(api, &config.environment)?
        .merge(health_router(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));

    create_app(router, &config.server).await?;

    Ok(())
}
