use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, ErrorResponse, ValidatedJson,
    auth::{Identity, JwtAuth, auth_middleware},
};
use utoipa::OpenApi;

use crate::models::{SigninRequest, SigninResponse, SignupRequest, UpdateProfile, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the user endpoints
#[derive(OpenApi)]
#[openapi(
    paths(signup, signin, current_user, update_profile),
    components(schemas(
        SignupRequest,
        SigninRequest,
        SigninResponse,
        UpdateProfile,
        UserResponse,
        ErrorResponse
    )),
    tags(
        (name = "Auth", description = "Signup and signin"),
        (name = "Users", description = "Current-user operations")
    )
)]
pub struct ApiDoc;

/// Application state for the user endpoints
pub struct AuthState<R: UserRepository> {
    pub service: UserService<R>,
    pub jwt: JwtAuth,
}

impl<R: UserRepository> Clone for AuthState<R> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the users router.
///
/// `/signup` and `/signin` are public; `/users/me` requires a resolved
/// identity and carries the auth middleware as a route layer.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    let state = AuthState {
        service,
        jwt: jwt.clone(),
    };

    let public = Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin));

    let protected = Router::new()
        .route("/users/me", get(current_user).patch(update_profile))
        .route_layer(axum::middleware::from_fn_with_state(jwt, auth_middleware));

    public.merge(protected).with_state(state)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn signup<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Sign in with email/password and receive an identity token
#[utoipa::path(
    post,
    path = "/signin",
    tag = "Auth",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signed in", body = SigninResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn signin<R: UserRepository>(
    State(state): State<AuthState<R>>,
    ValidatedJson(input): ValidatedJson<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    let user = state
        .service
        .verify_credentials(&input.email, &input.password)
        .await?;

    let token = state.jwt.create_token(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        AppError::Internal("Failed to issue token".to_string())
    })?;

    Ok(Json(SigninResponse { token }))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "Users",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    )
)]
async fn current_user<R: UserRepository>(
    State(state): State<AuthState<R>>,
    identity: Identity,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.service.get_user(identity.user_id).await?;
    Ok(Json(user))
}

/// Update the authenticated user's name and avatar
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "Users",
    request_body = UpdateProfile,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    )
)]
async fn update_profile<R: UserRepository>(
    State(state): State<AuthState<R>>,
    identity: Identity,
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .service
        .update_profile(identity.user_id, input)
        .await?;
    Ok(Json(user))
}
