//! User management controller.

use crate::{
    extractors::{parse_id, JsonBody, ValidatedJson},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{AuctionError, Rating, User, UserId};
use auction_service::{CreateUserRequest, LoginRequest, UpdateUserRequest};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/login", post(login))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
        .route("/:id/ratings", get(list_received_ratings))
}

async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    ok(state.user_service.get_all().await?)
}

async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), AppError> {
    debug!("Create user request: {}", request.username);

    let (user, password) = request.into_user()?;
    let added = state.user_service.add(user.clone(), &password).await?;
    stored(added, "User")?;

    Ok(created(user))
}

async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<User> {
    debug!("Login request: {}", request.email);

    let user = state
        .user_service
        .get_by_credentials(&request.email, &request.password)
        .await?
        .ok_or(AppError(AuctionError::InvalidCredentials))?;

    ok(user)
}

async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<User> {
    let user_id = parse_id(&id, "user", UserId::parse)?;
    ok(found(state.user_service.get_by_id(user_id).await?, "User", user_id)?)
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<User> {
    debug!("Update user request: {}", id);

    let user_id = parse_id(&id, "user", UserId::parse)?;
    let (user, password) = request.into_user(user_id)?;

    let updated = state
        .user_service
        .update(user.clone(), password.as_deref())
        .await?;
    existed(updated, "User", user_id)?;

    ok(user)
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!("Delete user request: {}", id);

    let user_id = parse_id(&id, "user", UserId::parse)?;
    existed(state.user_service.delete(user_id).await?, "User", user_id)?;

    Ok(no_content())
}

async fn list_received_ratings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Rating>> {
    let user_id = parse_id(&id, "user", UserId::parse)?;
    ok(state.rating_service.get_by_rated_user(user_id).await?)
}
