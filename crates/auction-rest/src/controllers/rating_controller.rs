//! Rating controller.

use crate::{
    extractors::{parse_id, JsonBody},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{Product, Rating, RatingId, User};
use auction_service::RatingRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ratings).post(create_rating))
        .route(
            "/:id",
            get(get_rating).put(update_rating).delete(delete_rating),
        )
}

/// Loads the rated product and both users.
async fn references(
    state: &AppState,
    request: &RatingRequest,
) -> Result<(Product, User, User), AppError> {
    let product = found(
        state.product_service.get_by_id(request.product_id).await?,
        "Product",
        request.product_id,
    )?;
    let rating_user = found(
        state.user_service.get_by_id(request.rating_user_id).await?,
        "User",
        request.rating_user_id,
    )?;
    let rated_user = found(
        state.user_service.get_by_id(request.rated_user_id).await?,
        "User",
        request.rated_user_id,
    )?;
    Ok((product, rating_user, rated_user))
}

async fn list_ratings(State(state): State<AppState>) -> ApiResult<Vec<Rating>> {
    ok(state.rating_service.get_all().await?)
}

async fn create_rating(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RatingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Rating>>), AppError> {
    let (product, rating_user, rated_user) = references(&state, &request).await?;
    let rating = request.into_rating(product, rating_user, rated_user);
    stored(state.rating_service.add(&rating).await?, "Rating")?;

    Ok(created(rating))
}

async fn get_rating(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Rating> {
    let rating_id = parse_id(&id, "rating", RatingId::parse)?;
    ok(found(
        state.rating_service.get_by_id(rating_id).await?,
        "Rating",
        rating_id,
    )?)
}

async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<RatingRequest>,
) -> ApiResult<Rating> {
    let rating_id = parse_id(&id, "rating", RatingId::parse)?;
    let existing = found(
        state.rating_service.get_by_id(rating_id).await?,
        "Rating",
        rating_id,
    )?;
    let (product, rating_user, rated_user) = references(&state, &request).await?;
    let rating = request.apply_to(existing, product, rating_user, rated_user);

    existed(
        state.rating_service.update(&rating).await?,
        "Rating",
        rating_id,
    )?;
    ok(rating)
}

async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let rating_id = parse_id(&id, "rating", RatingId::parse)?;
    existed(
        state.rating_service.delete(rating_id).await?,
        "Rating",
        rating_id,
    )?;
    Ok(no_content())
}
