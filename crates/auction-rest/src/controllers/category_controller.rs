//! Category controller.

use crate::{
    extractors::{parse_id, JsonBody},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{Category, CategoryId};
use auction_service::CategoryRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/:id/children", get(list_children))
}

async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    ok(state.category_service.get_all().await?)
}

async fn create_category(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), AppError> {
    debug!("Create category request: {}", request.name);

    let category = request.into_category(CategoryId::new());
    stored(state.category_service.add(&category).await?, "Category")?;

    Ok(created(category))
}

async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Category> {
    let category_id = parse_id(&id, "category", CategoryId::parse)?;
    ok(found(
        state.category_service.get_by_id(category_id).await?,
        "Category",
        category_id,
    )?)
}

async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<CategoryRequest>,
) -> ApiResult<Category> {
    let category_id = parse_id(&id, "category", CategoryId::parse)?;
    let category = request.into_category(category_id);

    existed(
        state.category_service.update(&category).await?,
        "Category",
        category_id,
    )?;
    ok(category)
}

async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let category_id = parse_id(&id, "category", CategoryId::parse)?;
    existed(
        state.category_service.delete(category_id).await?,
        "Category",
        category_id,
    )?;
    Ok(no_content())
}

async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Category>> {
    let category_id = parse_id(&id, "category", CategoryId::parse)?;
    ok(state.category_service.get_children(category_id).await?)
}
