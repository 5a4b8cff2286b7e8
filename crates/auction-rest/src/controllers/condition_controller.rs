//! Condition controller.

use crate::{
    extractors::{parse_id, JsonBody},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{Condition, ConditionId};
use auction_service::ConditionRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_conditions).post(create_condition))
        .route(
            "/:id",
            get(get_condition).put(update_condition).delete(delete_condition),
        )
}

async fn list_conditions(State(state): State<AppState>) -> ApiResult<Vec<Condition>> {
    ok(state.condition_service.get_all().await?)
}

async fn create_condition(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ConditionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Condition>>), AppError> {
    let condition = request.into_condition(ConditionId::new());
    stored(state.condition_service.add(&condition).await?, "Condition")?;
    Ok(created(condition))
}

async fn get_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Condition> {
    let condition_id = parse_id(&id, "condition", ConditionId::parse)?;
    ok(found(
        state.condition_service.get_by_id(condition_id).await?,
        "Condition",
        condition_id,
    )?)
}

async fn update_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ConditionRequest>,
) -> ApiResult<Condition> {
    let condition_id = parse_id(&id, "condition", ConditionId::parse)?;
    let condition = request.into_condition(condition_id);

    existed(
        state.condition_service.update(&condition).await?,
        "Condition",
        condition_id,
    )?;
    ok(condition)
}

async fn delete_condition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let condition_id = parse_id(&id, "condition", ConditionId::parse)?;
    existed(
        state.condition_service.delete(condition_id).await?,
        "Condition",
        condition_id,
    )?;
    Ok(no_content())
}
