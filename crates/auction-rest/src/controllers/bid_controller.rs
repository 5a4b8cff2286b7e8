//! Bid controller.

use crate::{
    extractors::{parse_id, JsonBody},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{Bid, BidId, Product, User};
use auction_service::BidRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bids).post(create_bid))
        .route("/:id", get(get_bid).put(update_bid).delete(delete_bid))
}

async fn references(state: &AppState, request: &BidRequest) -> Result<(User, Product), AppError> {
    let buyer = found(
        state.user_service.get_by_id(request.buyer_id).await?,
        "User",
        request.buyer_id,
    )?;
    let product = found(
        state.product_service.get_by_id(request.product_id).await?,
        "Product",
        request.product_id,
    )?;
    Ok((buyer, product))
}

async fn list_bids(State(state): State<AppState>) -> ApiResult<Vec<Bid>> {
    ok(state.bid_service.get_all().await?)
}

async fn create_bid(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BidRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Bid>>), AppError> {
    debug!("Bid request of {} on {}", request.amount, request.product_id);

    let (buyer, product) = references(&state, &request).await?;
    let bid = request.into_bid(buyer, product);
    stored(state.bid_service.add(&bid).await?, "Bid")?;

    Ok(created(bid))
}

async fn get_bid(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Bid> {
    let bid_id = parse_id(&id, "bid", BidId::parse)?;
    ok(found(state.bid_service.get_by_id(bid_id).await?, "Bid", bid_id)?)
}

async fn update_bid(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<BidRequest>,
) -> ApiResult<Bid> {
    let bid_id = parse_id(&id, "bid", BidId::parse)?;
    let existing = found(state.bid_service.get_by_id(bid_id).await?, "Bid", bid_id)?;
    let (buyer, product) = references(&state, &request).await?;
    let bid = request.apply_to(existing, buyer, product);

    existed(state.bid_service.update(&bid).await?, "Bid", bid_id)?;
    ok(bid)
}

async fn delete_bid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let bid_id = parse_id(&id, "bid", BidId::parse)?;
    existed(state.bid_service.delete(bid_id).await?, "Bid", bid_id)?;
    Ok(no_content())
}
