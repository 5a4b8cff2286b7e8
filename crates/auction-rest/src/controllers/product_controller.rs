//! Product controller.
//!
//! Listings reference their category and seller by id; both are loaded
//! before the product is built, and a missing one answers 404.

use crate::{
    extractors::{parse_id, JsonBody},
    responses::{created, existed, found, no_content, ok, stored, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use auction_core::{Bid, Category, Product, ProductId, User};
use auction_service::ProductRequest;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{debug, info};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/:id/close", post(close_product))
        .route("/:id/bids", get(list_bids))
        .route("/:id/bids/highest", get(highest_bid))
}

async fn references(
    state: &AppState,
    request: &ProductRequest,
) -> Result<(Category, User), AppError> {
    let category = found(
        state.category_service.get_by_id(request.category_id).await?,
        "Category",
        request.category_id,
    )?;
    let seller = found(
        state.user_service.get_by_id(request.seller_id).await?,
        "User",
        request.seller_id,
    )?;
    Ok((category, seller))
}

async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    ok(state.product_service.get_all().await?)
}

async fn create_product(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), AppError> {
    debug!("Create product request: {}", request.name);

    let (category, seller) = references(&state, &request).await?;
    let product = request.into_product(category, seller)?;
    stored(state.product_service.add(&product).await?, "Product")?;

    Ok(created(product))
}

async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Product> {
    let product_id = parse_id(&id, "product", ProductId::parse)?;
    ok(found(
        state.product_service.get_by_id(product_id).await?,
        "Product",
        product_id,
    )?)
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ProductRequest>,
) -> ApiResult<Product> {
    debug!("Update product request: {}", id);

    let product_id = parse_id(&id, "product", ProductId::parse)?;
    let existing = found(
        state.product_service.get_by_id(product_id).await?,
        "Product",
        product_id,
    )?;
    let (category, seller) = references(&state, &request).await?;
    let product = request.apply_to(existing, category, seller);

    existed(
        state.product_service.update(&product).await?,
        "Product",
        product_id,
    )?;
    ok(product)
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let product_id = parse_id(&id, "product", ProductId::parse)?;
    existed(
        state.product_service.delete(product_id).await?,
        "Product",
        product_id,
    )?;
    Ok(no_content())
}

/// Closes the auction now. Closing an already closed auction is a no-op.
async fn close_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Product> {
    let product_id = parse_id(&id, "product", ProductId::parse)?;
    let mut product = found(
        state.product_service.get_by_id(product_id).await?,
        "Product",
        product_id,
    )?;

    if product.terminate(Utc::now()) {
        existed(
            state.product_service.update(&product).await?,
            "Product",
            product_id,
        )?;
        info!("Auction closed: {}", product_id);
    }
    ok(product)
}

async fn list_bids(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Vec<Bid>> {
    let product_id = parse_id(&id, "product", ProductId::parse)?;
    ok(state.bid_service.get_by_product(product_id).await?)
}

async fn highest_bid(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Bid> {
    let product_id = parse_id(&id, "product", ProductId::parse)?;
    ok(found(
        state.bid_service.highest_for_product(product_id).await?,
        "Bid on product",
        product_id,
    )?)
}
