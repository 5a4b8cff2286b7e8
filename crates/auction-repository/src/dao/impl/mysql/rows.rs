//! Row types and reference loading shared by the MySQL DAOs.
//!
//! References are stored as `CHAR(36)` foreign keys and loaded one query
//! per reference when an entity is read.

use auction_core::{
    AccountType, AuctionError, AuctionResult, Bid, BidId, Category, CategoryId, Condition,
    ConditionId, Currency, Email, Product, ProductId, Rating, RatingId, User, UserId,
};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, MySqlPool};
use std::collections::HashMap;
use std::fmt::Display;

pub(super) const USER_COLUMNS: &str =
    "id, first_name, last_name, username, phone, email, password_hash, account_type";
pub(super) const CATEGORY_COLUMNS: &str = "id, name, parent_id";
pub(super) const PRODUCT_COLUMNS: &str = "id, name, description, category_id, starting_price, \
     currency, seller_id, creation_date, start_date, end_date, termination_date";
pub(super) const BID_COLUMNS: &str = "id, placed_at, amount, currency, buyer_id, product_id";
pub(super) const RATING_COLUMNS: &str =
    "id, date_and_time, product_id, rating_user_id, rated_user_id, grade";
pub(super) const CONDITION_COLUMNS: &str = "id, name, description, value";

#[derive(Debug, FromRow)]
pub(super) struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    username: String,
    phone: Option<String>,
    email: String,
    password_hash: String,
    account_type: String,
}

impl TryFrom<UserRow> for User {
    type Error = AuctionError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: parse_id(&row.id, UserId::parse)?,
            first_name: row.first_name,
            last_name: row.last_name,
            username: row.username,
            phone: row.phone,
            email: Email::new_unchecked(row.email),
            password_hash: row.password_hash,
            account_type: AccountType::parse_lenient(&row.account_type),
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct CategoryRow {
    id: String,
    name: String,
    parent_id: Option<String>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = AuctionError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: parse_id(&row.id, CategoryId::parse)?,
            name: row.name,
            parent_id: row
                .parent_id
                .as_deref()
                .map(|id| parse_id(id, CategoryId::parse))
                .transpose()?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ConditionRow {
    id: String,
    name: String,
    description: String,
    value: i32,
}

impl TryFrom<ConditionRow> for Condition {
    type Error = AuctionError;

    fn try_from(row: ConditionRow) -> Result<Self, Self::Error> {
        Ok(Condition {
            id: parse_id(&row.id, ConditionId::parse)?,
            name: row.name,
            description: row.description,
            value: row.value,
        })
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ProductRow {
    id: String,
    name: String,
    description: String,
    category_id: String,
    starting_price: i64,
    currency: String,
    seller_id: String,
    creation_date: DateTime<Utc>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    termination_date: Option<DateTime<Utc>>,
}

#[derive(Debug, FromRow)]
pub(super) struct BidRow {
    id: String,
    placed_at: DateTime<Utc>,
    amount: i64,
    currency: String,
    buyer_id: String,
    product_id: String,
}

#[derive(Debug, FromRow)]
pub(super) struct RatingRow {
    id: String,
    date_and_time: DateTime<Utc>,
    product_id: String,
    rating_user_id: String,
    rated_user_id: String,
    grade: i32,
}

/// Parses a `CHAR(36)` column into a typed id.
pub(super) fn parse_id<T, E: Display>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> AuctionResult<T> {
    parse(raw).map_err(|e| AuctionError::Internal(format!("Invalid UUID in database: {}", e)))
}

fn parse_currency(raw: &str) -> AuctionResult<Currency> {
    raw.parse()
        .map_err(|e| AuctionError::Internal(format!("Invalid currency in database: {}", e)))
}

fn dangling(table: &str, id: &str) -> AuctionError {
    AuctionError::Database(format!("Dangling reference to {} row {}", table, id))
}

/// Converts rows that need no reference loading.
pub(super) fn convert_all<R, T>(rows: Vec<R>) -> AuctionResult<Vec<T>>
where
    T: TryFrom<R, Error = AuctionError>,
{
    rows.into_iter().map(T::try_from).collect()
}

/// Returns `true` if the statement changed a row or the row exists.
///
/// MySQL reports zero affected rows when an UPDATE writes identical values,
/// so a miss is confirmed against the table before reporting `false`.
pub(super) async fn changed_or_exists(
    pool: &MySqlPool,
    table: &'static str,
    id: &str,
    rows_affected: u64,
) -> AuctionResult<bool> {
    if rows_affected > 0 {
        return Ok(true);
    }

    let sql = format!("SELECT 1 FROM {} WHERE id = ?", table);
    let found: Option<i64> = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

pub(super) async fn load_user(pool: &MySqlPool, id: &str) -> AuctionResult<User> {
    let sql = format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS);
    sqlx::query_as::<_, UserRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| dangling("users", id))?
        .try_into()
}

pub(super) async fn load_category(pool: &MySqlPool, id: &str) -> AuctionResult<Category> {
    let sql = format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS);
    sqlx::query_as::<_, CategoryRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| dangling("categories", id))?
        .try_into()
}

pub(super) async fn load_product(pool: &MySqlPool, id: &str) -> AuctionResult<Product> {
    let sql = format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS);
    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| dangling("products", id))?;

    hydrate_product(pool, row).await
}

pub(super) async fn hydrate_product(pool: &MySqlPool, row: ProductRow) -> AuctionResult<Product> {
    Ok(Product {
        id: parse_id(&row.id, ProductId::parse)?,
        category: load_category(pool, &row.category_id).await?,
        seller: load_user(pool, &row.seller_id).await?,
        name: row.name,
        description: row.description,
        starting_price: row.starting_price,
        currency: parse_currency(&row.currency)?,
        creation_date: row.creation_date,
        start_date: row.start_date,
        end_date: row.end_date,
        termination_date: row.termination_date,
    })
}

pub(super) async fn hydrate_products(
    pool: &MySqlPool,
    rows: Vec<ProductRow>,
) -> AuctionResult<Vec<Product>> {
    let mut products = Vec::with_capacity(rows.len());
    for row in rows {
        products.push(hydrate_product(pool, row).await?);
    }
    Ok(products)
}

pub(super) async fn hydrate_bid(pool: &MySqlPool, row: BidRow) -> AuctionResult<Bid> {
    Ok(Bid {
        id: parse_id(&row.id, BidId::parse)?,
        placed_at: row.placed_at,
        amount: row.amount,
        currency: parse_currency(&row.currency)?,
        buyer: load_user(pool, &row.buyer_id).await?,
        product: load_product(pool, &row.product_id).await?,
    })
}

pub(super) async fn hydrate_bids(pool: &MySqlPool, rows: Vec<BidRow>) -> AuctionResult<Vec<Bid>> {
    // Bids on one product share a single product load.
    let mut products: HashMap<String, Product> = HashMap::new();
    let mut bids = Vec::with_capacity(rows.len());
    for row in rows {
        let product = match products.get(&row.product_id) {
            Some(product) => product.clone(),
            None => {
                let product = load_product(pool, &row.product_id).await?;
                products.insert(row.product_id.clone(), product.clone());
                product
            }
        };
        bids.push(Bid {
            id: parse_id(&row.id, BidId::parse)?,
            placed_at: row.placed_at,
            amount: row.amount,
            currency: parse_currency(&row.currency)?,
            buyer: load_user(pool, &row.buyer_id).await?,
            product,
        });
    }
    Ok(bids)
}

pub(super) async fn hydrate_rating(pool: &MySqlPool, row: RatingRow) -> AuctionResult<Rating> {
    Ok(Rating {
        id: parse_id(&row.id, RatingId::parse)?,
        date_and_time: row.date_and_time,
        product: load_product(pool, &row.product_id).await?,
        rating_user: load_user(pool, &row.rating_user_id).await?,
        rated_user: load_user(pool, &row.rated_user_id).await?,
        grade: row.grade,
    })
}

pub(super) async fn hydrate_ratings(
    pool: &MySqlPool,
    rows: Vec<RatingRow>,
) -> AuctionResult<Vec<Rating>> {
    let mut ratings = Vec::with_capacity(rows.len());
    for row in rows {
        ratings.push(hydrate_rating(pool, row).await?);
    }
    Ok(ratings)
}
