//! Mock DAOs and fixtures shared by the service tests.

use auction_core::{
    AccountType, AuctionResult, Bid, BidId, Category, CategoryId, Condition, ConditionId,
    Currency, Email, Product, ProductId, Rating, RatingId, User, UserId,
};
use auction_repository::{BidDao, CategoryDao, ConditionDao, ProductDao, RatingDao, UserDao};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use mockall::mock;

mock! {
    pub Users {}

    #[async_trait]
    impl UserDao for Users {
        async fn add(&self, user: &User) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<User>>;
        async fn find_by_id(&self, id: UserId) -> AuctionResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AuctionResult<Option<User>>;
        async fn find_by_username(&self, username: &str) -> AuctionResult<Option<User>>;
        async fn update(&self, user: &User) -> AuctionResult<bool>;
        async fn delete(&self, id: UserId) -> AuctionResult<bool>;
    }
}

mock! {
    pub Categories {}

    #[async_trait]
    impl CategoryDao for Categories {
        async fn add(&self, category: &Category) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<Category>>;
        async fn find_by_id(&self, id: CategoryId) -> AuctionResult<Option<Category>>;
        async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Category>>;
        async fn find_children(&self, parent_id: CategoryId) -> AuctionResult<Vec<Category>>;
        async fn update(&self, category: &Category) -> AuctionResult<bool>;
        async fn delete(&self, id: CategoryId) -> AuctionResult<bool>;
    }
}

mock! {
    pub Products {}

    #[async_trait]
    impl ProductDao for Products {
        async fn add(&self, product: &Product) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<Product>>;
        async fn find_by_id(&self, id: ProductId) -> AuctionResult<Option<Product>>;
        async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Product>>;
        async fn find_by_category(&self, category_id: CategoryId) -> AuctionResult<Vec<Product>>;
        async fn find_by_seller(&self, seller_id: UserId) -> AuctionResult<Vec<Product>>;
        async fn find_descriptions(&self) -> AuctionResult<Vec<(ProductId, String)>>;
        async fn update(&self, product: &Product) -> AuctionResult<bool>;
        async fn delete(&self, id: ProductId) -> AuctionResult<bool>;
    }
}

mock! {
    pub Bids {}

    #[async_trait]
    impl BidDao for Bids {
        async fn add(&self, bid: &Bid) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<Bid>>;
        async fn find_by_id(&self, id: BidId) -> AuctionResult<Option<Bid>>;
        async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Bid>>;
        async fn find_highest_for_product(&self, product_id: ProductId) -> AuctionResult<Option<Bid>>;
        async fn find_by_buyer(&self, buyer_id: UserId) -> AuctionResult<Vec<Bid>>;
        async fn update(&self, bid: &Bid) -> AuctionResult<bool>;
        async fn delete(&self, id: BidId) -> AuctionResult<bool>;
    }
}

mock! {
    pub Ratings {}

    #[async_trait]
    impl RatingDao for Ratings {
        async fn add(&self, rating: &Rating) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<Rating>>;
        async fn find_by_id(&self, id: RatingId) -> AuctionResult<Option<Rating>>;
        async fn find_by_product(&self, product_id: ProductId) -> AuctionResult<Vec<Rating>>;
        async fn find_by_rated_user(&self, rated_user_id: UserId) -> AuctionResult<Vec<Rating>>;
        async fn update(&self, rating: &Rating) -> AuctionResult<bool>;
        async fn delete(&self, id: RatingId) -> AuctionResult<bool>;
    }
}

mock! {
    pub Conditions {}

    #[async_trait]
    impl ConditionDao for Conditions {
        async fn add(&self, condition: &Condition) -> AuctionResult<bool>;
        async fn find_all(&self) -> AuctionResult<Vec<Condition>>;
        async fn find_by_id(&self, id: ConditionId) -> AuctionResult<Option<Condition>>;
        async fn find_by_name(&self, name: &str) -> AuctionResult<Option<Condition>>;
        async fn update(&self, condition: &Condition) -> AuctionResult<bool>;
        async fn delete(&self, id: ConditionId) -> AuctionResult<bool>;
    }
}

pub fn user(first_name: &str, username: &str) -> User {
    User::new(
        first_name,
        "Tester",
        username,
        Email::new(format!("{}@example.com", username)).unwrap(),
        "",
        AccountType::Buyer,
    )
}

pub fn product(description: &str) -> Product {
    let now = Utc::now();
    Product::builder()
        .name("Listing")
        .description(description)
        .category(Category::new("General"))
        .seller(user("Sam", "sam"))
        .starting_price(500)
        .schedule(now, now + Duration::days(5))
        .build()
        .unwrap()
}

pub fn bid(amount: i64) -> Bid {
    Bid::new(user("Kim", "kim"), product("Item for sale"), amount, Currency::Usd)
}

pub fn rating(grade: i32) -> Rating {
    let listing = product("Item for sale");
    let seller = listing.seller.clone();
    Rating::new(listing, user("Kim", "kim"), seller, grade)
}
