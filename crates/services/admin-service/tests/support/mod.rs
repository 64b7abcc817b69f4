//! Shared fixtures for integration tests.
//!
//! Each test gets a fresh in-memory SQLite database with all migrations applied.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use admin_service_lib::infra::Database;
use admin_service_lib::repository::entities::{jwt_token, order, order_item, user};
use admin_service_lib::AdminApp;
use common::DatabaseConfig;

pub struct TestContext {
    pub db: DatabaseConnection,
    pub app: AdminApp,
}

pub async fn setup() -> TestContext {
    // A single connection keeps every query on the same in-memory database
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };
    let db = Database::connect(&config)
        .await
        .expect("Failed to open test database")
        .get_connection();
    let app = AdminApp::from_connection(db.clone());

    TestContext { db, app }
}

pub async fn insert_user(
    db: &DatabaseConnection,
    id: i32,
    username: &str,
    email: &str,
    role: &str,
) -> user::Model {
    let now = Utc::now();
    user::ActiveModel {
        user_id: Set(id),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set("$argon2id$hashed".to_string()),
        role: Set(role.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert user")
}

pub async fn insert_token(db: &DatabaseConnection, user_id: i32, token: &str) -> jwt_token::Model {
    jwt_token::ActiveModel {
        user_id: Set(user_id),
        token: Set(token.to_string()),
        expires_at: Set(Utc::now() + Duration::hours(1)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert token")
}

pub async fn insert_order(
    db: &DatabaseConnection,
    order_id: &str,
    user_id: i32,
    status: &str,
) -> order::Model {
    let now = Utc::now();
    order::ActiveModel {
        order_id: Set(order_id.to_string()),
        user_id: Set(user_id),
        total_amount: Set(Decimal::new(9999, 2)),
        status: Set(status.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("Failed to insert order")
}

pub async fn insert_item(
    db: &DatabaseConnection,
    order_id: &str,
    product_id: i32,
    quantity: i32,
) -> order_item::Model {
    let price = Decimal::new(1249, 2);
    order_item::ActiveModel {
        order_id: Set(order_id.to_string()),
        product_id: Set(product_id),
        quantity: Set(quantity),
        price_per_unit: Set(price),
        total_price: Set(price * Decimal::from(quantity)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert order item")
}
