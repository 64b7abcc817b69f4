//! Order item read queries.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::order;
use super::entities::order_item::{self, Entity as OrderItemEntity};
use common::AppResult;
use domain::{OrderItem, OrderStatus};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Order item repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// All lines of one order; empty when the order has none or does not exist
    async fn find_by_order_id(&self, order_id: &str) -> AppResult<Vec<OrderItem>>;

    /// All lines of the user's orders whose status is exactly `SUCCESS`
    async fn find_successful_order_items_by_user_id(&self, user_id: i32)
        -> AppResult<Vec<OrderItem>>;
}

/// Concrete implementation of OrderItemRepository
pub struct OrderItemStore {
    db: DatabaseConnection,
}

impl OrderItemStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemRepository for OrderItemStore {
    async fn find_by_order_id(&self, order_id: &str) -> AppResult<Vec<OrderItem>> {
        let models = OrderItemEntity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(OrderItem::from).collect())
    }

    async fn find_successful_order_items_by_user_id(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<OrderItem>> {
        let models = OrderItemEntity::find()
            .inner_join(order::Entity)
            .filter(order::Column::UserId.eq(user_id))
            .filter(order::Column::Status.eq(OrderStatus::Success.as_str()))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(OrderItem::from).collect())
    }
}
