//! Order item service - Read access to purchased order lines.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::OrderItem;

use crate::repository::OrderItemRepository;

/// Order item service trait for dependency injection.
#[async_trait]
pub trait OrderItemService: Send + Sync {
    /// Items of one order; empty for an unknown order
    async fn find_by_order_id(&self, order_id: &str) -> AppResult<Vec<OrderItem>>;

    /// Items from the user's orders with status `SUCCESS`
    async fn find_successful_order_items_by_user_id(&self, user_id: i32)
        -> AppResult<Vec<OrderItem>>;
}

/// Concrete implementation of OrderItemService using repository.
pub struct OrderItemManager {
    repo: Arc<dyn OrderItemRepository>,
}

impl OrderItemManager {
    /// Create new order item service instance with repository
    pub fn new(repo: Arc<dyn OrderItemRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl OrderItemService for OrderItemManager {
    async fn find_by_order_id(&self, order_id: &str) -> AppResult<Vec<OrderItem>> {
        let items = self.repo.find_by_order_id(order_id).await?;
        tracing::debug!(order_id, count = items.len(), "Loaded order items");
        Ok(items)
    }

    async fn find_successful_order_items_by_user_id(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<OrderItem>> {
        let items = self
            .repo
            .find_successful_order_items_by_user_id(user_id)
            .await?;
        tracing::debug!(user_id, count = items.len(), "Loaded successful order items");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use common::AppError;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use crate::repository::MockOrderItemRepository;

    fn item(id: i32, order_id: &str) -> OrderItem {
        OrderItem {
            id,
            order_id: order_id.to_string(),
            product_id: 100 + id,
            quantity: 1,
            price_per_unit: Decimal::new(1999, 2),
            total_price: Decimal::new(1999, 2),
        }
    }

    #[tokio::test]
    async fn test_find_by_order_id_passes_through() {
        let mut repo = MockOrderItemRepository::new();
        repo.expect_find_by_order_id()
            .times(1)
            .returning(|_| Ok(vec![item(1, "O123"), item(2, "O123")]));

        let service = OrderItemManager::new(Arc::new(repo));
        let items = service.find_by_order_id("O123").await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.order_id == "O123"));
    }

    #[tokio::test]
    async fn test_find_successful_items_empty() {
        let mut repo = MockOrderItemRepository::new();
        repo.expect_find_successful_order_items_by_user_id()
            .with(eq(42))
            .returning(|_| Ok(vec![]));

        let service = OrderItemManager::new(Arc::new(repo));
        let items = service
            .find_successful_order_items_by_user_id(42)
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockOrderItemRepository::new();
        repo.expect_find_successful_order_items_by_user_id()
            .returning(|_| Err(AppError::internal("boom")));

        let service = OrderItemManager::new(Arc::new(repo));
        let result = service.find_successful_order_items_by_user_id(1).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
