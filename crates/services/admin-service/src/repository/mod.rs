//! Repository layer for data access.

pub mod entities;
mod jwt_repository;
mod order_item_repository;
mod user_repository;

pub(crate) use jwt_repository::delete_by_user_id as delete_tokens_by_user_id;
pub(crate) use user_repository::{
    find_by_id_for_update as find_user_for_update, save as save_user,
};

pub use jwt_repository::{JwtRepository, JwtStore};
pub use order_item_repository::{OrderItemRepository, OrderItemStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use jwt_repository::MockJwtRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_item_repository::MockOrderItemRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
