//! Service layer - business logic.

mod admin_user_service;
mod order_item_service;

pub use admin_user_service::{AdminUserManager, AdminUserService};
pub use order_item_service::{OrderItemManager, OrderItemService};
