//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod jwt_token;
pub mod order;
pub mod order_item;
pub mod user;
