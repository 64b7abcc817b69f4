//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence mapping lives in the admin service's entity definitions.

pub mod constants;
pub mod error;
pub mod order;
pub mod token;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use order::{OrderItem, OrderStatus};
pub use token::JwtToken;
pub use user::{Role, User, UserChanges};
