//! Order status and order line types.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ORDER_STATUS_FAILED, ORDER_STATUS_PENDING, ORDER_STATUS_SUCCESS};
use crate::error::{DomainError, DomainResult};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Success,
    Failed,
}

impl OrderStatus {
    /// Stored name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => ORDER_STATUS_PENDING,
            OrderStatus::Success => ORDER_STATUS_SUCCESS,
            OrderStatus::Failed => ORDER_STATUS_FAILED,
        }
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            ORDER_STATUS_PENDING => Ok(OrderStatus::Pending),
            ORDER_STATUS_SUCCESS => Ok(OrderStatus::Success),
            ORDER_STATUS_FAILED => Ok(OrderStatus::Failed),
            other => Err(DomainError::invalid_input(format!(
                "Invalid order status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single product line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: String,
    pub product_id: i32,
    pub quantity: i32,
    pub price_per_unit: Decimal,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_stored_name() {
        for status in [OrderStatus::Pending, OrderStatus::Success, OrderStatus::Failed] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_lowercase() {
        assert!("success".parse::<OrderStatus>().is_err());
    }
}
