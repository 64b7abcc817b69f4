//! Domain-level constants.
//!
//! Stored string values for the closed enumerations used by the schema.

// =============================================================================
// User Roles
// =============================================================================

/// Regular shopper account
pub const ROLE_CUSTOMER: &str = "CUSTOMER";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Order Status
// =============================================================================

/// Order created, payment not yet confirmed
pub const ORDER_STATUS_PENDING: &str = "PENDING";

/// Order paid and completed
pub const ORDER_STATUS_SUCCESS: &str = "SUCCESS";

/// Payment failed or order abandoned
pub const ORDER_STATUS_FAILED: &str = "FAILED";
