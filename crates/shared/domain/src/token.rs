//! JWT session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A session credential issued to one user.
///
/// Tokens are created by the authentication service; deleting them forces
/// the owner to log in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtToken {
    pub id: i32,
    pub user_id: i32,
    #[serde(skip_serializing, default)]
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
