//! User domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_CUSTOMER};
use crate::error::{DomainError, DomainResult};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    /// Stored name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => ROLE_CUSTOMER,
            Role::Admin => ROLE_ADMIN,
        }
    }
}

/// Exact, case-sensitive match against the stored role names.
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            ROLE_CUSTOMER => Ok(Role::Customer),
            ROLE_ADMIN => Ok(Role::Admin),
            other => Err(DomainError::invalid_input(format!("Invalid role: {}", other))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Overwrite the fields present in `changes` and bump `updated_at`.
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated partial update of a user.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl UserChanges {
    /// Build changes from raw admin input.
    ///
    /// Absent and empty values both mean "leave unchanged". A non-empty role
    /// must name a [`Role`], otherwise the whole update is rejected.
    pub fn parse(
        username: Option<String>,
        email: Option<String>,
        role: Option<String>,
    ) -> DomainResult<Self> {
        let role = match non_empty(role) {
            Some(role) => Some(role.parse::<Role>()?),
            None => None,
        };

        Ok(Self {
            username: non_empty(username),
            email: non_empty(email),
            role,
        })
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.role.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
