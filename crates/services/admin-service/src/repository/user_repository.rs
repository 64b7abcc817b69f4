//! User repository implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QuerySelect, Select,
};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        find_by_id(&self.db, id).await
    }
}

pub(crate) async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
    UserEntity::find_by_id(id)
        .one(db)
        .await?
        .map(User::try_from)
        .transpose()
}

/// `SELECT ... FOR UPDATE` on a single user row.
fn select_for_update(id: i32) -> Select<UserEntity> {
    UserEntity::find_by_id(id).lock_exclusive()
}

/// Load a user and hold an exclusive row lock until the transaction ends.
pub(crate) async fn find_by_id_for_update<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<User>> {
    select_for_update(id)
        .one(db)
        .await?
        .map(User::try_from)
        .transpose()
}

/// Write back the mutable fields of `user`.
///
/// Password and creation time are owned by the auth service and left as stored.
pub(crate) async fn save<C: ConnectionTrait>(db: &C, user: &User) -> AppResult<User> {
    let active = ActiveModel {
        user_id: Unchanged(user.id),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        role: Set(user.role.to_string()),
        updated_at: Set(user.updated_at),
        ..Default::default()
    };

    let model = active.update(db).await?;
    User::try_from(model)
}
