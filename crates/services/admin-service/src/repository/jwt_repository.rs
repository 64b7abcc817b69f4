//! JWT session token repository.
//!
//! Tokens are issued elsewhere; this service only inspects and revokes them.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use super::entities::jwt_token::{self, Entity as JwtTokenEntity};
use common::AppResult;
use domain::JwtToken;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT token repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JwtRepository: Send + Sync {
    /// All tokens issued to a user, oldest first
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<JwtToken>>;

    /// Number of tokens issued to a user
    async fn count_by_user_id(&self, user_id: i32) -> AppResult<u64>;

    /// Delete every token of a user, returning how many were removed
    async fn delete_by_user_id(&self, user_id: i32) -> AppResult<u64>;
}

/// Concrete implementation of JwtRepository
pub struct JwtStore {
    db: DatabaseConnection,
}

impl JwtStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JwtRepository for JwtStore {
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<JwtToken>> {
        let models = JwtTokenEntity::find()
            .filter(jwt_token::Column::UserId.eq(user_id))
            .order_by_asc(jwt_token::Column::TokenId)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(JwtToken::from).collect())
    }

    async fn count_by_user_id(&self, user_id: i32) -> AppResult<u64> {
        let count = JwtTokenEntity::find()
            .filter(jwt_token::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn delete_by_user_id(&self, user_id: i32) -> AppResult<u64> {
        delete_by_user_id(&self.db, user_id).await
    }
}

pub(crate) async fn delete_by_user_id<C: ConnectionTrait>(db: &C, user_id: i32) -> AppResult<u64> {
    let result = JwtTokenEntity::delete_many()
        .filter(jwt_token::Column::UserId.eq(user_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
