//! Admin user service - Handles administrative changes to user accounts.
//!
//! Every successful modification revokes the user's JWT sessions so the new
//! username, email or role takes effect on the next login.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{User, UserChanges};

use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Admin user service trait for dependency injection.
#[async_trait]
pub trait AdminUserService: Send + Sync {
    /// Update username, email and/or role, then revoke all session tokens.
    ///
    /// `None` or an empty string leaves a field unchanged. Tokens are revoked
    /// even when nothing changed. Runs as a single transaction.
    async fn modify_user(
        &self,
        user_id: i32,
        username: Option<String>,
        email: Option<String>,
        role: Option<String>,
    ) -> AppResult<User>;

    /// Get user by ID
    async fn get_user_by_id(&self, user_id: i32) -> AppResult<User>;
}

/// Concrete implementation of AdminUserService using Unit of Work.
pub struct AdminUserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AdminUserManager<U> {
    /// Create new admin user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AdminUserService for AdminUserManager<U> {
    async fn modify_user(
        &self,
        user_id: i32,
        username: Option<String>,
        email: Option<String>,
        role: Option<String>,
    ) -> AppResult<User> {
        let user = with_transaction!(self.uow, |ctx| {
            let mut user = ctx
                .users()
                .find_by_id_for_update(user_id)
                .await?
                .ok_or_not_found()?;

            let changes = UserChanges::parse(username, email, role).map_err(|e| {
                tracing::warn!(user_id, error = %e, "Rejected user modification");
                AppError::from(e)
            })?;
            if changes.is_empty() {
                tracing::debug!(user_id, "No field changes, revoking sessions only");
            }
            user.apply(changes);

            let revoked = ctx.tokens().delete_by_user_id(user_id).await?;
            tracing::debug!(user_id, revoked, "Session tokens revoked");

            let saved = ctx.users().save(&user).await?;
            Ok(saved)
        })?;

        tracing::info!(user_id, role = %user.role, "User modified");
        Ok(user)
    }

    async fn get_user_by_id(&self, user_id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::infra::{TransactionContext, TxFuture};
    use crate::repository::{
        JwtRepository, MockJwtRepository, MockOrderItemRepository, MockUserRepository,
        OrderItemRepository, UserRepository,
    };
    use domain::Role;

    fn create_test_user(id: i32) -> User {
        User {
            id,
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hashed".to_string(),
            role: Role::Customer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Test Unit of Work wrapping mocked repositories.
    ///
    /// Read paths only; `modify_user` is covered against SQLite in
    /// `tests/admin_user_service_test.rs`.
    struct TestUnitOfWork {
        user_repo: Arc<MockUserRepository>,
    }

    impl TestUnitOfWork {
        fn new(user_repo: MockUserRepository) -> Self {
            Self {
                user_repo: Arc::new(user_repo),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.user_repo.clone()
        }

        fn tokens(&self) -> Arc<dyn JwtRepository> {
            Arc::new(MockJwtRepository::new())
        }

        fn order_items(&self) -> Arc<dyn OrderItemRepository> {
            Arc::new(MockOrderItemRepository::new())
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    #[tokio::test]
    async fn test_get_user_by_id_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(create_test_user(id))));

        let service = AdminUserManager::new(Arc::new(TestUnitOfWork::new(repo)));
        let user = service.get_user_by_id(7).await.unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = AdminUserManager::new(Arc::new(TestUnitOfWork::new(repo)));
        let result = service.get_user_by_id(404).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
