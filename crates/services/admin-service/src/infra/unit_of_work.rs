//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and owns the transaction lifecycle:
//! begin, run the caller's work, commit on success, roll back on error.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};

use common::{AppError, AppResult};
use domain::User;

use crate::repository::{
    self, JwtRepository, JwtStore, OrderItemRepository, OrderItemStore, UserRepository, UserStore,
};

/// Boxed future returned by transactional work.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction management.
/// Not mockable directly due to the generic method; tests provide their own
/// implementation around mocked repositories.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get JWT token repository
    fn tokens(&self) -> Arc<dyn JwtRepository>;

    /// Get order item repository
    fn order_items(&self) -> Arc<dyn OrderItemRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed when the closure returns `Ok` and rolled
    /// back when it returns `Err`. Uses ReadCommitted isolation.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'a> {
        TxUserRepository { txn: self.txn }
    }

    /// Get JWT token repository for this transaction
    pub fn tokens(&self) -> TxJwtRepository<'a> {
        TxJwtRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    jwt_repo: Arc<JwtStore>,
    order_item_repo: Arc<OrderItemStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            jwt_repo: Arc::new(JwtStore::new(db.clone())),
            order_item_repo: Arc::new(OrderItemStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn tokens(&self) -> Arc<dyn JwtRepository> {
        self.jwt_repo.clone()
    }

    fn order_items(&self) -> Arc<dyn OrderItemRepository> {
        self.order_item_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        let outcome = f(TransactionContext::new(&txn)).await;

        match outcome {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    /// Find user by ID, locking the row for the rest of the transaction
    pub async fn find_by_id_for_update(&self, id: i32) -> AppResult<Option<User>> {
        repository::find_user_for_update(self.txn, id).await
    }

    /// Persist the mutable fields of a user
    pub async fn save(&self, user: &User) -> AppResult<User> {
        repository::save_user(self.txn, user).await
    }
}

/// Transaction-aware JWT token repository.
pub struct TxJwtRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxJwtRepository<'_> {
    /// Delete every token of a user, returning how many were removed
    pub async fn delete_by_user_id(&self, user_id: i32) -> AppResult<u64> {
        repository::delete_tokens_by_user_id(self.txn, user_id).await
    }
}

/// Run a block of repository calls inside a transaction.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(move |$ctx| Box::pin(async move { $body })).await
    };
}
