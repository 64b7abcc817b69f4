//! SalesSavvy Admin Service Library
//!
//! Administrative user management and order item queries over SeaORM.
//! The `salessavvy-admin` binary drives it from the command line; other
//! applications can embed it through [`AdminApp`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use crate::config::AdminServiceConfig;
use crate::infra::{Database, Persistence, UnitOfWork};
use crate::repository::JwtRepository;
use crate::service::{AdminUserManager, AdminUserService, OrderItemManager, OrderItemService};

/// Wired services sharing one connection pool.
#[derive(Clone)]
pub struct AdminApp {
    users: Arc<dyn AdminUserService>,
    order_items: Arc<dyn OrderItemService>,
    tokens: Arc<dyn JwtRepository>,
}

impl AdminApp {
    /// Connect using the given configuration, applying migrations if enabled.
    pub async fn connect(config: &AdminServiceConfig) -> Result<Self, DbErr> {
        let db = if config.run_migrations {
            Database::connect(&config.database).await?
        } else {
            Database::connect_without_migrations(&config.database).await?
        };
        Ok(Self::from_connection(db.get_connection()))
    }

    /// Wire services over an existing connection.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let order_items = Arc::new(OrderItemManager::new(uow.order_items()));
        let tokens = uow.tokens();
        let users = Arc::new(AdminUserManager::new(uow));

        Self {
            users,
            order_items,
            tokens,
        }
    }

    /// User administration operations
    pub fn users(&self) -> Arc<dyn AdminUserService> {
        self.users.clone()
    }

    /// Order item queries
    pub fn order_items(&self) -> Arc<dyn OrderItemService> {
        self.order_items.clone()
    }

    /// Session token lookups
    pub fn tokens(&self) -> Arc<dyn JwtRepository> {
        self.tokens.clone()
    }
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AdminServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for line in status_lines(&db.migration_status().await?) {
                println!("{}", line);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Render migration status as `[x] name` (applied) or `[ ] name` (pending).
pub fn status_lines(status: &[(String, bool)]) -> Vec<String> {
    status
        .iter()
        .map(|(name, applied)| {
            let marker = if *applied { "[x]" } else { "[ ]" };
            format!("{} {}", marker, name)
        })
        .collect()
}
