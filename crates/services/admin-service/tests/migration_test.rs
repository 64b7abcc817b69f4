//! Integration tests for the migration commands against SQLite.

use admin_service_lib::infra::Database;
use admin_service_lib::status_lines;
use common::DatabaseConfig;

async fn open() -> Database {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::with_url("sqlite::memory:")
    };
    Database::connect(&config)
        .await
        .expect("Failed to open test database")
}

fn applied(status: &[(String, bool)]) -> Vec<bool> {
    status.iter().map(|(_, applied)| *applied).collect()
}

#[tokio::test]
async fn test_status_after_connect_lists_all_applied() {
    let db = open().await;
    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 4);
    assert_eq!(applied(&status), vec![true, true, true, true]);
    assert!(status_lines(&status).iter().all(|line| line.starts_with("[x] ")));
}

#[tokio::test]
async fn test_rollback_reverts_only_the_last_migration() {
    let db = open().await;
    db.rollback_migration().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(applied(&status), vec![true, true, true, false]);

    let lines = status_lines(&status);
    assert_eq!(
        lines[3],
        "[ ] m20240101_000004_create_order_items_table".to_string()
    );
    assert!(lines[0].starts_with("[x] m20240101_000001"));
}

#[tokio::test]
async fn test_fresh_reapplies_everything() {
    let db = open().await;
    db.rollback_migration().await.unwrap();
    db.rollback_migration().await.unwrap();

    db.fresh_migrations().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(applied(&status), vec![true, true, true, true]);
    db.ping().await.unwrap();
}

#[tokio::test]
async fn test_up_after_rollback_restores_schema() {
    let db = open().await;
    db.rollback_migration().await.unwrap();
    db.run_migrations().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(applied(&status), vec![true, true, true, true]);
}
