use sqlx::SqlitePool;

/// In-memory database with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    wb_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}
