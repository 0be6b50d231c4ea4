use sqlx::migrate::MigrateDatabase;
use sqlx::{Sqlite, SqlitePool};

/// Connect to the SQLite database, creating the file and the schema on first
/// startup.
pub async fn init_db(database_url: &str) -> anyhow::Result<SqlitePool> {
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        Sqlite::create_database(database_url).await?;
    }

    let pool = SqlitePool::connect(database_url).await?;
    setup_schema(&pool).await?;

    Ok(pool)
}

async fn setup_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    // AUTOINCREMENT keeps rowids monotonic, so an id is never reused after
    // its row is deleted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vacation_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// A fresh in-memory database with a unique name per call, so tests never
/// share state.
#[cfg(test)]
pub async fn init_test_db() -> anyhow::Result<SqlitePool> {
    let test_id = uuid::Uuid::new_v4().to_string();
    let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);
    init_db(&db_url).await
}
