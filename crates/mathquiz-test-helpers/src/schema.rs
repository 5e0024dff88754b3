use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const SQLITE_SCHEMA: &str = include_str!("sqlite.sql");

/// Creates the `questions` and `user_progress` tables on a fresh connection.
pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(SQLITE_SCHEMA).await?;
    Ok(())
}

/// Connects to a private in-memory database with the schema applied.
pub async fn memory_db() -> Result<DatabaseConnection, DbErr> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    setup_schema(&db).await?;
    Ok(db)
}
