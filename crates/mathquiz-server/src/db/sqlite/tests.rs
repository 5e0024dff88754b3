use super::MIGRATIONS;

use crate::db;
use crate::db::error::DbError;
use diesel::migration::MigrationVersion;
use diesel::prelude::*;
use diesel::sql_query;
use diesel_migrations::MigrationHarness;
use mathquiz_test_helpers::{SqliteDb, TestDb};
use test_log::test;
use url::Url;

fn revert_all_migrations(conn: &'_ mut SqliteConnection) -> Result<Vec<MigrationVersion<'_>>, DbError> {
    conn.revert_all_migrations(MIGRATIONS)
        .map_err(|err| DbError::MigrationFailed(format!("{err}")))
}

#[test]
fn test_migrations() {
    let db = SqliteDb::new().unwrap();
    let db_uri = db.db_uri();
    let db_uri = db_uri.as_ref();
    let mut conn = SqliteConnection::establish(db_uri).unwrap();
    // Twice, so reverting leaves nothing behind
    for _ in 0..2 {
        let migrations = db::run_migrations(&mut conn, MIGRATIONS).unwrap();

        let mut conn = SqliteConnection::establish(db_uri).unwrap();
        let query = sql_query("SELECT id, topic, wrong_options FROM questions");
        query.clone().execute(&mut conn).unwrap();
        sql_query("SELECT id, question_id, user_answer FROM user_progress")
            .execute(&mut conn)
            .unwrap();

        let mut reverted_migrations = revert_all_migrations(&mut conn).unwrap();
        reverted_migrations.reverse();
        assert_eq!(migrations, reverted_migrations);

        query.execute(&mut conn).unwrap_err();
    }
}

#[test]
fn test_migration_from_url() {
    let db = SqliteDb::new().unwrap();
    let url = Url::parse(&db.db_uri()).unwrap();

    let applied = db::migration(&url).unwrap();
    assert_eq!(applied.len(), 1);
    assert!(db::migration(&url).unwrap().is_empty());

    let unknown = Url::parse("postgres://localhost/quiz").unwrap();
    assert!(matches!(db::migration(&unknown), Err(DbError::UnknownDbType(_))));
}
