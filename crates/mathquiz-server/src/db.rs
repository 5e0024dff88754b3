pub(crate) mod error;
pub(crate) mod sqlite;

use diesel::Connection;
use diesel::SqliteConnection;
use diesel::backend::Backend;
use diesel::migration::{MigrationSource, MigrationVersion};
use diesel_migrations::MigrationHarness;
use url::Url;

use crate::db::error::DbError;

pub(crate) fn run_migrations<DB: Backend, C: MigrationHarness<DB>, S: MigrationSource<DB>>(
    conn: &mut C,
    source: S,
) -> Result<Vec<MigrationVersion<'static>>, DbError> {
    tracing::debug!("running migrations");
    match conn.run_pending_migrations(source) {
        Ok(versions) => Ok(versions.into_iter().map(|mv| mv.as_owned()).collect()),
        Err(err) => {
            tracing::error!(error = ?err, "failed to migrate db");
            Err(DbError::MigrationFailed(err.to_string()))
        }
    }
}

pub(crate) fn migration(url: &Url) -> Result<Vec<MigrationVersion<'static>>, DbError> {
    match url.scheme() {
        "sqlite" => {
            let mut conn = SqliteConnection::establish(url.as_str())?;
            run_migrations(&mut conn, sqlite::MIGRATIONS)
        }
        other => Err(DbError::UnknownDbType(other.to_string())),
    }
}
