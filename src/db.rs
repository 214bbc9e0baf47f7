//! Database connection helpers.
//!
//! This module wraps the Diesel connection pool and provides the unit-of-work
//! helper used by the repository: every call acquires a connection, runs the
//! work inside a transaction and hands the connection back to the pool.

use diesel::Connection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::{error, warn};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Settings applied to every SQLite connection handed out by the pool.
const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL; \
    PRAGMA synchronous = NORMAL; \
    PRAGMA foreign_keys = ON; \
    PRAGMA busy_timeout = 30000;";

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}

/// Runs `work` as a single unit of work.
///
/// The closure executes inside a transaction that is committed when it
/// returns `Ok` and rolled back when it returns `Err`. The connection goes
/// back to the pool when it is dropped, on every path out of this function.
pub fn with_connection<T, F>(pool: &DbPool, work: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T>,
{
    let mut pooled = get_connection(pool)?;
    let conn: &mut SqliteConnection = &mut pooled;

    conn.transaction::<T, RepositoryError, _>(work)
        .inspect_err(|e| warn!("Unit of work rolled back: {e}"))
}
