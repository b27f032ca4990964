//! Connection options and the connect helper.
//!
//! The crate only issues reads and writes through a caller-supplied
//! connection; this module exists so hosts (and the tests) share one way of
//! opening that connection.

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::Result;

/// In-memory `SQLite` URL used by the tests and local runs.
///
/// Note: every pooled connection to `sqlite::memory:` sees its own private
/// database, so in-memory usage must pin the pool to a single connection.
pub const SQLITE_MEMORY_URL: &str = "sqlite::memory:";

/// Pool tuning applied on top of the database URL.
#[derive(Clone, Debug)]
pub struct DbOpts {
    pub max_connections: u32,
    pub connect_timeout: Duration,
    /// Statement logging through the sqlx tracing integration.
    pub sqlx_logging: bool,
}

impl Default for DbOpts {
    fn default() -> Self {
        Self {
            max_connections: 5,
            connect_timeout: Duration::from_secs(5),
            sqlx_logging: false,
        }
    }
}

impl DbOpts {
    /// Options for an in-memory database: a single pooled connection, so
    /// all queries see the same data.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            ..Self::default()
        }
    }
}

/// Open a pooled connection to `url`.
///
/// # Errors
/// Returns [`crate::SearchError::Db`] when the store is unreachable or the
/// URL is not accepted by the driver.
pub async fn connect(url: &str, opts: &DbOpts) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .max_connections(opts.max_connections)
        .connect_timeout(opts.connect_timeout)
        .sqlx_logging(opts.sqlx_logging);
    let conn = Database::connect(options).await?;
    tracing::debug!(max_connections = opts.max_connections, "database connection established");
    Ok(conn)
}
