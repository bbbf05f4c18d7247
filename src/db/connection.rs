/// Database connection management with connection pooling
///
/// Provides a thread-safe connection pool to the MediPal MySQL database.
/// The pool is created once at process start and closed at shutdown.

use crate::config::DbConfig;
use crate::error::Result;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection};
use std::sync::Arc;

/// Maximum number of database connections in the pool
const MAX_CONNECTIONS: u32 = 5;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: Arc<MySqlPool>,
}

impl Database {
    /// Connect to the configured MySQL endpoint
    ///
    /// # Arguments
    /// * `config` - Host, port, database name, and credentials
    ///
    /// # Returns
    /// * `Ok(Database)` - Pool established against the endpoint
    /// * `Err(MedipalError)` - If the server is unreachable or rejects the credentials
    ///
    /// # Examples
    /// ```no_run
    /// use medipal_db_lib::{Database, DbConfig};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let db = Database::connect(&DbConfig::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        // Configure MySQL options
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.database)
            .username(&config.user)
            .password(&config.password)
            .disable_statement_logging();

        // Create connection pool
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Round-trip a ping over a pooled connection
    ///
    /// Succeeds only if the endpoint is reachable and the credentials were
    /// accepted. The checked-out connection returns to the pool on both the
    /// success and failure paths.
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Close all connections in the pool
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
