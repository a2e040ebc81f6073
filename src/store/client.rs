// Store client - owns the libsql connection to the lexicon store
//
// One client holds one connection. Operations clone the connection handle
// out of the shared state; close() takes it, so a closed client stays
// closed and further operations fail with a typed error instead of
// touching a dead handle.

use libsql::params::IntoParams;
use libsql::{Builder, Connection, Database, Rows};
use parking_lot::RwLock;

use super::schema;
use crate::config::StoreConfig;
use crate::util::run_async;

/// Error types for store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Store unreachable, credentials rejected, or configuration invalid
    #[error("Failed to connect to the store: {0}")]
    Connect(String),
    /// A statement failed to prepare, bind, or run
    #[error("Store query failed: {0}")]
    Query(String),
    /// A uniqueness constraint was violated
    #[error("Store constraint violated: {0}")]
    Constraint(String),
    /// The connection has been released
    #[error("Store connection is closed")]
    Closed,
}

struct ClientState {
    conn: Connection,
    // Kept so the database handle lives exactly as long as the connection.
    _db: Database,
}

/// Connection handle to the lexicon store.
///
/// Built from a [`StoreConfig`]: a plain path opens a local embedded
/// database file, a `libsql://` / `http(s)://` URL connects to a remote
/// sqld endpoint with the configured auth token.
pub struct StoreClient {
    state: RwLock<Option<ClientState>>,
    table: String,
}

impl StoreClient {
    /// Connect to the store described by `config` and initialize the schema.
    ///
    /// # Errors
    /// `StoreError::Connect` if the configuration is invalid or the store
    /// cannot be reached; `StoreError::Query` if schema setup fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        config
            .validate()
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        crate::debug!("Opening lexicon store at '{}'", config.url);
        let db = if config.is_remote() {
            Builder::new_remote(
                config.url.clone(),
                config.auth_token.clone().unwrap_or_default(),
            )
            .build()
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?
        } else {
            Builder::new_local(&config.url)
                .build()
                .await
                .map_err(|e| StoreError::Connect(e.to_string()))?
        };
        let conn = db
            .connect()
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        let client = Self {
            state: RwLock::new(Some(ClientState { conn, _db: db })),
            table: config.table.clone(),
        };
        schema::initialize_schema(&client).await?;
        Ok(client)
    }

    /// Synchronous variant of [`StoreClient::connect`] for callers without
    /// a runtime of their own.
    pub fn connect_blocking(config: &StoreConfig) -> Result<Self, StoreError> {
        run_async(Self::connect(config))
    }

    /// Name of the entries table this client operates on.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Run a statement that returns no rows; yields the affected row count.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<u64, StoreError> {
        let conn = self.connection()?;
        conn.execute(sql, params).await.map_err(classify)
    }

    /// Run a statement that returns rows.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<Rows, StoreError> {
        let conn = self.connection()?;
        conn.query(sql, params).await.map_err(classify)
    }

    /// Release the connection and database handle.
    ///
    /// Idempotent: calling close on an already-closed client does nothing.
    /// Dropping the client releases the handles as well, so explicit close
    /// is only needed to fail fast on later operations.
    pub fn close(&self) {
        if self.state.write().take().is_some() {
            crate::debug!("Lexicon store connection closed");
        }
    }

    /// True once [`StoreClient::close`] has run.
    pub fn is_closed(&self) -> bool {
        self.state.read().is_none()
    }

    fn connection(&self) -> Result<Connection, StoreError> {
        self.state
            .read()
            .as_ref()
            .map(|state| state.conn.clone())
            .ok_or(StoreError::Closed)
    }
}

/// Map a driver error, classifying uniqueness violations separately so
/// callers can tell a constraint hit from a transient fault.
fn classify(err: libsql::Error) -> StoreError {
    let msg = err.to_string();
    if msg.contains("UNIQUE constraint failed") || msg.contains("SQLITE_CONSTRAINT") {
        StoreError::Constraint(msg)
    } else {
        StoreError::Query(msg)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
