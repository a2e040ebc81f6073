// Schema definition and migration system for the entries table
//
// The entries table name is configurable, so the DDL is assembled from the
// validated table name rather than kept as a static string.

use super::client::{StoreClient, StoreError};

/// Current schema version
pub(crate) const SCHEMA_VERSION: i32 = 2;

fn create_entries_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            word TEXT PRIMARY KEY,
            freq INTEGER NOT NULL DEFAULT 0 CHECK (freq >= 0),
            created_at TEXT NOT NULL
        )"
    )
}

/// Initialize the store schema.
///
/// Creates the entries table on a fresh store and runs any pending
/// migrations on an existing one. Called once per client, during connect.
pub(crate) async fn initialize_schema(client: &StoreClient) -> Result<(), StoreError> {
    // schema_version table must exist before the version can be checked
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY)",
            (),
        )
        .await?;

    let current_version = get_schema_version(client).await?;

    if current_version == 0 {
        // Fresh store
        crate::info!(
            "Initializing lexicon schema (version {}) in table '{}'",
            SCHEMA_VERSION,
            client.table()
        );
        client
            .execute(&create_entries_table_sql(client.table()), ())
            .await?;
        set_schema_version(client, SCHEMA_VERSION).await?;
    } else if current_version < SCHEMA_VERSION {
        crate::info!(
            "Migrating lexicon store from version {} to {}",
            current_version,
            SCHEMA_VERSION
        );
        run_migrations(client, current_version, SCHEMA_VERSION).await?;
        crate::info!("Lexicon store migration complete");
    } else {
        crate::debug!("Lexicon schema is up to date (version {})", current_version);
    }

    Ok(())
}

/// Get the current schema version. Returns 0 for a fresh store.
async fn get_schema_version(client: &StoreClient) -> Result<i32, StoreError> {
    let mut rows = client
        .query(
            "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
            (),
        )
        .await?;

    match rows.next().await.map_err(|e| StoreError::Query(e.to_string()))? {
        Some(row) => row
            .get::<i32>(0)
            .map_err(|e| StoreError::Query(e.to_string())),
        None => Ok(0),
    }
}

async fn set_schema_version(client: &StoreClient, version: i32) -> Result<(), StoreError> {
    client
        .execute(
            "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
            libsql::params![version],
        )
        .await?;
    Ok(())
}

/// Run migrations from one version to another, recording each step.
async fn run_migrations(
    client: &StoreClient,
    from_version: i32,
    to_version: i32,
) -> Result<(), StoreError> {
    for version in (from_version + 1)..=to_version {
        match version {
            2 => migrate_v1_to_v2(client).await?,
            _ => {
                crate::debug!("No migration needed for version {}", version);
            }
        }
        set_schema_version(client, version).await?;
    }
    Ok(())
}

/// Migrate from schema version 1 to 2.
/// Adds the created_at column to the entries table; pre-existing rows get
/// an empty timestamp.
async fn migrate_v1_to_v2(client: &StoreClient) -> Result<(), StoreError> {
    crate::info!(
        "Running migration v1 -> v2: adding created_at column to '{}'",
        client.table()
    );
    client
        .execute(
            &format!(
                "ALTER TABLE {} ADD COLUMN created_at TEXT NOT NULL DEFAULT ''",
                client.table()
            ),
            (),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
