// Persistent entry storage over Turso/libsql.
//
// - `client`: the owned connection handle with typed errors and idempotent close
// - `schema`: entries table creation and versioned migrations
// - `entries`: wildcard match query and the atomic frequency upsert

mod client;
mod entries;
mod schema;

pub use client::{StoreClient, StoreError};
