//! Write path.
//!
//! An insert encodes the value first, then creates the file and table if
//! needed and adds the record inside one `IMMEDIATE` transaction. Taking
//! the write lock up front means the busy timeout covers the whole wait,
//! and a failed insert leaves nothing behind.

use rusqlite::{params, Connection, TransactionBehavior};
use serde::Serialize;

use super::schema::{initialize_schema, open_read_write};
use crate::codec;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Insert `value` under `key`.
///
/// Fails with [`StoreError::DuplicateKey`] if `key` is already present; the
/// existing record is left untouched.
#[tracing::instrument(skip(config, value), fields(path = %config.path.display()))]
pub fn insert_value<T>(config: &StoreConfig, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    let payload = codec::encode(value)?;
    insert_payload(config, key, &payload)
}

/// Insert an already encoded payload under `key`.
pub fn insert_payload(config: &StoreConfig, key: &str, payload: &[u8]) -> StoreResult<()> {
    let sqlite = |err: rusqlite::Error| {
        StoreError::from_sqlite(err, &config.path, config.timeout, Some(key))
    };

    let mut conn = open_read_write(&config.path, config.timeout).map_err(sqlite)?;
    let result = insert(&mut conn, key, payload).map_err(sqlite);

    match &result {
        Ok(()) => tracing::debug!(bytes = payload.len(), "Stored value"),
        Err(StoreError::DuplicateKey { .. }) => tracing::warn!("Key already exists, not overwriting"),
        Err(StoreError::Timeout { timeout, .. }) => {
            tracing::warn!(?timeout, "Timed out waiting for store lock");
        }
        Err(e) => tracing::error!(error = %e, "Failed to store value"),
    }

    result
}

fn insert(conn: &mut Connection, key: &str, payload: &[u8]) -> rusqlite::Result<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    initialize_schema(&tx)?;
    tx.execute(
        "INSERT INTO dict (key, value) VALUES (?1, ?2)",
        params![key, payload],
    )?;
    tx.commit()
}
