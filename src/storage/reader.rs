//! Read path.
//!
//! Lookups open the store read-only, so a missing file is reported as
//! "every key absent" and is never created as a side effect. All keys of
//! one call are fetched inside a single read transaction; payloads are
//! decoded only after the connection has been released.

use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;

use super::schema::{open_read_only, table_exists};
use crate::codec;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Look up `keys` in input order, decoding each present payload into `T`.
///
/// The result always has one entry per input key.
#[tracing::instrument(skip_all, fields(path = %config.path.display(), keys = keys.len()))]
pub fn read_values<K, T>(config: &StoreConfig, keys: &[K]) -> StoreResult<Vec<Option<T>>>
where
    K: AsRef<str>,
    T: DeserializeOwned,
{
    let payloads = read_payloads(config, keys)?;

    keys.iter()
        .zip(payloads)
        .map(|(key, payload)| {
            payload
                .map(|bytes| codec::decode(key.as_ref(), &bytes))
                .transpose()
        })
        .collect()
}

/// Fetch raw payloads for `keys` without decoding them.
pub fn read_payloads<K: AsRef<str>>(
    config: &StoreConfig,
    keys: &[K],
) -> StoreResult<Vec<Option<Vec<u8>>>> {
    if !config.path.try_exists()? {
        tracing::debug!("Store does not exist yet, all keys absent");
        return Ok(vec![None; keys.len()]);
    }

    let sqlite = |err: rusqlite::Error| {
        StoreError::from_sqlite(err, &config.path, config.timeout, None)
    };

    let mut conn = open_read_only(&config.path, config.timeout).map_err(sqlite)?;
    let tx = conn.transaction().map_err(sqlite)?;

    if !table_exists(&tx).map_err(sqlite)? {
        tracing::debug!("Store has no dict table yet, all keys absent");
        return Ok(vec![None; keys.len()]);
    }

    let payloads = fetch(&tx, keys).map_err(sqlite)?;
    tx.commit().map_err(sqlite)?;

    let found = payloads.iter().filter(|p| p.is_some()).count();
    tracing::debug!(found, missing = keys.len() - found, "Lookup complete");

    Ok(payloads)
}

/// A row whose `value` is NULL reads the same as a missing row.
fn fetch<K: AsRef<str>>(conn: &Connection, keys: &[K]) -> rusqlite::Result<Vec<Option<Vec<u8>>>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM dict WHERE key = ?1")?;
    keys.iter()
        .map(|key| {
            stmt.query_row([key.as_ref()], |row| row.get::<_, Option<Vec<u8>>>(0))
                .optional()
                .map(Option::flatten)
        })
        .collect()
}
