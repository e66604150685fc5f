//! The store handle.
//!
//! [`Store`] bundles a path and a timeout. It holds no connection: every
//! call opens its own and releases it before returning, so handles are
//! cheap to clone and safe to use from many threads or processes at once.
//!
//! The free functions [`load`], [`load_many`] and [`store`] take the path
//! and timeout directly for one-off calls.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::storage::{reader, writer};

/// Handle to a file-backed key/value store.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Handle for the store at `path` with the default timeout.
    ///
    /// Nothing is created on disk until the first [`Store::store`].
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(StoreConfig::new(path))
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Override how long calls wait for a contended store.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Whether the backing file exists yet.
    pub fn exists(&self) -> StoreResult<bool> {
        Ok(self.config.path.try_exists()?)
    }

    /// Load the value stored under `key`, or `None` if it was never stored.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let mut values = reader::read_values(&self.config, &[key])?;
        Ok(values.pop().flatten())
    }

    /// Load several keys at once.
    ///
    /// The result has one entry per key, in input order, with `None` for
    /// absent keys. One read transaction covers the whole call, which makes
    /// this cheaper than repeated [`Store::load`] calls.
    pub fn load_many<K, T>(&self, keys: &[K]) -> StoreResult<Vec<Option<T>>>
    where
        K: AsRef<str>,
        T: DeserializeOwned,
    {
        reader::read_values(&self.config, keys)
    }

    /// Insert `value` under `key`.
    ///
    /// Never overwrites: an existing key fails with
    /// [`StoreError::DuplicateKey`](crate::StoreError::DuplicateKey).
    pub fn store<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        writer::insert_value(&self.config, key, value)
    }
}

/// Load a single key from the store at `path`.
pub fn load<T, P>(path: P, key: &str, timeout: Duration) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Store::open(path).with_timeout(timeout).load(key)
}

/// Load several keys from the store at `path`, in input order.
pub fn load_many<K, T, P>(path: P, keys: &[K], timeout: Duration) -> StoreResult<Vec<Option<T>>>
where
    K: AsRef<str>,
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    Store::open(path).with_timeout(timeout).load_many(keys)
}

/// Insert `value` under `key` in the store at `path`.
pub fn store<T, P>(path: P, key: &str, value: &T, timeout: Duration) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    Store::open(path).with_timeout(timeout).store(key, value)
}
