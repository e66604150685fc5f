//! kvstash: a file-backed key/value store on SQLite.
//!
//! Values are serialized with serde and kept as opaque payloads in a single
//! `dict(key TEXT PRIMARY KEY, value BLOB)` table. Any number of processes
//! may point at the same file; SQLite's own locking keeps them consistent.
//!
//! # Architecture
//!
//! - **Lazy**: lookups against a missing file report every key as absent
//!   and never create it; the first insert creates file and table
//! - **Insert-only**: storing an existing key fails, it never overwrites
//! - **Scoped connections**: every call opens and releases its own
//!   connection, bounded by a configurable busy timeout
//!
//! # Modules
//!
//! - [`codec`]: Payload encoding
//! - [`config`]: Store configuration and defaults
//! - [`error`]: Error taxonomy
//! - [`observability`]: Tracing setup
//! - [`storage`]: SQLite schema, read and write paths
//! - [`store`]: The `Store` handle and free functions
//! - [`value`]: Dynamic value type
//!
//! # Example
//!
//! ```no_run
//! use kvstash::Store;
//!
//! # fn main() -> Result<(), kvstash::StoreError> {
//! let store = Store::open("cache.db");
//! store.store("answer", &42_i64)?;
//! let answer: Option<i64> = store.load("answer")?;
//! assert_eq!(answer, Some(42));
//! # Ok(())
//! # }
//! ```

// Lint configuration
#![warn(clippy::all)]
#![allow(
    clippy::module_name_repetitions,    // store::StoreConfig is fine
    clippy::must_use_candidate,         // Not all functions need #[must_use]
    clippy::missing_errors_doc,         // Error docs can be verbose
    clippy::needless_raw_string_hashes  // r#""# is fine for SQL
)]

pub mod codec;
pub mod config;
pub mod error;
pub mod observability;
pub mod storage;
pub mod store;
pub mod value;

pub use config::{StoreConfig, DEFAULT_TIMEOUT};
pub use error::{StoreError, StoreResult};
pub use store::{load, load_many, store, Store};
pub use value::Value;
