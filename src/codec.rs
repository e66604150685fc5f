//! Payload encoding.
//!
//! Payloads are bincode over the serde data model. Unlike JSON it keeps
//! non-finite floats, non-string map keys and the bytes/string distinction
//! intact, so anything serde can describe round-trips unchanged.
//!
//! The byte layout is bincode's fixed-width little-endian format. Decoding
//! must consume the whole payload, so reading a value back as the wrong
//! type fails instead of yielding a prefix of it.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Serialize `value` into an opaque payload.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> StoreResult<Vec<u8>> {
    options().serialize(value).map_err(StoreError::Encode)
}

/// Decode the payload stored under `key`.
pub fn decode<T: DeserializeOwned>(key: &str, payload: &[u8]) -> StoreResult<T> {
    options().deserialize(payload).map_err(|source| StoreError::Decode {
        key: key.to_string(),
        source,
    })
}
