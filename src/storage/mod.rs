//! SQLite storage layer for kvstash.
//!
//! Provides:
//! - Schema initialization and connection pragmas
//! - Read-only lookup path that never creates the store
//! - Transactional insert path that creates it on first use

pub mod reader;
pub mod schema;
pub mod writer;
