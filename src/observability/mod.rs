//! Observability infrastructure.
//!
//! The library itself only emits `tracing` events; binaries and tests
//! install a subscriber through [`tracing::init_tracing`] or
//! [`tracing::init_test_tracing`].

pub mod tracing;
