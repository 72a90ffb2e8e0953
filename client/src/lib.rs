//! JSON-over-HTTP transport and request-lifecycle primitives.
//!
//! This crate compiles on both native and wasm targets. The `ui` crate
//! builds its fetch hook on top of it, and the integration tests at
//! `tests/client` exercise it against a stub server.

pub mod fetch_client;
pub mod lifecycle;

pub use fetch_client::{FetchClient, FetchError, RequestConfig};
pub use lifecycle::{RequestLifecycle, run_cancellable};
