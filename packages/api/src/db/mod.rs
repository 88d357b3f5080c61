//! # Database module — PostgreSQL connection pool management
//!
//! Provides the shared PostgreSQL pool used by the server functions in this
//! crate. Gated behind `#[cfg(feature = "server")]` so client (WASM) builds
//! never pull in SQLx.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads the
//! [`ServerConfig`](crate::config::ServerConfig) and opens the pool.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
