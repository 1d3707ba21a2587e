//! Musical timeline - decades of popular music, a song generator and the
//! HTTP proxies that forward generation requests to AI providers.
//!
//! The catalog and view modules are pure and synchronous; only the proxy and
//! the remote composer touch the network.

/// Decade dataset, video ids and genre colours
pub mod catalog;
/// Local template engine and the remote client
pub mod composer;
/// Environment-driven settings
pub mod config;
/// Error types and result aliases
pub mod errors;
/// `/generate-song` and `/generate-music` handlers
pub mod proxy;
/// Timeline and detail panel state
pub mod view;
