//! Filedrop core: an embeddable HTTP file server and its upload client.
//!
//! The `server` module maps a local directory onto the URL space `/` and
//! serves reads, uploads and deletes. The `client` module holds the blocking
//! transfer operations and the upload panel driving them.

pub mod client;
pub mod config;
pub mod logging;
pub mod server;
