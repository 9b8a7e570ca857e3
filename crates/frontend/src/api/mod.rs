//! Transport client for the catalog REST backend.
//!
//! - `transport.rs`: the async seam the catalog core talks to
//! - `client.rs`: HTTP implementation over `gloo-net`
//! - `error.rs`: structured transport errors

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ApiClient, Credential};
pub use error::TransportError;
pub use transport::CatalogTransport;
