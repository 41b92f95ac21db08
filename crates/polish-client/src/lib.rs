//! # polish-client
//!
//! Generation client for the backend relay: wire protocol, an HTTP
//! transport with retry and backoff, and concurrent batch fan-out.
//!
//! The relay itself holds the model credentials; this client only ever
//! talks to the relay endpoint configured in [`polish_core::config`].

pub mod client;
pub mod protocol;
pub mod transport;

pub use client::RewriteClient;
pub use protocol::{BackendResponse, RewriteRequest};
pub use transport::{HttpTransport, RewriteTransport};
