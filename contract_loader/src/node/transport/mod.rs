//!
//! The JSON-RPC transports.
//!

pub mod http;
pub mod ipc;

use super::error::Error;

///
/// The JSON-RPC transport.
///
pub trait Transport {
    ///
    /// Sends the request object and returns the response object.
    ///
    fn send(&mut self, request: &serde_json::Value) -> Result<serde_json::Value, Error>;
}
