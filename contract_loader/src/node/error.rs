//!
//! The node client error.
//!

///
/// The node client error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// The JSON-RPC error code.
        code: i64,
        /// The JSON-RPC error message.
        message: String,
    },
    /// The HTTP transport failed.
    #[error("HTTP transport: {0}")]
    Http(#[from] reqwest::Error),
    /// The socket transport failed.
    #[error("IPC transport: {0}")]
    Io(#[from] std::io::Error),
    /// The request or response is not valid JSON of the expected shape.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The response carries neither a result nor an error.
    #[error("The response to `{0}` has no result")]
    MissingResult(String),
    /// The result does not fit the expected type.
    #[error("The `{method}` result {value} is out of range")]
    OutOfRange {
        /// The requested method.
        method: String,
        /// The received value.
        value: String,
    },
    /// The node closed the connection before answering.
    #[error("The connection is closed by the node")]
    Closed,
    /// The endpoint cannot be turned into a transport.
    #[error("Invalid endpoint `{0}`")]
    Endpoint(String),
}

impl Error {
    /// The message the node rejects transactions with when they exceed the block gas limit.
    pub const GAS_LIMIT_MESSAGE: &'static str = "exceeds block gas limit";

    ///
    /// Whether the node rejected the transaction because of the block gas limit.
    ///
    pub fn is_gas_limit(&self) -> bool {
        match self {
            Self::Rpc { message, .. } => message
                .to_lowercase()
                .contains(Self::GAS_LIMIT_MESSAGE),
            _ => false,
        }
    }
}
