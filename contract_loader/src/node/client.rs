//!
//! The JSON-RPC node client.
//!

use serde::de::DeserializeOwned;

use super::endpoint::Endpoint;
use super::error::Error;
use super::transaction::Receipt;
use super::transaction::Transaction;
use super::transport::http::Http;
use super::transport::ipc::Ipc;
use super::transport::Transport;
use super::Node;

///
/// The JSON-RPC node client.
///
pub struct Client {
    /// The request transport.
    transport: Box<dyn Transport>,
    /// The last request identifier.
    id: u64,
}

///
/// The JSON-RPC error object.
///
#[derive(Debug, serde::Deserialize)]
struct RpcError {
    /// The error code.
    code: i64,
    /// The error message.
    message: String,
}

impl Client {
    /// The block tag the state queries are made against.
    const BLOCK_LATEST: &'static str = "latest";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport, id: 0 }
    }

    ///
    /// Connects to the node with the transport selected by the endpoint.
    ///
    pub fn connect(endpoint: &Endpoint) -> Result<Self, Error> {
        let transport: Box<dyn Transport> = match endpoint {
            Endpoint::Http { host, port } => Box::new(Http::new(host.as_str(), *port)?),
            Endpoint::Ipc(path) => Box::new(Ipc::connect(path.as_path())?),
        };
        Ok(Self::new(transport))
    }

    ///
    /// Sends a request and extracts its result.
    ///
    fn request<R>(&mut self, method: &str, params: serde_json::Value) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.id += 1;
        let request = serde_json::json!({
            "jsonrpc": "2.0",
            "id": self.id,
            "method": method,
            "params": params,
        });

        let mut response = self.transport.send(&request)?;
        if let Some(error) = response.get_mut("error").filter(|error| !error.is_null()) {
            let error: RpcError = serde_json::from_value(error.take())?;
            return Err(Error::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        let result = response
            .get_mut("result")
            .map(serde_json::Value::take)
            .ok_or_else(|| Error::MissingResult(method.to_owned()))?;
        Ok(serde_json::from_value(result)?)
    }
}

impl Node for Client {
    fn coinbase(&mut self) -> Result<web3::types::Address, Error> {
        self.request("eth_coinbase", serde_json::json!([]))
    }

    fn transaction_count(&mut self, account: &web3::types::Address) -> Result<u64, Error> {
        let count: web3::types::U256 = self.request(
            "eth_getTransactionCount",
            serde_json::json!([account, Self::BLOCK_LATEST]),
        )?;
        if count > web3::types::U256::from(u64::MAX) {
            return Err(Error::OutOfRange {
                method: "eth_getTransactionCount".to_owned(),
                value: count.to_string(),
            });
        }
        Ok(count.as_u64())
    }

    fn send_transaction(
        &mut self,
        transaction: &Transaction,
    ) -> Result<web3::types::H256, Error> {
        self.request("eth_sendTransaction", serde_json::json!([transaction]))
    }

    fn estimate_gas(&mut self, transaction: &Transaction) -> Result<web3::types::U256, Error> {
        self.request("eth_estimateGas", serde_json::json!([transaction]))
    }

    fn transaction_receipt(
        &mut self,
        hash: &web3::types::H256,
    ) -> Result<Option<Receipt>, Error> {
        self.request("eth_getTransactionReceipt", serde_json::json!([hash]))
    }

    fn code(&mut self, address: &web3::types::Address) -> Result<Vec<u8>, Error> {
        let code: web3::types::Bytes = self.request(
            "eth_getCode",
            serde_json::json!([address, Self::BLOCK_LATEST]),
        )?;
        Ok(code.0)
    }
}
