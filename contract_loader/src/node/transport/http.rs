//!
//! The HTTP JSON-RPC transport.
//!

use std::str::FromStr;

use super::Error;
use super::Transport;

///
/// The HTTP JSON-RPC transport.
///
#[derive(Debug)]
pub struct Http {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The node URL.
    url: reqwest::Url,
}

impl Http {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(host: &str, port: u16) -> Result<Self, Error> {
        let url = format!("http://{host}:{port}");
        let url = reqwest::Url::from_str(url.as_str()).map_err(|_| Error::Endpoint(url))?;
        Ok(Self {
            http_client: reqwest::blocking::Client::new(),
            url,
        })
    }
}

impl Transport for Http {
    fn send(&mut self, request: &serde_json::Value) -> Result<serde_json::Value, Error> {
        let response = self
            .http_client
            .post(self.url.clone())
            .json(request)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response)
    }
}
