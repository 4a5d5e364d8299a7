//!
//! The node endpoint.
//!

use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The node endpoint.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// The `host:port` HTTP endpoint.
    Http {
        /// The host name or IPv4 address.
        host: String,
        /// The TCP port.
        port: u16,
    },
    /// The Unix domain socket endpoint.
    Ipc(PathBuf),
}

impl Endpoint {
    /// The `host:port` pattern.
    pub const HTTP_PATTERN: &'static str =
        r"^(?:(?P<ip>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})|(?P<host>[A-Za-z0-9_][\w.-]*)):(?P<port>\d{1,5})$";

    ///
    /// Whether `path` is an existing Unix domain socket.
    ///
    pub fn is_socket(path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|metadata| metadata.file_type().is_socket())
            .unwrap_or_default()
    }
}

impl std::str::FromStr for Endpoint {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let pattern = regex::Regex::new(Self::HTTP_PATTERN)
            .map_err(|error| Error::Configuration(error.to_string()))?;

        if let Some(captures) = pattern.captures(string) {
            let host = captures
                .name("ip")
                .or_else(|| captures.name("host"))
                .map(|host| host.as_str().to_owned())
                .unwrap_or_default();
            let port = captures
                .name("port")
                .and_then(|port| port.as_str().parse::<u16>().ok())
                .ok_or_else(|| {
                    Error::Configuration(format!("Invalid RPC address `{string}`: bad port"))
                })?;
            return Ok(Self::Http { host, port });
        }

        let path = PathBuf::from(string);
        if Self::is_socket(path.as_path()) {
            return Ok(Self::Ipc(path));
        }

        Err(Error::Configuration(format!(
            "Invalid RPC address `{string}`: expected `host:port` or a Unix domain socket path"
        )))
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { host, port } => write!(f, "http://{host}:{port}"),
            Self::Ipc(path) => write!(f, "ipc://{}", path.to_string_lossy()),
        }
    }
}
