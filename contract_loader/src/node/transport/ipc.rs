//!
//! The Unix domain socket JSON-RPC transport.
//!

use std::io::BufReader;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::Path;

use super::Error;
use super::Transport;

///
/// The Unix domain socket JSON-RPC transport.
///
/// The node does not delimit its responses, so each one is read as the next
/// complete JSON value from the stream.
///
#[derive(Debug)]
pub struct Ipc {
    /// The buffered reading half, kept across requests.
    reader: BufReader<UnixStream>,
    /// The writing half.
    writer: UnixStream,
}

impl Ipc {
    ///
    /// Connects to the node socket.
    ///
    pub fn connect(path: &Path) -> Result<Self, Error> {
        let writer = UnixStream::connect(path)?;
        let reader = BufReader::new(writer.try_clone()?);
        Ok(Self { reader, writer })
    }
}

impl Transport for Ipc {
    fn send(&mut self, request: &serde_json::Value) -> Result<serde_json::Value, Error> {
        serde_json::to_writer(&mut self.writer, request)?;
        self.writer.flush()?;

        let mut responses =
            serde_json::Deserializer::from_reader(&mut self.reader).into_iter::<serde_json::Value>();
        match responses.next() {
            Some(response) => Ok(response?),
            None => Err(Error::Closed),
        }
    }
}
