//!
//! The deployed contract module.
//!

pub mod state;

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

use self::state::State;

///
/// The deployed contract module.
///
/// Created by the source discovery and mutated by the successive build stages.
/// A failed stage marks the module instead of removing it.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// The source file path.
    pub path: PathBuf,
    /// The shortcut name, which is the file stem.
    pub shortcut: String,
    /// The raw source code.
    #[serde(skip)]
    pub source: String,
    /// The source code with the intra-application imports rewritten.
    #[serde(skip)]
    pub preprocessed: Option<String>,
    /// The compiled init code.
    pub bytecode: Option<web3::types::Bytes>,
    /// The precomputed creation address.
    pub address: Option<web3::types::Address>,
    /// The creator nonce the address is derived from.
    pub nonce: Option<u64>,
    /// The hash of the last submitted creation transaction.
    pub transaction_hash: Option<web3::types::H256>,
    /// The confirmation state.
    pub state: State,
}

impl Module {
    /// The source file extension.
    pub const EXTENSION: &'static str = "se";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, source: String) -> Result<Self, Error> {
        let shortcut = Self::shortcut(path.as_path())?;
        Ok(Self {
            path,
            shortcut,
            source,
            preprocessed: None,
            bytecode: None,
            address: None,
            nonce: None,
            transaction_hash: None,
            state: State::Pending,
        })
    }

    ///
    /// Derives the shortcut name from the source file name.
    ///
    pub fn shortcut(path: &Path) -> Result<String, Error> {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| Error::Configuration(format!("Source file {path:?} has no name")))
    }
}
