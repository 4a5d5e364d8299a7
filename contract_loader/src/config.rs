//!
//! The contract loader configuration.
//!

use std::path::PathBuf;

use crate::broadcaster::config::Config as BroadcasterConfig;
use crate::node::endpoint::Endpoint;
use crate::rewriter::strategy::Strategy;

///
/// The contract loader configuration.
///
/// Produced by the validated command line arguments and never changed afterwards.
///
#[derive(Debug, Clone)]
pub struct Config {
    /// The source directories.
    pub sources: Vec<PathBuf>,
    /// Whether the source directories are searched recursively.
    pub is_recursive: bool,
    /// The build artifacts directory.
    pub build: PathBuf,
    /// The node endpoint.
    pub endpoint: Endpoint,
    /// The creator account. The node coinbase is used if unset.
    pub creator: Option<web3::types::Address>,
    /// The reference rewriting strategy.
    pub strategy: Strategy,
    /// The registry contract address.
    pub registry: Option<web3::types::Address>,
    /// The module to rebuild along with its dependents. Everything is built if unset.
    pub contract: Option<String>,
    /// The broadcaster configuration.
    pub broadcaster: BroadcasterConfig,
    /// The `serpent` executable path.
    pub serpent: PathBuf,
    /// Whether to print the polling details.
    pub verbose: bool,
    /// Whether to suppress the output.
    pub quiet: bool,
}

impl Config {
    /// The preprocessed sources subdirectory of the build directory.
    pub const PREPROCESSED_DIRECTORY: &'static str = "preprocessed";

    ///
    /// Returns the preprocessed sources directory.
    ///
    pub fn preprocessed_directory(&self) -> PathBuf {
        self.build.join(Self::PREPROCESSED_DIRECTORY)
    }
}
