//!
//! The contract loader arguments.
//!

pub mod validation;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;

///
/// The contract loader arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the gas retries and the receipt polls.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the output completely.
    #[arg(short, long)]
    pub quiet: bool,

    /// The directories with the `.se` sources.
    #[arg(short, long, default_value = "src")]
    pub source: Vec<PathBuf>,

    /// Only takes the sources at the top level of each source directory.
    #[arg(long)]
    pub flat: bool,

    /// The build artifacts directory.
    #[arg(short, long, default_value = "build")]
    pub build: PathBuf,

    /// The node RPC address: `host:port` or a Unix domain socket path.
    #[arg(short, long, default_value = "localhost:8545")]
    pub rpc_address: String,

    /// The application root directory the relative paths are resolved against.
    #[arg(short = 'C', long)]
    pub chdir: Option<PathBuf>,

    /// The creator account. The node coinbase is used by default.
    #[arg(long)]
    pub creator: Option<String>,

    /// The import rewriting strategy: `macros` or `registry`.
    #[arg(long, default_value_t = contract_loader::Strategy::Macros)]
    pub strategy: contract_loader::Strategy,

    /// The registry contract address, required by the `registry` strategy.
    #[arg(long)]
    pub registry: Option<String>,

    /// Rebuilds only the contract and its dependents, reusing the rest from the previous manifest.
    #[arg(short, long)]
    pub contract: Option<String>,

    /// Path to the `serpent` executable.
    /// Is set to `serpent` by default.
    #[arg(long)]
    pub serpent: Option<PathBuf>,

    /// The gas allowance of every creation transaction.
    #[arg(long, default_value_t = contract_loader::BroadcasterConfig::DEFAULT_GAS)]
    pub gas: u64,

    /// The gas estimate at or above which a contract is not deployed.
    /// Is set to the gas allowance by default.
    #[arg(long)]
    pub max_gas: Option<u64>,

    /// The block time in seconds, waited before each receipt poll.
    #[arg(long, default_value_t = contract_loader::BroadcasterConfig::DEFAULT_BLOCKTIME)]
    pub blocktime: f64,

    /// The number of receipt polls before the confirmation timeout.
    #[arg(long, default_value_t = contract_loader::BroadcasterConfig::DEFAULT_TRIES)]
    pub tries: usize,

    /// The number of resubmissions after the block gas limit rejections.
    #[arg(long, default_value_t = contract_loader::BroadcasterConfig::DEFAULT_GAS_RETRIES)]
    pub gas_retries: usize,

    /// The confirmation timeout policy: `abort`, `prompt`, `poll:<N>`, or `resubmit:<N>`.
    #[arg(long, default_value_t = contract_loader::TimeoutPolicy::Prompt)]
    pub on_timeout: contract_loader::TimeoutPolicy,
}
