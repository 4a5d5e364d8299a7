//!
//! The broadcaster configuration.
//!

use std::time::Duration;

///
/// The broadcaster configuration.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The gas allowance of every creation transaction.
    pub gas: web3::types::U256,
    /// The gas estimate at or above which a module can never be deployed.
    pub max_gas: web3::types::U256,
    /// The wait before each receipt query and each gas-limit resubmission.
    pub blocktime: Duration,
    /// The number of receipt queries per polling round.
    pub tries: usize,
    /// The number of resubmissions after gas-limit rejections.
    pub gas_retries: usize,
}

impl Config {
    /// The default gas allowance.
    pub const DEFAULT_GAS: u64 = 0x47e7c4;

    /// The default block time in seconds.
    pub const DEFAULT_BLOCKTIME: f64 = 12.0;

    /// The default number of receipt queries per polling round.
    pub const DEFAULT_TRIES: usize = 10;

    /// The default number of gas-limit resubmissions.
    pub const DEFAULT_GAS_RETRIES: usize = 32;
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gas: web3::types::U256::from(Self::DEFAULT_GAS),
            max_gas: web3::types::U256::from(Self::DEFAULT_GAS),
            blocktime: Duration::from_secs_f64(Self::DEFAULT_BLOCKTIME),
            tries: Self::DEFAULT_TRIES,
            gas_retries: Self::DEFAULT_GAS_RETRIES,
        }
    }
}
