//!
//! The module broadcast attempt.
//!

///
/// The module broadcast attempt.
///
/// Lives only while the module is being broadcast. The manifest keeps the terminal
/// state and the transaction hash.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attempt {
    /// The creation transactions sent, including the rejected ones.
    pub submissions: usize,
    /// The resubmissions caused by gas-limit rejections.
    pub gas_retries: usize,
    /// The receipt queries made.
    pub polls: usize,
    /// The description of the last failure.
    pub last_error: Option<String>,
    /// The hash of the last accepted transaction.
    pub transaction_hash: Option<web3::types::H256>,
}
