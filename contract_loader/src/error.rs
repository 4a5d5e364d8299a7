//!
//! The contract loader error.
//!

use std::path::PathBuf;

use crate::node::error::Error as NodeError;

///
/// The contract loader error.
///
/// Every variant halts the build at the module boundary. Only gas re-estimation and
/// receipt polling are retried, inside the broadcaster, before an error is surfaced.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid paths, endpoint, creator, or any other setting.
    #[error("Configuration: {0}")]
    Configuration(String),
    /// Two source files normalize to the same shortcut.
    #[error("Shortcut `{shortcut}` is defined by both {first:?} and {second:?}")]
    DuplicateShortcut {
        /// The duplicate shortcut.
        shortcut: String,
        /// The first source file.
        first: PathBuf,
        /// The second source file.
        second: PathBuf,
    },
    /// A module imports a shortcut absent from the shortcut table.
    #[error("Module `{module}` imports unknown shortcut `{shortcut}` at line {line}")]
    UnresolvedImport {
        /// The importing module shortcut.
        module: String,
        /// The unknown shortcut.
        shortcut: String,
        /// The 1-based line number.
        line: usize,
    },
    /// The module does not fit into a block even after re-estimation.
    #[error("Module `{shortcut}` exceeds the block gas limit: estimated {estimate} gas with the maximum of {maximum}, resubmitted {retries} times")]
    GasLimitExceeded {
        /// The module shortcut.
        shortcut: String,
        /// The last gas estimate.
        estimate: web3::types::U256,
        /// The configured maximum.
        maximum: web3::types::U256,
        /// The resubmissions made before giving up.
        retries: usize,
    },
    /// The node rejected the submission for a reason other than the block gas limit.
    #[error("Module `{shortcut}` submission failed: {error}")]
    UnrecognizedSubmission {
        /// The module shortcut.
        shortcut: String,
        /// The node error.
        error: NodeError,
    },
    /// No receipt appeared within the polling bound.
    #[error("Module `{shortcut}` transaction {transaction_hash:?} is not confirmed after {polls} polls")]
    ConfirmationTimeout {
        /// The module shortcut.
        shortcut: String,
        /// The last submitted transaction.
        transaction_hash: web3::types::H256,
        /// The number of receipt queries made.
        polls: usize,
    },
    /// A receipt exists, but the code at the computed address never matched the submitted code.
    #[error("Module `{shortcut}` code at {address:?} does not match transaction {transaction_hash:?}")]
    BytecodeMismatch {
        /// The module shortcut.
        shortcut: String,
        /// The computed address.
        address: web3::types::Address,
        /// The last submitted transaction.
        transaction_hash: web3::types::H256,
    },
    /// The compiler failed on the preprocessed source.
    #[error("Module `{shortcut}` compilation: {message}")]
    Compilation {
        /// The module shortcut.
        shortcut: String,
        /// The compiler output.
        message: String,
    },
    /// The node failed outside of a submission.
    #[error("Node: {0}")]
    Node(#[from] NodeError),
    /// A build artifact could not be read or written.
    #[error("File {path:?}: {error}")]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
}

impl Error {
    ///
    /// A shortcut constructor.
    ///
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
