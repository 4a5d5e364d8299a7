//!
//! The module confirmation state.
//!

///
/// The module confirmation state.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum State {
    /// Not submitted yet.
    #[default]
    Pending,
    /// The creation transaction has been accepted by the node.
    Submitted,
    /// The creation transaction is included and the deployed code is verified.
    Confirmed,
    /// The module can never be deployed as it is.
    Aborted,
    /// Carried over from the previous build without redeploying.
    Reused,
}

impl State {
    ///
    /// Whether the module code is known to be on chain.
    ///
    pub fn is_deployed(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Reused)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Submitted => write!(f, "SUBMITTED"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Aborted => write!(f, "ABORTED"),
            Self::Reused => write!(f, "REUSED"),
        }
    }
}
