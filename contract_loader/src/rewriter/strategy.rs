//!
//! The reference rewriting strategy.
//!

use crate::error::Error;

use super::macros::MacroRewriter;
use super::registry::RegistryRewriter;
use super::Rewriter;

///
/// The reference rewriting strategy.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Strategy {
    /// Imports become address macros.
    #[default]
    Macros,
    /// Imports become registry lookups.
    Registry,
}

impl Strategy {
    ///
    /// Instantiates the rewriter of the strategy.
    ///
    pub fn rewriter(
        self,
        registry: Option<web3::types::Address>,
    ) -> Result<Box<dyn Rewriter>, Error> {
        match (self, registry) {
            (Self::Macros, _) => Ok(Box::new(MacroRewriter::default())),
            (Self::Registry, Some(registry)) => Ok(Box::new(RegistryRewriter::new(registry))),
            (Self::Registry, None) => Err(Error::Configuration(
                "The `registry` strategy requires the registry address".to_owned(),
            )),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "macros" => Ok(Self::Macros),
            "registry" => Ok(Self::Registry),
            string => anyhow::bail!(
                "Unknown strategy `{}`. Supported strategies: {}",
                string,
                [Self::Macros, Self::Registry]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Macros => write!(f, "macros"),
            Self::Registry => write!(f, "registry"),
        }
    }
}
