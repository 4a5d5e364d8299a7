//!
//! Validate the arguments passed from user, checking invariants that are not
//! expressed in the type system.
//!

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use itertools::Itertools;

use super::Arguments;

/// The account address pattern.
pub const ADDRESS_PATTERN: &str = r"^0x[0-9a-fA-F]{40}$";

impl Arguments {
    ///
    /// Validate the arguments passed from user, producing the loader configuration.
    ///
    pub fn validate(self) -> anyhow::Result<contract_loader::Config> {
        if self.verbose && self.quiet {
            anyhow::bail!("Verbose and quiet modes are mutually exclusive");
        }

        let root = match self.chdir {
            Some(chdir) => {
                if !chdir.is_dir() {
                    anyhow::bail!("Application root {chdir:?} is not a directory");
                }
                chdir
            }
            None => PathBuf::from("."),
        };

        let sources: Vec<PathBuf> = self
            .source
            .iter()
            .map(|source| resolve(root.as_path(), source.as_path()))
            .collect();
        let missing = sources.iter().filter(|source| !source.is_dir()).collect::<Vec<_>>();
        if !missing.is_empty() {
            anyhow::bail!(
                "Source directories not found: {}",
                missing
                    .into_iter()
                    .map(|source| format!("{source:?}"))
                    .join(", ")
            );
        }

        let endpoint = {
            let socket = resolve(root.as_path(), Path::new(self.rpc_address.as_str()));
            if contract_loader::node::endpoint::Endpoint::is_socket(socket.as_path()) {
                contract_loader::Endpoint::Ipc(socket)
            } else {
                self.rpc_address.parse::<contract_loader::Endpoint>()?
            }
        };

        let creator = self
            .creator
            .as_deref()
            .map(|creator| parse_address("creator", creator))
            .transpose()?;
        let registry = self
            .registry
            .as_deref()
            .map(|registry| parse_address("registry", registry))
            .transpose()?;
        match (self.strategy, registry) {
            (contract_loader::Strategy::Registry, None) => {
                anyhow::bail!("The `registry` strategy requires `--registry <ADDRESS>`")
            }
            (contract_loader::Strategy::Macros, Some(_)) => {
                anyhow::bail!("The registry address is only used by the `registry` strategy")
            }
            _ => {}
        }

        if !self.blocktime.is_finite() || self.blocktime < 0.0 {
            anyhow::bail!("Invalid block time `{}`", self.blocktime);
        }
        if self.tries == 0 {
            anyhow::bail!("At least one receipt poll is required");
        }

        let broadcaster = contract_loader::BroadcasterConfig {
            gas: web3::types::U256::from(self.gas),
            max_gas: web3::types::U256::from(self.max_gas.unwrap_or(self.gas)),
            blocktime: Duration::from_secs_f64(self.blocktime),
            tries: self.tries,
            gas_retries: self.gas_retries,
        };

        Ok(contract_loader::Config {
            sources,
            is_recursive: !self.flat,
            build: resolve(root.as_path(), self.build.as_path()),
            endpoint,
            creator,
            strategy: self.strategy,
            registry,
            contract: self.contract,
            broadcaster,
            serpent: self.serpent.unwrap_or_else(|| {
                PathBuf::from(contract_loader::SerpentCompiler::DEFAULT_EXECUTABLE_NAME)
            }),
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

///
/// Resolves the path against the application root.
///
fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

///
/// Parses the `0x`-prefixed account address.
///
fn parse_address(name: &str, value: &str) -> anyhow::Result<web3::types::Address> {
    let pattern = regex::Regex::new(ADDRESS_PATTERN)?;
    if !pattern.is_match(value) {
        anyhow::bail!("Invalid {name} address `{value}`: expected `0x` followed by 40 hexadecimal digits");
    }
    let bytes = hex::decode(&value[2..])?;
    Ok(web3::types::Address::from_slice(bytes.as_slice()))
}
