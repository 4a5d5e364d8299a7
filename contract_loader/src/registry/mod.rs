//!
//! The registry population transactions.
//!


use std::path::Path;
use std::path::PathBuf;

use sha3::Digest;

use crate::address::BYTE_LENGTH_ADDRESS;
use crate::address::BYTE_LENGTH_FIELD;
use crate::error::Error;
use crate::module::Module;
use crate::node::transaction::Transaction;

/// The registry file name.
pub const FILE_NAME: &str = "registry_txs.json";

/// The registry registration method signature.
pub const REGISTER_SIGNATURE: &str = "register(bytes32,address)";

///
/// Returns a `keccak256` selector of the specified contract method.
///
pub fn selector(signature: &str) -> [u8; 4] {
    let hash_bytes = sha3::Keccak256::digest(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash_bytes[..4]);
    selector
}

///
/// Encodes the `register(bytes32,address)` calldata binding the shortcut to the address.
///
/// The shortcut is left-aligned in its word and the address is right-aligned.
///
pub fn register_calldata(
    shortcut: &str,
    address: &web3::types::Address,
) -> Result<Vec<u8>, Error> {
    if shortcut.len() > BYTE_LENGTH_FIELD {
        return Err(Error::Configuration(format!(
            "Shortcut `{shortcut}` is longer than {BYTE_LENGTH_FIELD} bytes and cannot be registered"
        )));
    }

    let mut calldata = Vec::with_capacity(4 + BYTE_LENGTH_FIELD * 2);
    calldata.extend_from_slice(&selector(REGISTER_SIGNATURE));

    let mut name = [0u8; BYTE_LENGTH_FIELD];
    name[..shortcut.len()].copy_from_slice(shortcut.as_bytes());
    calldata.extend_from_slice(&name);

    let mut word = [0u8; BYTE_LENGTH_FIELD];
    word[BYTE_LENGTH_FIELD - BYTE_LENGTH_ADDRESS..].copy_from_slice(address.as_bytes());
    calldata.extend_from_slice(&word);

    Ok(calldata)
}

///
/// Returns the transactions registering every module in the registry.
///
pub fn transactions(
    creator: web3::types::Address,
    registry: web3::types::Address,
    modules: &[Module],
) -> Result<Vec<Transaction>, Error> {
    modules
        .iter()
        .map(|module| {
            let address = module.address.ok_or_else(|| {
                Error::Configuration(format!(
                    "Module `{}` has no address allocated",
                    module.shortcut
                ))
            })?;
            let calldata = register_calldata(module.shortcut.as_str(), &address)?;
            Ok(Transaction::call(creator, registry, calldata, None))
        })
        .collect()
}

///
/// Writes the registry transactions to the build directory.
///
pub fn write(directory: &Path, transactions: &[Transaction]) -> Result<PathBuf, Error> {
    let path = directory.join(FILE_NAME);
    let json = serde_json::to_string_pretty(transactions)
        .map_err(|error| Error::io(path.as_path(), error.into()))?;
    std::fs::write(path.as_path(), json).map_err(|error| Error::io(path.as_path(), error))?;
    Ok(path)
}
