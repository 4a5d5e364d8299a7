//!
//! The shortcut table.
//!


use std::collections::BTreeMap;

use crate::error::Error;
use crate::module::Module;

///
/// The shortcut table.
///
/// Maps every shortcut of the application to the precomputed address of its module.
/// Built once after the address allocation and read-only afterwards.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutTable {
    /// The shortcut addresses.
    entries: BTreeMap<String, web3::types::Address>,
}

impl ShortcutTable {
    ///
    /// Maps every shortcut to its module index, checking that no two modules share a shortcut.
    ///
    /// Needs no addresses, so it is run before any network activity.
    ///
    pub fn index(modules: &[Module]) -> Result<BTreeMap<String, usize>, Error> {
        let mut index = BTreeMap::new();
        for (position, module) in modules.iter().enumerate() {
            if let Some(first) = index.insert(module.shortcut.clone(), position) {
                return Err(Error::DuplicateShortcut {
                    shortcut: module.shortcut.clone(),
                    first: modules[first].path.clone(),
                    second: module.path.clone(),
                });
            }
        }
        Ok(index)
    }

    ///
    /// Builds the table from the modules with allocated addresses.
    ///
    pub fn build(modules: &[Module]) -> Result<Self, Error> {
        Self::index(modules)?;

        let entries = modules
            .iter()
            .map(|module| {
                module
                    .address
                    .map(|address| (module.shortcut.clone(), address))
                    .ok_or_else(|| {
                        Error::Configuration(format!(
                            "Module `{}` has no address allocated",
                            module.shortcut
                        ))
                    })
            })
            .collect::<Result<BTreeMap<String, web3::types::Address>, Error>>()?;
        Ok(Self { entries })
    }

    ///
    /// Returns the address of the shortcut.
    ///
    pub fn get(&self, shortcut: &str) -> Option<&web3::types::Address> {
        self.entries.get(shortcut)
    }
}
