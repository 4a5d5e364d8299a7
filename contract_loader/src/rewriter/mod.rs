//!
//! The intra-application reference rewriter.
//!

pub mod import;
pub mod macros;
pub mod registry;
pub mod strategy;


use crate::error::Error;
use crate::module::Module;
use crate::shortcut::ShortcutTable;

use self::import::Import;
use self::import::ImportParser;

///
/// The intra-application reference rewriter.
///
/// Every strategy replaces each import line with a binding of the alias and passes
/// all other lines through byte for byte.
///
pub trait Rewriter {
    ///
    /// Returns the module source with the imports rewritten.
    ///
    fn rewrite(&self, module: &Module, shortcuts: &ShortcutTable) -> Result<String, Error>;
}

///
/// Runs a single forward pass over the module lines, replacing the imports with the
/// bindings returned by `bind`.
///
pub fn rewrite_imports<F>(
    parser: &ImportParser,
    module: &Module,
    shortcuts: &ShortcutTable,
    bind: F,
) -> Result<String, Error>
where
    F: Fn(&Import, &web3::types::Address) -> String,
{
    let mut preprocessed = String::with_capacity(module.source.len());
    for (index, line) in module.source.split_inclusive('\n').enumerate() {
        let import = match parser.parse(line) {
            Some(import) => import,
            None => {
                preprocessed.push_str(line);
                continue;
            }
        };

        let address = shortcuts
            .get(import.shortcut)
            .ok_or_else(|| Error::UnresolvedImport {
                module: module.shortcut.clone(),
                shortcut: import.shortcut.to_owned(),
                line: index + 1,
            })?;
        preprocessed.push_str(bind(&import, address).as_str());
        preprocessed.push_str(self::import::strip_terminator(line).1);
    }
    Ok(preprocessed)
}

///
/// Formats the address the way the contract sources spell it.
///
pub fn address_literal(address: &web3::types::Address) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}
