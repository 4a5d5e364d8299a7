//!
//! The address macro rewriting strategy.
//!

use crate::error::Error;
use crate::module::Module;
use crate::shortcut::ShortcutTable;

use super::import::ImportParser;
use super::Rewriter;

///
/// The address macro rewriting strategy.
///
/// `import token as tok` becomes `macro tok: 0x<address of token>`.
///
#[derive(Debug, Clone, Default)]
pub struct MacroRewriter {
    /// The import statement parser.
    parser: ImportParser,
}

impl Rewriter for MacroRewriter {
    fn rewrite(&self, module: &Module, shortcuts: &ShortcutTable) -> Result<String, Error> {
        super::rewrite_imports(&self.parser, module, shortcuts, |import, address| {
            format!("macro {}: {}", import.alias, super::address_literal(address))
        })
    }
}
