//!
//! The registry lookup rewriting strategy.
//!

use crate::error::Error;
use crate::module::Module;
use crate::shortcut::ShortcutTable;

use super::import::ImportParser;
use super::Rewriter;

///
/// The registry lookup rewriting strategy.
///
/// `import token as tok` becomes `macro tok: <registry>.lookup("token")`, so the
/// address is resolved by the registry contract at runtime. The shortcut must still
/// belong to the application, since only its modules are registered.
///
#[derive(Debug, Clone)]
pub struct RegistryRewriter {
    /// The import statement parser.
    parser: ImportParser,
    /// The registry contract address.
    registry: web3::types::Address,
}

impl RegistryRewriter {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(registry: web3::types::Address) -> Self {
        Self {
            parser: ImportParser::default(),
            registry,
        }
    }
}

impl Rewriter for RegistryRewriter {
    fn rewrite(&self, module: &Module, shortcuts: &ShortcutTable) -> Result<String, Error> {
        let registry = super::address_literal(&self.registry);
        super::rewrite_imports(&self.parser, module, shortcuts, |import, _address| {
            format!(
                "macro {}: {}.lookup(\"{}\")",
                import.alias, registry, import.shortcut
            )
        })
    }
}
