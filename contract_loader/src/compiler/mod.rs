//!
//! The contract compiler.
//!

pub mod serpent;

use crate::error::Error;
use crate::module::Module;

///
/// The contract compiler.
///
pub trait Compiler {
    ///
    /// Compiles the preprocessed module source into the init code.
    ///
    fn compile(&self, module: &Module) -> Result<Vec<u8>, Error>;
}
