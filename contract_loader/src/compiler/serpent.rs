//!
//! The Serpent compiler.
//!

use std::path::PathBuf;

use crate::error::Error;
use crate::module::Module;

use super::Compiler;

///
/// The Serpent compiler.
///
/// Each preprocessed source is saved to the artifacts directory and compiled from there,
/// so the exact input of every compilation is kept next to the manifest.
///
#[derive(Debug)]
pub struct SerpentCompiler {
    /// The executable path.
    executable: PathBuf,
    /// The preprocessed sources directory.
    directory: PathBuf,
}

impl SerpentCompiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE_NAME: &'static str = "serpent";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: PathBuf, directory: PathBuf) -> Result<Self, Error> {
        if let Err(error) = which::which(executable.as_path()) {
            return Err(Error::Configuration(format!(
                "The `{}` executable not found in ${{PATH}}: {error}",
                executable.to_string_lossy()
            )));
        }
        std::fs::create_dir_all(directory.as_path())
            .map_err(|error| Error::io(directory.as_path(), error))?;
        Ok(Self {
            executable,
            directory,
        })
    }
}

impl Compiler for SerpentCompiler {
    fn compile(&self, module: &Module) -> Result<Vec<u8>, Error> {
        let source = module.preprocessed.as_ref().ok_or_else(|| Error::Compilation {
            shortcut: module.shortcut.clone(),
            message: "the source is not preprocessed".to_owned(),
        })?;

        let path = self
            .directory
            .join(format!("{}.{}", module.shortcut, Module::EXTENSION));
        std::fs::write(path.as_path(), source).map_err(|error| Error::io(path.as_path(), error))?;

        let output = std::process::Command::new(self.executable.as_path())
            .arg("compile")
            .arg(path.as_path())
            .output()
            .map_err(|error| Error::Compilation {
                shortcut: module.shortcut.clone(),
                message: format!(
                    "{} subprocess spawning error: {error:?}",
                    self.executable.to_string_lossy()
                ),
            })?;
        if !output.status.success() {
            return Err(Error::Compilation {
                shortcut: module.shortcut.clone(),
                message: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(output.stdout.as_slice());
        let stdout = stdout.trim();
        hex::decode(stdout.strip_prefix("0x").unwrap_or(stdout)).map_err(|error| {
            Error::Compilation {
                shortcut: module.shortcut.clone(),
                message: format!("invalid bytecode output: {error}"),
            }
        })
    }
}
