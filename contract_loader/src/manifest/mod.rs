//!
//! The build manifest.
//!

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::error::Error;
use crate::module::state::State;
use crate::module::Module;
use crate::rewriter::strategy::Strategy;

///
/// The build manifest.
///
/// Records every module attempted in the build. Written once when the build succeeds,
/// and dumped as it stands when the build fails, so that the computed addresses are
/// never lost.
///
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// The creator account.
    pub creator: Option<web3::types::Address>,
    /// The creator nonce the allocation started from.
    pub nonce: Option<u64>,
    /// The reference rewriting strategy.
    pub strategy: Strategy,
    /// The modules in allocation order.
    pub modules: Vec<Module>,
}

impl Manifest {
    /// The successful build manifest file name.
    pub const FILE_NAME: &'static str = "manifest.json";

    /// The fatal dump file name prefix.
    pub const DUMP_FILE_PREFIX: &'static str = "FATAL_dump";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(strategy: Strategy, modules: Vec<Module>) -> Self {
        Self {
            creator: None,
            nonce: None,
            strategy,
            modules,
        }
    }

    ///
    /// Reads the manifest of a previous build.
    ///
    pub fn read(path: &Path) -> Result<Self, Error> {
        let file = std::fs::File::open(path).map_err(|error| Error::io(path, error))?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|error| {
            Error::Configuration(format!("Manifest {path:?} parsing error: {error}"))
        })
    }

    ///
    /// Writes the manifest of the finished build, replacing the previous one.
    ///
    pub fn write(&self, directory: &Path) -> Result<PathBuf, Error> {
        let path = directory.join(Self::FILE_NAME);
        let file = std::fs::File::create(path.as_path())
            .map_err(|error| Error::io(path.as_path(), error))?;
        self.write_to(file, path.as_path())?;
        Ok(path)
    }

    ///
    /// Dumps the manifest of the failed build to a new timestamped file.
    ///
    pub fn dump(&self, directory: &Path) -> Result<PathBuf, Error> {
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");

        for index in 0usize.. {
            let name = match index {
                0 => format!("{}_{timestamp}.json", Self::DUMP_FILE_PREFIX),
                index => format!("{}_{timestamp}_{index}.json", Self::DUMP_FILE_PREFIX),
            };
            let path = directory.join(name);
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path.as_path())
            {
                Ok(file) => {
                    self.write_to(file, path.as_path())?;
                    return Ok(path);
                }
                Err(error) if error.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(error) => return Err(Error::io(path, error)),
            }
        }
        Err(Error::Configuration(format!(
            "No free dump file name in {directory:?}"
        )))
    }

    ///
    /// Returns the module with the shortcut.
    ///
    pub fn get(&self, shortcut: &str) -> Option<&Module> {
        self.modules
            .iter()
            .find(|module| module.shortcut == shortcut)
    }

    ///
    /// Returns the number of modules in the state.
    ///
    pub fn count(&self, state: State) -> usize {
        self.modules
            .iter()
            .filter(|module| module.state == state)
            .count()
    }

    ///
    /// Whether every module is on chain.
    ///
    pub fn is_deployed(&self) -> bool {
        self.modules.iter().all(|module| module.state.is_deployed())
    }

    ///
    /// Serializes the manifest into the file.
    ///
    fn write_to(&self, file: std::fs::File, path: &Path) -> Result<(), Error> {
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|error| Error::io(path, error.into()))?;
        writer
            .write_all(b"\n")
            .and_then(|_| writer.flush())
            .map_err(|error| Error::io(path, error))
    }
}

impl std::fmt::Display for Manifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔═══════════════════════╡ DEPLOYMENT ╞═════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        for (state, name) in [
            (State::Confirmed, "CONFIRMED".green()),
            (State::Reused, "REUSED".bright_white()),
            (State::Submitted, "SUBMITTED".bright_yellow()),
            (State::Aborted, "ABORTED".bright_red()),
            (State::Pending, "PENDING".bright_black()),
        ] {
            let count = self.count(state).to_string();
            let count = match state {
                State::Confirmed => count.green(),
                State::Reused => count.bright_white(),
                State::Submitted => count.bright_yellow(),
                State::Aborted => count.bright_red(),
                State::Pending => count.bright_black(),
            };
            writeln!(f, "║     {name:9}                                 {count:10}     ║")?;
        }
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
