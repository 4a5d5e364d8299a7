//!
//! The contract source discovery.
//!


use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;
use crate::module::Module;

///
/// Finds the contract sources in the directories.
///
/// The modules are ordered by path, which makes the address allocation order
/// reproducible between builds of the same tree.
///
/// Files under `excluded` are skipped, so the preprocessed copies in a build directory
/// nested inside a source directory are never taken for sources.
///
pub fn discover(
    directories: &[PathBuf],
    is_recursive: bool,
    excluded: &Path,
) -> Result<Vec<Module>, Error> {
    let excluded = excluded.canonicalize().ok();

    let mut paths = BTreeSet::new();
    for directory in directories.iter() {
        paths.extend(
            self::paths(directory.as_path(), is_recursive)?
                .into_iter()
                .filter(|path| !self::is_excluded(path.as_path(), excluded.as_deref())),
        );
    }

    paths
        .into_iter()
        .map(|path| {
            let source = std::fs::read_to_string(path.as_path())
                .map_err(|error| Error::io(path.as_path(), error))?;
            Module::new(path, source)
        })
        .collect()
}

///
/// Returns the source file paths in the directory.
///
fn paths(directory: &Path, is_recursive: bool) -> Result<Vec<PathBuf>, Error> {
    let directory = glob::Pattern::escape(directory.to_string_lossy().as_ref());
    let pattern = if is_recursive {
        format!("{directory}/**/*.{}", Module::EXTENSION)
    } else {
        format!("{directory}/*.{}", Module::EXTENSION)
    };

    let paths = glob::glob(pattern.as_str())
        .map_err(|error| Error::Configuration(format!("Source pattern `{pattern}`: {error}")))?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();
    Ok(paths)
}

///
/// Whether the file lies under the excluded directory.
///
/// A directory that does not exist yet contains nothing.
///
fn is_excluded(path: &Path, excluded: Option<&Path>) -> bool {
    match (excluded, path.canonicalize()) {
        (Some(excluded), Ok(path)) => path.starts_with(excluded),
        _ => false,
    }
}
