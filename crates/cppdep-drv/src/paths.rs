//! Path normalization collaborator.
//!
//! Accepts a path, a set of paths, a glob, or a directory, and yields a
//! deduplicated set of file paths. Directories are enumerated
//! non-recursively; globs accept the `**` recursive wildcard via the
//! `glob` crate. This is ambient tooling the driver needs before
//! dispatching analysis - it is not part of the core pipeline.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::DriverError;

/// One of the ways a caller may name translation units to analyze.
#[derive(Clone, Debug)]
pub enum PathSpec {
    File(PathBuf),
    Many(Vec<PathBuf>),
    Glob(String),
    Directory(PathBuf),
}

/// Resolves a [`PathSpec`] into a deduplicated, sorted set of file paths.
pub fn resolve(spec: &PathSpec) -> Result<BTreeSet<PathBuf>, DriverError> {
    match spec {
        PathSpec::File(path) => Ok(BTreeSet::from([path.clone()])),
        PathSpec::Many(paths) => Ok(paths.iter().cloned().collect()),
        PathSpec::Glob(pattern) => resolve_glob(pattern),
        PathSpec::Directory(dir) => resolve_directory(dir),
    }
}

fn resolve_glob(pattern: &str) -> Result<BTreeSet<PathBuf>, DriverError> {
    let entries = glob::glob(pattern).map_err(|source| DriverError::InvalidGlob {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = BTreeSet::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                paths.insert(path);
            }
            Ok(_) => {} // skip directories matched by the glob
            Err(e) => {
                return Err(DriverError::DirectoryRead {
                    path: pattern.to_string(),
                    source: e.into_error(),
                })
            }
        }
    }
    Ok(paths)
}

fn resolve_directory(dir: &Path) -> Result<BTreeSet<PathBuf>, DriverError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DriverError::DirectoryRead {
        path: dir.display().to_string(),
        source,
    })?;

    let mut paths = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|source| DriverError::DirectoryRead {
            path: dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.insert(path);
        }
    }
    Ok(paths)
}
