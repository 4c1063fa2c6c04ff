//! Walks the location hierarchy for every key file given on the command line.

use std::{
    fs,
    io::{self, Write},
    path::{self, Component, Path, PathBuf},
};

use nodekey_key_deriv::{enode, BaseKey, DeriveError, KeyFileError};
use nodekey_primitives::Topology;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    cli::OutputMode,
    output::{EnodeSink, FlatPrinter, GroupedEnodes},
};

/// Why a command-line path was skipped.
#[derive(Debug, Error)]
pub(crate) enum SkipReason {
    #[error("could not make path absolute: {0}")]
    Absolute(io::Error),

    #[error("could not stat path: {0}")]
    Stat(io::Error),

    #[error("not a regular file")]
    NotAFile,
}

/// Errors that abort the whole run.
#[derive(Debug, Error)]
pub(crate) enum WalkError {
    #[error("failed to load key file {path}")]
    KeyFile {
        path: String,
        #[source]
        source: KeyFileError,
    },

    #[error("failed to derive key from {path}")]
    Derive {
        path: String,
        #[source]
        source: DeriveError,
    },

    #[error("failed to write output")]
    Output(#[from] io::Error),

    #[error("failed to serialize grouped enodes")]
    Serialize(#[from] serde_json::Error),
}

/// A key file that passed the path checks, with the address its nodes are reachable at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyFile {
    pub(crate) path: PathBuf,
    pub(crate) ip: String,
}

/// Resolves `path` to a clean absolute regular file and infers its IP from the parent directory.
pub(crate) fn resolve_key_file(path: &Path) -> Result<KeyFile, SkipReason> {
    let absolute = path::absolute(path).map_err(SkipReason::Absolute)?;
    let absolute = clean_path(&absolute);
    let metadata = fs::metadata(&absolute).map_err(SkipReason::Stat)?;
    if !metadata.is_file() {
        return Err(SkipReason::NotAFile);
    }

    let ip = ip_from_path(&absolute);
    Ok(KeyFile { path: absolute, ip })
}

/// Lexically normalizes `path`: drops `.` components and trailing separators, and lets each `..`
/// remove the component before it. Symlinks are not resolved.
pub(crate) fn clean_path(path: &Path) -> PathBuf {
    path.components()
        .fold(PathBuf::new(), |mut cleaned, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    cleaned.pop();
                }
                other => cleaned.push(other),
            }
            cleaned
        })
}

/// The name of the directory containing `path`, taken verbatim.
///
/// A file directly under the root yields `/`.
pub(crate) fn ip_from_path(path: &Path) -> String {
    match path.parent() {
        Some(parent) => match parent.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => parent.display().to_string(),
        },
        None => ".".to_string(),
    }
}

/// Derives the enode of every location of `topology` from `key_file` and records it in `sink`.
///
/// The key file is read once; every location key is derived from that copy.
pub(crate) fn process_key_file(
    key_file: &KeyFile,
    topology: &Topology,
    sink: &mut impl EnodeSink,
) -> Result<(), WalkError> {
    let path = || key_file.path.display().to_string();

    let base = BaseKey::load(&key_file.path).map_err(|source| WalkError::KeyFile {
        path: path(),
        source,
    })?;

    for location in topology.locations() {
        let key = base
            .derive(&location)
            .map_err(|source| WalkError::Derive {
                path: path(),
                source,
            })?;

        sink.record(&location, &enode(&key, key_file.ip.as_str()))?;
    }

    debug!(
        path = %key_file.path.display(),
        ip = %key_file.ip,
        locations = topology.num_locations(),
        "processed key file"
    );

    Ok(())
}

/// Processes `path` unless it fails the path checks, in which case it is logged and skipped.
///
/// Returns whether the path was processed.
pub(crate) fn process_path(
    path: &Path,
    topology: &Topology,
    sink: &mut impl EnodeSink,
) -> Result<bool, WalkError> {
    match resolve_key_file(path) {
        Ok(key_file) => {
            process_key_file(&key_file, topology, sink)?;
            Ok(true)
        }
        Err(reason) => {
            warn!(path = %path.display(), %reason, "skipping path");
            Ok(false)
        }
    }
}

/// Walks every path into `sink`, returning the number of key files processed.
pub(crate) fn walk(
    paths: &[PathBuf],
    topology: &Topology,
    sink: &mut impl EnodeSink,
) -> Result<usize, WalkError> {
    let mut processed = 0;
    for path in paths {
        if process_path(path, topology, sink)? {
            processed += 1;
        }
    }

    Ok(processed)
}

/// Walks every path and writes the result to `out` in the given mode.
///
/// Flat output is written while walking. Grouped output is serialized once, after the last file,
/// so nothing is written if any key file turns out to be unusable.
pub(crate) fn run(
    paths: &[PathBuf],
    topology: &Topology,
    mode: OutputMode,
    out: &mut impl Write,
) -> Result<usize, WalkError> {
    let processed = match mode {
        OutputMode::Flat => {
            let mut printer = FlatPrinter::new(&mut *out);
            let processed = walk(paths, topology, &mut printer)?;
            printer.finish()?;
            processed
        }
        OutputMode::Grouped => {
            let mut grouped = GroupedEnodes::default();
            let processed = walk(paths, topology, &mut grouped)?;
            debug!(locations = grouped.entries().len(), "serializing grouped enodes");

            let json = grouped.to_json()?;
            writeln!(out, "{json}")?;
            out.flush()?;
            processed
        }
    };

    info!(%mode, processed, "finished");
    Ok(processed)
}
