use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::errors::FileError;
use crate::redactor::Redactor;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub cleaned: usize,
    pub failed: usize,
}

/// Reads the whole file, redacts it in memory, and writes it back over the
/// original path. The file length never changes.
pub fn clean_file(path: &Path, redactor: &Redactor) -> Result<(), FileError> {
    if !path.exists() {
        return Err(FileError::Missing(path.to_path_buf()));
    }

    let mut data = fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", data.len(), path.display());

    for pattern in redactor.patterns() {
        println!("Cleaning {}", pattern);
    }
    redactor.redact_in_place(&mut data);

    fs::write(path, &data).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Processes each path in order. A failure on one file is reported and the
/// loop continues with the rest.
pub fn clean_all(paths: &[PathBuf], redactor: &Redactor) -> Summary {
    let mut summary = Summary::default();
    for path in paths {
        match clean_file(path, redactor) {
            Ok(()) => summary.cleaned += 1,
            Err(err @ FileError::Missing(_)) => {
                println!("{}", err);
                summary.failed += 1;
            }
            Err(err) => {
                error!("{}", err);
                summary.failed += 1;
            }
        }
    }
    println!("Done.");
    summary
}
