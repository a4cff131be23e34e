use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Per-file failure. The batch loop reports these and moves on; none of
/// them abort the remaining files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("No such file {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
