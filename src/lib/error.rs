use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library. Scanning itself never fails; only loading
/// the input buffer can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
