use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read the whole file into memory. The scanner works on the complete buffer,
/// there is no streaming path.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let content = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "loaded input file");
    Ok(content)
}
