//! Errors that abort a conversion run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conversion errors.
///
/// Per-item failures never surface here; they are recorded in the run summary.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to read source directory {}: {source}", path.display())]
    ReadSource { path: PathBuf, source: io::Error },
}
