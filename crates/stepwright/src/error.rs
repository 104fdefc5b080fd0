use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't open {} for writing: {message}", .path.display())]
    OpenFailed { path: PathBuf, message: String },

    #[error("error writing file '{}': {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },

    #[error("error renaming file, destination file '{}' already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
