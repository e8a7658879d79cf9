use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while importing a single source directory
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Source directory not found or not listable: {}", .path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} to {}", .source_path.display(), .destination.display())]
    CopyFailure {
        source_path: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write progress output")]
    Report(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
