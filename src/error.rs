//! Error types for tree building and argument handling

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an invocation.
///
/// None of these are recoverable: the first one raised ends the build and
/// is reported by the binary before it exits.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("{0}")]
    ArgumentFormat(String),

    #[error("could not find path: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("could not open the directory: {}: {source}", .path.display())]
    DirectoryOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read an entry of {}: {source}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no depth left to create {}", .path.display())]
    DepthExhausted { path: PathBuf },
}

impl TreeError {
    /// Map a failed `stat` to the matching variant.
    pub(crate) fn from_metadata(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            TreeError::PathNotFound { path }
        } else {
            TreeError::Metadata { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
