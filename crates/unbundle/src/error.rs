//! Error types for unbundle.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("dependency path is empty")]
    EmptyPath,

    #[error("{path} carries no embedded version resource")]
    MissingVersion { path: PathBuf },

    #[error("failed to read metadata of {path}")]
    Metadata {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Fs(#[from] unbundle_fs::Error),

    #[error(transparent)]
    Version(#[from] unbundle_version::VersionError),

    #[error(transparent)]
    Platform(#[from] unbundle_platform::Error),

    /// Raised by caller-supplied probe or materializer implementations.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
