use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to locate the running executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("path has no parent directory: {0}")]
    NoParent(PathBuf),

    #[error("no {0} directory available for the current user")]
    NoUserDir(&'static str),
}
