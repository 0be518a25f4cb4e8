//! Filesystem capabilities consumed by the verifier.
//!
//! The verifier only ever calls these traits, so tests can substitute fakes
//! and hosts can route writes elsewhere.

use crate::{Error, Result};
use std::path::Path;
use unbundle_fs::WriteOptions;
use unbundle_version::FileVersion;

/// Read-only queries about a file on disk.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;

    /// Only called after [`exists`](Self::exists) returned `true`.
    fn size_in_bytes(&self, path: &Path) -> Result<u64>;

    /// Version stamped into the binary at `path`.
    fn version(&self, path: &Path) -> Result<FileVersion>;
}

/// Writes a payload to disk.
pub trait FileMaterializer {
    /// Overwrite `path` with `data`, creating parent directories and clearing
    /// a read-only attribute on an existing file.
    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<()>;
}

impl<T: FileProbe + ?Sized> FileProbe for &T {
    fn exists(&self, path: &Path) -> bool { (**self).exists(path) }

    fn size_in_bytes(&self, path: &Path) -> Result<u64> { (**self).size_in_bytes(path) }

    fn version(&self, path: &Path) -> Result<FileVersion> { (**self).version(path) }
}

impl<T: FileMaterializer + ?Sized> FileMaterializer for &T {
    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<()> {
        (**self).write_bytes(path, data)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileProbe;

impl FileProbe for OsFileProbe {
    fn exists(&self, path: &Path) -> bool { path.is_file() }

    fn size_in_bytes(&self, path: &Path) -> Result<u64> {
        std::fs::metadata(path)
            .map(|meta| meta.len())
            .map_err(|e| Error::Metadata {
                path:   path.to_path_buf(),
                source: e,
            })
    }

    fn version(&self, path: &Path) -> Result<FileVersion> {
        let bytes = unbundle_fs::read(path)?;
        unbundle_version::read_fixed_file_version(&bytes).ok_or_else(|| Error::MissingVersion {
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileMaterializer {
    options: WriteOptions,
}

impl OsFileMaterializer {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: WriteOptions) -> Self { Self { options } }

    pub fn options(&self) -> WriteOptions { self.options }
}

impl FileMaterializer for OsFileMaterializer {
    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<()> {
        unbundle_fs::write_bytes(path, data, self.options)?;
        Ok(())
    }
}
