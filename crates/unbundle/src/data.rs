//! Dependency declarations.

use crate::{Error, Result};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use unbundle_platform::ExtractRoot;
use unbundle_version::FileVersion;

/// One bundled file that must exist on disk.
///
/// The expected size is always the payload length; only the version check is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    path:    PathBuf,
    payload: Cow<'static, [u8]>,
    version: Option<FileVersion>,
}

impl Dependency {
    /// Declare a dependency at `path` whose correct contents are `payload`.
    ///
    /// Static payloads such as `include_bytes!` output are borrowed, owned
    /// buffers are moved in.
    pub fn new(path: impl Into<PathBuf>, payload: impl Into<Cow<'static, [u8]>>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }
        Ok(Self {
            path,
            payload: payload.into(),
            version: None,
        })
    }

    /// Declare a dependency named `file_name` under an extraction root.
    pub fn in_dir(
        root: &ExtractRoot,
        file_name: impl AsRef<Path>,
        payload: impl Into<Cow<'static, [u8]>>,
    ) -> Result<Self> {
        let file_name = file_name.as_ref();
        if file_name.as_os_str().is_empty() {
            return Err(Error::EmptyPath);
        }
        Self::new(root.resolve()?.join(file_name), payload)
    }

    /// Require the file on disk to carry exactly this version.
    pub fn with_version(mut self, version: FileVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn payload(&self) -> &[u8] { &self.payload }

    pub fn expected_size(&self) -> u64 { self.payload.len() as u64 }

    pub fn expected_version(&self) -> Option<FileVersion> { self.version }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_follows_payload() {
        let dep = Dependency::new("C:/important.dll", vec![0u8; 5]).unwrap();
        assert_eq!(dep.expected_size(), 5);
        assert_eq!(dep.payload(), &[0u8; 5]);
        assert_eq!(dep.expected_version(), None);
    }

    #[test]
    fn static_payload_is_borrowed() {
        static BYTES: &[u8] = b"MZ\x90\x00";
        let dep = Dependency::new("lib.dll", BYTES).unwrap();
        assert!(std::ptr::eq(dep.payload(), BYTES));
    }

    #[test]
    fn empty_payload_is_allowed() {
        let dep = Dependency::new("empty.bin", Vec::new()).unwrap();
        assert_eq!(dep.expected_size(), 0);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(Dependency::new("", vec![1]), Err(Error::EmptyPath)));
    }

    #[test]
    fn version_is_optional() {
        let dep = Dependency::new("C:/important.dll", vec![0u8; 5])
            .unwrap()
            .with_version(FileVersion::new(1, 0, 0, 0));
        assert_eq!(dep.expected_version(), Some(FileVersion::new(1, 0, 0, 0)));
    }

    #[test]
    fn in_dir_joins_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = ExtractRoot::Path(dir.path().to_path_buf());
        let dep = Dependency::in_dir(&root, "x64/native.dll", vec![1, 2, 3]).unwrap();
        assert_eq!(dep.path(), dir.path().join("x64/native.dll"));
    }

    #[test]
    fn in_dir_rejects_empty_name() {
        let root = ExtractRoot::Path(PathBuf::from("/opt/app"));
        assert!(matches!(
            Dependency::in_dir(&root, "", vec![1]),
            Err(Error::EmptyPath)
        ));
    }
}
