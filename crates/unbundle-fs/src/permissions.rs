use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Permission mode applied to a file after it has been written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionMode {
    /// Leave whatever the platform assigns to a freshly created file.
    #[default]
    Inherit,

    /// On Unix: `0o444`. On Windows: the `readonly` attribute.
    ReadOnly,

    /// On Unix: `0o755`, which native libraries and helper executables need.
    /// On Windows: `readonly = false`.
    Executable,

    /// On Unix: `0o644`. On Windows: `readonly = false`.
    ReadWrite,

    /// Raw Unix mode bits. Windows only honours the owner write bit.
    Custom(u32),
}

impl PermissionMode {
    pub fn to_unix_mode(self) -> Option<u32> {
        match self {
            Self::Inherit => None,
            Self::ReadOnly => Some(0o444),
            Self::Executable => Some(0o755),
            Self::ReadWrite => Some(0o644),
            Self::Custom(mode) => Some(mode),
        }
    }

    pub fn is_readonly(self) -> bool {
        self.to_unix_mode().is_some_and(|mode| mode & 0o222 == 0)
    }

    /// Apply the mode to an existing path.
    pub fn apply_to_path(self, path: &Path) -> Result<()> {
        let Some(mode) = self.to_unix_mode() else {
            return Ok(());
        };

        #[cfg(unix)]
        let perms = {
            use std::os::unix::fs::PermissionsExt;
            fs::Permissions::from_mode(mode)
        };

        #[cfg(not(unix))]
        let perms = {
            let mut perms = metadata(path)?.permissions();
            perms.set_readonly(mode & 0o200 == 0);
            perms
        };

        fs::set_permissions(path, perms).map_err(|e| Error::Permissions {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl From<u32> for PermissionMode {
    fn from(mode: u32) -> Self { Self::Custom(mode) }
}

/// Make an existing file writable so it can be overwritten.
///
/// Returns `true` when the file was read-only and has been changed, `false`
/// when it was already writable or does not exist.
pub fn clear_readonly(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mut perms = meta.permissions();

    // On Unix only the owner write bit matters; `readonly()` there means no
    // write bit at all.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if perms.mode() & 0o200 != 0 {
            return Ok(false);
        }
        perms.set_mode(perms.mode() | 0o200);
    }

    #[cfg(not(unix))]
    {
        if !perms.readonly() {
            return Ok(false);
        }
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
    }

    fs::set_permissions(path, perms).map_err(|e| Error::Permissions {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "cleared read-only attribute");
    Ok(true)
}

#[cfg(not(unix))]
fn metadata(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn permission_mode_default() {
        assert_eq!(PermissionMode::default(), PermissionMode::Inherit);
    }

    #[test]
    fn permission_mode_to_unix_mode() {
        assert_eq!(PermissionMode::Inherit.to_unix_mode(), None);
        assert_eq!(PermissionMode::ReadOnly.to_unix_mode(), Some(0o444));
        assert_eq!(PermissionMode::Executable.to_unix_mode(), Some(0o755));
        assert_eq!(PermissionMode::ReadWrite.to_unix_mode(), Some(0o644));
        assert_eq!(PermissionMode::from(0o600).to_unix_mode(), Some(0o600));
    }

    #[test]
    fn permission_mode_readonly_detection() {
        assert!(!PermissionMode::Inherit.is_readonly());
        assert!(PermissionMode::ReadOnly.is_readonly());
        assert!(!PermissionMode::Executable.is_readonly());
        assert!(PermissionMode::Custom(0o400).is_readonly());
        assert!(!PermissionMode::Custom(0o600).is_readonly());
    }

    #[test]
    fn clear_readonly_on_missing_file_is_noop() {
        let dir = tempdir().unwrap();
        assert!(!clear_readonly(dir.path().join("absent.dll")).unwrap());
    }

    #[test]
    fn clear_readonly_makes_file_writable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.dll");
        fs::write(&path, b"old").unwrap();
        PermissionMode::ReadOnly.apply_to_path(&path).unwrap();
        assert!(fs::metadata(&path).unwrap().permissions().readonly());

        assert!(clear_readonly(&path).unwrap());
        assert!(!fs::metadata(&path).unwrap().permissions().readonly());
        assert!(!clear_readonly(&path).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn clear_readonly_sets_owner_write_bit_when_others_can_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("group.dll");
        fs::write(&path, b"old").unwrap();
        PermissionMode::Custom(0o464).apply_to_path(&path).unwrap();

        assert!(clear_readonly(&path).unwrap());
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o664);
    }

    #[cfg(unix)]
    #[test]
    fn clear_readonly_follows_symlinks() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let target = dir.path().join("real.dll");
        let link = dir.path().join("link.dll");
        fs::write(&target, b"old").unwrap();
        PermissionMode::ReadOnly.apply_to_path(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(clear_readonly(&link).unwrap());
        assert_ne!(fs::metadata(&target).unwrap().permissions().mode() & 0o200, 0);
    }

    #[cfg(unix)]
    #[test]
    fn apply_executable_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("libnative.so");
        fs::write(&path, b"elf").unwrap();
        PermissionMode::Executable.apply_to_path(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().permissions().mode() & 0o777, 0o755);
    }
}
