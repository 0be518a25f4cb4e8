use crate::permissions::{PermissionMode, clear_readonly};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct WriteOptions {
    pub permissions: PermissionMode,
    pub sync:        bool,
    pub atomic:      bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn permissions(mut self, mode: PermissionMode) -> Self {
        self.permissions = mode;
        self
    }
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
    pub fn atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|e| Error::CreateDir {
        path: parent.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path`, overwriting whatever is there.
///
/// Parent directories are created and a read-only attribute on an existing
/// file is cleared first. With `atomic` set the bytes land in a sibling
/// temporary file that is renamed over the target.
pub fn write_bytes(path: impl AsRef<Path>, content: &[u8], options: WriteOptions) -> Result<()> {
    let path = path.as_ref();

    ensure_parent_dir(path)?;
    clear_readonly(path)?;

    if options.atomic {
        return atomic_write(path, content, options);
    }

    fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    if options.sync {
        sync_file(path)?;
    }
    options.permissions.apply_to_path(path)?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: WriteOptions) -> Result<()> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| Error::Write {
        path: path.to_path_buf(),
        source: std::io::Error::other("no parent directory"),
    })?;

    let mut tmp_path = parent.to_path_buf();
    tmp_path.push(format!(".tmp.{}.unbundle", uuid::Uuid::new_v4()));

    fs::write(&tmp_path, content).map_err(|e| Error::Write {
        path: tmp_path.clone(),
        source: e,
    })?;

    let finish = || -> Result<()> {
        if options.sync {
            sync_file(&tmp_path)?;
        }
        options.permissions.apply_to_path(&tmp_path)?;
        fs::rename(&tmp_path, path).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })
    };

    if let Err(e) = finish() {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "atomically wrote file");
    Ok(())
}

pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

fn sync_file(path: &Path) -> Result<()> {
    let file = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    file.sync_all().map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
