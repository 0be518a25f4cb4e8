use crate::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// Native libraries resolved next to the host binary (registry-free COM,
/// `LoadLibrary` search order, `$ORIGIN` rpaths) are extracted here.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(Error::CurrentExe)?;
    parent_of(&exe)
}

fn parent_of(path: &Path) -> Result<PathBuf> {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::NoParent(path.to_path_buf()))
}

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

pub fn user_data() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("LOCALAPPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".local/share")))
    }
}

pub fn user_cache() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("LOCALAPPDATA").map(|p| PathBuf::from(p).join("Cache"))
    }
    #[cfg(target_os = "macos")]
    {
        user_home().map(|p| p.join("Library/Caches"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env::var_os("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".cache")))
    }
}

pub fn user_temp() -> PathBuf {
    env::temp_dir()
}

/// Base directory a bundled dependency is extracted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractRoot {
    /// Next to the running executable.
    ExecutableDir,
    /// `<user data>/<app>`.
    UserData(String),
    /// `<user cache>/<app>`.
    UserCache(String),
    /// `<temp>/<app>`.
    Temp(String),
    /// An explicit directory.
    Path(PathBuf),
}

impl ExtractRoot {
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            Self::ExecutableDir => executable_dir(),
            Self::UserData(app) => user_data()
                .map(|p| p.join(app))
                .ok_or(Error::NoUserDir("data")),
            Self::UserCache(app) => user_cache()
                .map(|p| p.join(app))
                .ok_or(Error::NoUserDir("cache")),
            Self::Temp(app) => Ok(user_temp().join(app)),
            Self::Path(path) => Ok(path.clone()),
        }
    }
}

impl From<PathBuf> for ExtractRoot {
    fn from(path: PathBuf) -> Self { Self::Path(path) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_dir_contains_test_binary() {
        let dir = executable_dir().unwrap();
        let exe = env::current_exe().unwrap();
        assert!(dir.is_absolute());
        assert_eq!(exe.parent().unwrap(), dir);
    }

    #[test]
    fn test_parent_of_bare_name_fails() {
        assert!(matches!(parent_of(Path::new("app.exe")), Err(Error::NoParent(_))));
    }

    #[test]
    fn test_user_temp_is_absolute() {
        assert!(user_temp().is_absolute());
    }

    #[test]
    fn test_user_cache_platform_specific() {
        let cache = user_cache();
        #[cfg(target_os = "windows")]
        {
            assert!(cache.is_none() || cache.unwrap().to_string_lossy().contains("Cache"));
        }
        #[cfg(target_os = "macos")]
        {
            assert!(cache.is_none() || cache.unwrap().to_string_lossy().contains("Caches"));
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            assert!(cache.is_none() || !cache.unwrap().as_os_str().is_empty());
        }
    }

    #[test]
    fn test_extract_root_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = ExtractRoot::from(dir.path().to_path_buf());
        assert_eq!(root.resolve().unwrap(), dir.path());
    }

    #[test]
    fn test_extract_root_temp_appends_app() {
        let root = ExtractRoot::Temp("my-app".into());
        assert_eq!(root.resolve().unwrap(), user_temp().join("my-app"));
    }

    #[test]
    fn test_extract_root_user_data_appends_app() {
        if let Some(data) = user_data() {
            let root = ExtractRoot::UserData("my-app".into());
            assert_eq!(root.resolve().unwrap(), data.join("my-app"));
        }
    }

    #[test]
    fn test_extract_root_executable_dir() {
        assert_eq!(
            ExtractRoot::ExecutableDir.resolve().unwrap(),
            executable_dir().unwrap()
        );
    }
}
