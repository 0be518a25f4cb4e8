//! Version type and operations.

use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version as SemVer;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

static FILE_VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?<major>[0-9]+)(?:\.(?<minor>[0-9]+))?(?:\.(?<build>[0-9]+))?(?:\.(?<revision>[0-9]+))?$").unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid file version: {0}")]
    Parse(String),
    #[error("{component} component {value} does not fit in 16 bits")]
    ComponentOutOfRange {
        component: &'static str,
        value:     u64,
    },
}

/// A Windows-style `major.minor.build.revision` file version.
///
/// Always carries four components: parts left out when parsing are zero, so
/// `"1.0.0"` and `"1.0.0.0"` compare equal. .NET's `System.Version` keeps
/// them distinct; the version resource a binary carries always has all four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileVersion {
    pub major:    u16,
    pub minor:    u16,
    pub build:    u16,
    pub revision: u16,
}

impl FileVersion {
    pub const fn new(major: u16, minor: u16, build: u16, revision: u16) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let trimmed = s.trim();
        let caps = FILE_VERSION_REGEX
            .captures(trimmed)
            .ok_or_else(|| VersionError::Parse(s.to_string()))?;

        let part = |name: &'static str| -> Result<u16, VersionError> {
            let Some(m) = caps.name(name) else {
                return Ok(0);
            };
            let value: u64 = m
                .as_str()
                .parse()
                .map_err(|_| VersionError::Parse(s.to_string()))?;
            component(name, value)
        };

        Ok(Self {
            major:    part("major")?,
            minor:    part("minor")?,
            build:    part("build")?,
            revision: part("revision")?,
        })
    }

    /// Build from the `dwFileVersionMS`/`dwFileVersionLS` pair of a
    /// `VS_FIXEDFILEINFO` block.
    pub const fn from_ms_ls(ms: u32, ls: u32) -> Self {
        Self::new((ms >> 16) as u16, ms as u16, (ls >> 16) as u16, ls as u16)
    }

    pub const fn to_ms_ls(self) -> (u32, u32) {
        (
            ((self.major as u32) << 16) | self.minor as u32,
            ((self.build as u32) << 16) | self.revision as u32,
        )
    }

    pub fn to_semver(self) -> SemVer {
        SemVer::new(self.major.into(), self.minor.into(), self.build.into())
    }
}

fn component(name: &'static str, value: u64) -> Result<u16, VersionError> {
    u16::try_from(value).map_err(|_| VersionError::ComponentOutOfRange {
        component: name,
        value,
    })
}

impl TryFrom<&SemVer> for FileVersion {
    type Error = VersionError;

    fn try_from(v: &SemVer) -> Result<Self, Self::Error> {
        Ok(Self::new(
            component("major", v.major)?,
            component("minor", v.minor)?,
            component("build", v.patch)?,
            0,
        ))
    }
}

impl std::str::FromStr for FileVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { FileVersion::parse(s) }
}

impl std::fmt::Display for FileVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl Serialize for FileVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FileVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
