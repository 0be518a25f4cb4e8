//! File versions as stamped into native binaries.
//!
//! A [`FileVersion`] is the four-part `major.minor.build.revision` value found
//! in a Windows version resource. Versions compare by exact equality of all
//! four parts; omitted trailing parts parse as zero.

pub use self::fixed_info::{FIXED_FILE_INFO_SIGNATURE, read_fixed_file_version};
pub use self::version::{FileVersion, VersionError};

mod fixed_info;
mod version;
