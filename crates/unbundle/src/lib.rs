//! Verify bundled native dependencies on disk and extract the missing or
//! stale ones.
//!
//! Host applications that embed native libraries (for example with
//! `include_bytes!`) declare each one as a [`Dependency`]: where it must live,
//! its exact bytes, and optionally the file version it must carry. The
//! [`DependencyVerifier`] checks every declaration and rewrites any file that
//! is absent, the wrong size, or the wrong version.
//!
//! # Architecture
//!
//! - [`data`] - the immutable dependency declaration
//! - [`core`] - the pure per-dependency decision
//! - [`effects`] - filesystem capabilities behind traits, with OS-backed defaults
//!
//! # Example
//!
//! ```no_run
//! use unbundle::{Dependency, DependencyVerifier, ExtractRoot, FileVersion};
//!
//! static SQLITE: &[u8] = &[0u8; 4];
//!
//! let deps = [Dependency::in_dir(&ExtractRoot::ExecutableDir, "sqlite3.dll", SQLITE)?
//!     .with_version(FileVersion::new(3, 45, 1, 0))];
//!
//! DependencyVerifier::os().verify_and_extract_missing_then(&deps, || {
//!     println!("native dependencies refreshed");
//!     Ok::<(), unbundle::Error>(())
//! })?;
//! # Ok::<(), unbundle::Error>(())
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;
mod verifier;

pub use self::core::Inspection;
pub use self::data::Dependency;
pub use self::effects::{FileMaterializer, FileProbe, OsFileMaterializer, OsFileProbe};
pub use self::error::{Error, Result};
pub use self::verifier::DependencyVerifier;

pub use unbundle_fs::{PermissionMode, WriteOptions};
pub use unbundle_platform::ExtractRoot;
pub use unbundle_version::FileVersion;
