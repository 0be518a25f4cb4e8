//! Filesystem primitives for materializing bundled files to disk.
//!
//! Writes always create missing parent directories and clear a read-only
//! attribute left on a previous copy of the target, so an extracted native
//! library can be replaced in place.

mod error;
pub mod permissions;
mod primitives;

pub use error::{Error, Result};
pub use permissions::{PermissionMode, clear_readonly};
pub use primitives::{WriteOptions, atomic_write, ensure_parent_dir, read, write_bytes};
