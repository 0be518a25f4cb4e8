pub mod rw;

pub use rw::{WriteOptions, atomic_write, ensure_parent_dir, read, write_bytes};
