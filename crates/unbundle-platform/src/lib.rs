pub use error::{Error, Result};

pub mod dir;
mod error;

pub use dir::{ExtractRoot, executable_dir, user_cache, user_data, user_home, user_temp};
