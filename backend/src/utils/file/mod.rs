mod file_utils;
mod config_reader;
mod run_lock;

pub use self::file_utils::*;
pub use self::config_reader::*;
pub use self::run_lock::*;
