mod config;
mod vod;

pub use self::config::*;
pub use self::vod::*;
