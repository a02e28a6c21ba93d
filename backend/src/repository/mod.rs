mod vod_source;
mod vod_catalog;
pub mod library_layout;
pub mod strm_repository;

pub use self::vod_source::*;
pub use self::vod_catalog::*;
