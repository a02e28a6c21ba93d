mod default_utils;
mod string_utils;
mod media_name_utils;
mod constants;
mod serde_utils;

pub use self::default_utils::*;
pub use self::string_utils::*;
pub use self::media_name_utils::*;
pub use self::constants::*;
pub use self::serde_utils::*;
