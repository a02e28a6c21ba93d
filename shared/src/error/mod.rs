mod plugin_error;

pub use self::plugin_error::*;
