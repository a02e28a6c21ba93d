mod config;
mod plugin_action;
mod action_result;
mod plugin_manifest;

pub use self::config::*;
pub use self::plugin_action::*;
pub use self::action_result::*;
pub use self::plugin_manifest::*;
