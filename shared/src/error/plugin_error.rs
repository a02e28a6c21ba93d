use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! config_err {
    // Wraps the formatted message into a configuration error.
    // Configuration errors abort an action before any filesystem access.
    ($($arg:tt)*) => {
        $crate::error::PluginError::new($crate::error::PluginErrorKind::Config, format!($($arg)*))
    };
}

pub use config_err;

#[macro_export]
macro_rules! config_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::PluginError::new($crate::error::PluginErrorKind::Config, format!($($arg)*)))
    };
}

pub use config_err_res;

#[macro_export]
macro_rules! upstream_err {
    ($($arg:tt)*) => {
        $crate::error::PluginError::new($crate::error::PluginErrorKind::Upstream, format!($($arg)*))
    };
}

pub use upstream_err;

#[macro_export]
macro_rules! upstream_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::PluginError::new($crate::error::PluginErrorKind::Upstream, format!($($arg)*)))
    };
}

pub use upstream_err_res;

#[macro_export]
macro_rules! io_err {
    ($($arg:tt)*) => {
        $crate::error::PluginError::new($crate::error::PluginErrorKind::Io, format!($($arg)*))
    };
}

pub use io_err;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PluginErrorKind {
    // invalid settings, fatal before any I/O
    Config,
    // host data layer failed
    Upstream,
    // filesystem failure
    Io,
}

impl Display for PluginErrorKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let name = match self {
            PluginErrorKind::Config => "config",
            PluginErrorKind::Upstream => "upstream",
            PluginErrorKind::Io => "io",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct PluginError {
    pub kind: PluginErrorKind,
    pub message: String,
}

impl PluginError {
    pub const fn new(kind: PluginErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for PluginError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PluginError {}

impl From<std::io::Error> for PluginError {
    fn from(err: std::io::Error) -> Self {
        io_err!("{err}")
    }
}
