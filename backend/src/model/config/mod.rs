mod batch_size;
mod job_config;

pub use self::batch_size::*;
pub use self::job_config::*;
