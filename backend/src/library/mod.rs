mod nfo_writer;

pub use self::nfo_writer::*;
