pub const fn default_as_true() -> bool { true }

pub fn default_movie_root_folder() -> String { String::from("/VODS/Movies") }
pub fn default_series_root_folder() -> String { String::from("/VODS/Series") }

// Address of the host proxy as seen from the playback devices.
pub fn default_dispatcharr_url() -> String { String::from("http://192.168.99.11:9191") }

pub fn default_movie_batch_size() -> String { String::from("250") }
pub fn default_series_batch_size() -> String { String::from("10") }
