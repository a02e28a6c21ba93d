use regex::Regex;
use std::sync::LazyLock;

pub const PLUGIN_NAME: &str = "VOD2MLIB";
pub const PLUGIN_VERSION: &str = "1.0.2";

pub const FILE_SUFFIX_STRM: &str = "strm";
pub const FILE_SUFFIX_NFO: &str = "nfo";
pub const TVSHOW_NFO_FILE: &str = "tvshow.nfo";
pub const SEASON_FOLDER_PREFIX: &str = "Season";
pub const RUN_LOCK_FILE: &str = ".vod2mlib.lock";

pub const UNKNOWN_NAME: &str = "Unknown";
pub const MAX_FILENAME_LENGTH: usize = 200;

pub const PROXY_PATH_MOVIE: &str = "proxy/vod/movie";
pub const PROXY_PATH_EPISODE: &str = "proxy/vod/episode";

pub const UNREACHABLE_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// Patterns used to turn provider titles and category names
/// into media library names.
pub struct ExportStyleConfig {
    pub language_prefix: Regex,
    pub media_type_suffix: Regex,
    pub genre_separator: Regex,
    pub illegal_filename_chars: Regex,
    pub whitespace: Regex,
}

pub struct Constants {
    pub re_env_var: Regex,
    pub export_style_config: ExportStyleConfig,
}

pub static CONSTANTS: LazyLock<Constants> = LazyLock::new(||
    Constants {
        re_env_var: Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap(),
        export_style_config: ExportStyleConfig {
            language_prefix: Regex::new(r"^[A-Z]{2,3}\s*-\s*").unwrap(),
            media_type_suffix: Regex::new(r"(?i)\s*\((movie|series)\)\s*$").unwrap(),
            genre_separator: Regex::new(r"[/&,]").unwrap(),
            illegal_filename_chars: Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        },
    }
);
