use crate::model::BatchSize;
use shared::error::{config_err, config_err_res, PluginError};
use shared::model::PluginSettingsDto;
use shared::utils::{trim_last_slash, UNREACHABLE_HOSTS};
use std::path::PathBuf;
use url::Url;

/// Checks the address written into `.strm` files and returns it without trailing `/`.
///
/// Playback happens on another device, a loopback address would never resolve there.
pub fn validate_base_url(value: &str) -> Result<String, PluginError> {
    let base_url = trim_last_slash(value.trim()).to_string();
    let lower = base_url.to_lowercase();
    if UNREACHABLE_HOSTS.iter().any(|host| lower.contains(host)) {
        return config_err_res!("Dispatcharr URL must be an actual IP address, not localhost! Update settings and try again.");
    }
    let url = Url::parse(&base_url).map_err(|err| config_err!("Invalid Dispatcharr URL {base_url}: {err}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return config_err_res!("Dispatcharr URL must start with http:// or https://: {base_url}");
    }
    Ok(base_url)
}

#[derive(Debug, Clone)]
pub struct MovieJobConfig {
    pub root_folder: PathBuf,
    pub base_url: String,
    pub batch_size: BatchSize,
    pub generate_nfo: bool,
}

impl TryFrom<&PluginSettingsDto> for MovieJobConfig {
    type Error = PluginError;

    fn try_from(dto: &PluginSettingsDto) -> Result<Self, Self::Error> {
        Ok(Self {
            root_folder: PathBuf::from(&dto.root_folder),
            base_url: validate_base_url(&dto.dispatcharr_url)?,
            batch_size: dto.batch_size.parse()?,
            generate_nfo: dto.generate_nfo,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SeriesJobConfig {
    pub root_folder: PathBuf,
    pub base_url: String,
    pub batch_size: BatchSize,
    pub generate_nfo: bool,
}

impl TryFrom<&PluginSettingsDto> for SeriesJobConfig {
    type Error = PluginError;

    fn try_from(dto: &PluginSettingsDto) -> Result<Self, Self::Error> {
        Ok(Self {
            root_folder: PathBuf::from(&dto.series_root_folder),
            base_url: validate_base_url(&dto.dispatcharr_url)?,
            batch_size: dto.series_batch_size.parse()?,
            generate_nfo: dto.generate_series_nfo,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CleanupConfig {
    pub root_folder: PathBuf,
}

impl CleanupConfig {
    pub fn movies(dto: &PluginSettingsDto) -> Self {
        Self { root_folder: PathBuf::from(&dto.root_folder) }
    }

    pub fn series(dto: &PluginSettingsDto) -> Self {
        Self { root_folder: PathBuf::from(&dto.series_root_folder) }
    }
}
