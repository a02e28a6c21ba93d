use crate::utils::{dir_exists, read_dir_listing, DirListing};
use log::error;
use shared::error::{io_err, PluginError};
use shared::utils::{FILE_SUFFIX_STRM, SEASON_FOLDER_PREFIX, TVSHOW_NFO_FILE};
use std::path::Path;

pub async fn prepare_strm_output_directory(path: &Path) -> Result<(), PluginError> {
    if let Err(err) = tokio::fs::create_dir_all(path).await {
        error!("Failed to create directory {}: {err}", path.display());
        return Err(io_err!("Failed to create directory {}: {err}", path.display()));
    }
    Ok(())
}

/// Writes `content` as the whole file, replacing an existing one.
pub async fn write_library_file(file_path: &Path, content: &[u8]) -> Result<(), PluginError> {
    tokio::fs::write(file_path, content)
        .await
        .map_err(|err| io_err!("Failed to write file {}: {err}", file_path.display()))
}

pub async fn write_strm_file(file_path: &Path, url: &str) -> Result<(), PluginError> {
    write_library_file(file_path, url.as_bytes()).await
}

pub fn is_season_folder_name(name: &str) -> bool {
    name.starts_with(SEASON_FOLDER_PREFIX)
}

/// A series counts as generated once its folder holds a season folder.
pub async fn has_season_folder(series_folder: &Path) -> bool {
    if !dir_exists(series_folder).await {
        return false;
    }
    match read_dir_listing(series_folder).await {
        Ok(listing) => listing.dir_names().any(is_season_folder_name),
        Err(err) => {
            // unreadable folders are processed again
            error!("Failed to read {}: {err}", series_folder.display());
            false
        }
    }
}

/// Movie folders are recognised by a `.strm` file directly inside.
pub fn is_movie_folder(listing: &DirListing) -> bool {
    listing.count_files_with_suffix(FILE_SUFFIX_STRM) > 0
}

/// Series folders are recognised by a season folder or a `tvshow.nfo`.
pub fn is_series_folder(listing: &DirListing) -> bool {
    listing.dir_names().any(is_season_folder_name)
        || listing.file_names().any(|name| name == TVSHOW_NFO_FILE)
}
