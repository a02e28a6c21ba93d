use crate::model::CleanupConfig;
use crate::repository::strm_repository::{is_movie_folder, is_series_folder};
use crate::utils::{dir_exists, log_summary, read_dir_listing, DirListing, RunLock};
use log::{error, info};
use shared::error::{io_err, PluginError};
use shared::model::{ActionResult, ActionStats, MovieCleanupStats, SeriesCleanupStats};
use shared::utils::{FILE_SUFFIX_NFO, FILE_SUFFIX_STRM};
use std::path::{Path, PathBuf};

const LISTED_FOLDERS: usize = 10;

struct LibraryFolder {
    name: String,
    path: PathBuf,
    listing: DirListing,
}

/// Immediate subfolders of `root` matching `qualifies`.
async fn collect_library_folders<F>(root: &Path, qualifies: F) -> Result<Vec<LibraryFolder>, PluginError>
where
    F: Fn(&DirListing) -> bool,
{
    let root_listing = read_dir_listing(root)
        .await
        .map_err(|err| io_err!("Failed to read {}: {err}", root.display()))?;
    let mut folders = vec![];
    for name in root_listing.dir_names() {
        let path = root.join(name);
        match read_dir_listing(&path).await {
            Ok(listing) if qualifies(&listing) => folders.push(LibraryFolder { name: name.to_string(), path, listing }),
            Ok(_) => {}
            Err(err) => error!("Failed to read {}: {err}", path.display()),
        }
    }
    Ok(folders)
}

fn log_folders(kind: &str, folders: &[LibraryFolder]) {
    info!("Found {} {kind} folders to delete", folders.len());
    for folder in folders.iter().take(LISTED_FOLDERS) {
        info!("  {}", folder.name);
    }
    if folders.len() > LISTED_FOLDERS {
        info!("  ... and {} more", folders.len() - LISTED_FOLDERS);
    }
}

async fn remove_folder(folder: &LibraryFolder) -> bool {
    match tokio::fs::remove_dir_all(&folder.path).await {
        Ok(()) => true,
        Err(err) => {
            error!("Failed to delete {}: {err}", folder.path.display());
            false
        }
    }
}

/// Deletes every movie folder holding a `.strm` file.
pub async fn cleanup_movies(cfg: &CleanupConfig) -> Result<ActionResult, PluginError> {
    info!("Movies root: {}", cfg.root_folder.display());
    let mut stats = MovieCleanupStats::default();
    if !dir_exists(&cfg.root_folder).await {
        return Ok(ActionResult::ok("Root folder doesn't exist", ActionStats::MovieCleanup(stats)));
    }
    let _lock = RunLock::acquire(&cfg.root_folder)?;

    let folders = collect_library_folders(&cfg.root_folder, is_movie_folder).await?;
    if folders.is_empty() {
        return Ok(ActionResult::ok("No .strm files found", ActionStats::MovieCleanup(stats)));
    }
    log_folders("movie", &folders);

    for folder in &folders {
        let strm = folder.listing.count_files_with_suffix(FILE_SUFFIX_STRM);
        let nfo = folder.listing.count_files_with_suffix(FILE_SUFFIX_NFO);
        if remove_folder(folder).await {
            stats.deleted_folders += 1;
            stats.deleted_strm += strm;
            stats.deleted_nfo += nfo;
        } else {
            stats.errors += 1;
        }
    }

    log_summary("Movie cleanup summary", &[
        ("Deleted folders", stats.deleted_folders),
        ("Deleted .strm", stats.deleted_strm),
        ("Deleted .nfo", stats.deleted_nfo),
        ("Errors", stats.errors),
    ]);

    let mut message = format!("Deleted {} folders ({} .strm", stats.deleted_folders, stats.deleted_strm);
    if stats.deleted_nfo > 0 {
        message.push_str(&format!(" + {} .nfo", stats.deleted_nfo));
    }
    message.push_str(" files)");
    Ok(ActionResult::ok(message, ActionStats::MovieCleanup(stats)))
}

/// Deletes every series folder holding a season folder or a `tvshow.nfo`.
pub async fn cleanup_series(cfg: &CleanupConfig) -> Result<ActionResult, PluginError> {
    info!("Series root: {}", cfg.root_folder.display());
    let mut stats = SeriesCleanupStats::default();
    if !dir_exists(&cfg.root_folder).await {
        return Ok(ActionResult::ok("Series root doesn't exist", ActionStats::SeriesCleanup(stats)));
    }
    let _lock = RunLock::acquire(&cfg.root_folder)?;

    let folders = collect_library_folders(&cfg.root_folder, is_series_folder).await?;
    if folders.is_empty() {
        return Ok(ActionResult::ok("No series found", ActionStats::SeriesCleanup(stats)));
    }
    log_folders("series", &folders);

    for folder in &folders {
        if remove_folder(folder).await {
            stats.deleted += 1;
        } else {
            stats.errors += 1;
        }
    }

    log_summary("Series cleanup summary", &[("Deleted series", stats.deleted), ("Errors", stats.errors)]);
    Ok(ActionResult::ok(format!("Deleted {} series folders", stats.deleted), ActionStats::SeriesCleanup(stats)))
}
