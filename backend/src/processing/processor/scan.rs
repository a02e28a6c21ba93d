use crate::processing::processor::database_error;
use crate::repository::VodSource;
use log::info;
use shared::error::PluginError;
use shared::model::{ActionResult, ActionStats, ScanStats};

/// Counts the movies and series the host offers, writes nothing.
pub async fn scan_vods<S: VodSource>(source: &S) -> Result<ActionResult, PluginError> {
    let movies = source.count_movie_relations().await.map_err(|err| database_error(&err))?;
    let series = source.count_series_relations().await.map_err(|err| database_error(&err))?;
    info!("Found {movies} movies and {series} series");
    Ok(ActionResult::ok(format!("Found {movies} movies and {series} series"), ActionStats::Scan(ScanStats { movies, series })))
}
