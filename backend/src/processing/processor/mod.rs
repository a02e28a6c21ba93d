mod movies;
mod series;
mod cleanup;
mod scan;
mod plugin;

pub use self::cleanup::*;
pub use self::movies::*;
pub use self::plugin::*;
pub use self::scan::*;
pub use self::series::*;

use log::error;
use shared::error::{io_err, upstream_err, PluginError};
use std::path::Path;

/// Failures of the host data layer abort the current action.
pub(crate) fn database_error(err: &PluginError) -> PluginError {
    upstream_err!("Database error: {err}")
}

/// Creates the output root, a failure aborts the current action.
pub(crate) async fn prepare_root_folder(root: &Path) -> Result<(), PluginError> {
    tokio::fs::create_dir_all(root).await.map_err(|err| {
        error!("Failed to create {}: {err}", root.display());
        io_err!("Folder creation error: {err}")
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{EpisodeRelation, MovieRelation, SeriesRelation};
    use crate::repository::{VodCatalog, VodSource};
    use shared::error::{upstream_err_res, PluginError};
    use shared::model::PluginSettingsDto;
    use std::path::Path;

    pub fn movie_catalog(count: u32) -> VodCatalog {
        let movies: Vec<String> = (1..=count)
            .map(|id| format!(r#"{{"id": {id}, "name": "EN - Movie {id}", "year": 2000, "uuid": "m-{id}"}}"#))
            .collect();
        let relations: Vec<String> = (1..=count)
            .map(|id| format!(r#"{{"id": {id}, "m3u_account": 1, "movie": {id}, "stream_id": "{}", "category": 1}}"#, 100 + id))
            .collect();
        let json = format!(
            r#"{{"accounts": [{{"id": 1, "name": "Provider"}}],
                "categories": [{{"id": 1, "name": "EN - Action/Sci-Fi (movie)"}}],
                "movies": [{}], "movie_relations": [{}]}}"#,
            movies.join(","),
            relations.join(",")
        );
        VodCatalog::from_json_str(&json).unwrap()
    }

    pub fn series_catalog() -> VodCatalog {
        let json = r#"{
            "accounts": [{"id": 1, "name": "Provider"}],
            "categories": [{"id": 2, "name": "EN - Drama (series)"}],
            "series": [
                {"id": 1, "name": "EN - Dark", "year": 2017, "uuid": "s-1"},
                {"id": 2, "name": "Empty Show", "year": 2020, "uuid": "s-2"},
                {"id": 3, "name": "Lupin", "uuid": "s-3"}
            ],
            "series_relations": [
                {"id": 1, "m3u_account": 1, "series": 1, "external_series_id": "501", "category": 2},
                {"id": 2, "m3u_account": 1, "series": 2, "external_series_id": "502"},
                {"id": 3, "m3u_account": 1, "series": 3, "external_series_id": "503",
                 "custom_properties": {"episodes_fetched": true}}
            ],
            "episodes": [
                {"id": 11, "series": 1, "name": "Second", "season_number": 1, "episode_number": 2, "uuid": "e-11"},
                {"id": 12, "series": 1, "name": "First", "season_number": 1, "episode_number": 1, "uuid": "e-12"},
                {"id": 13, "series": 1, "name": "Next Season", "season_number": 2, "episode_number": 1, "uuid": "e-13"},
                {"id": 31, "series": 3, "season_number": 1, "episode_number": 1, "uuid": "e-31"}
            ],
            "episode_relations": [
                {"id": 1, "m3u_account": 1, "episode": 11, "stream_id": "9011"},
                {"id": 2, "m3u_account": 1, "episode": 12, "stream_id": "9012"},
                {"id": 3, "m3u_account": 1, "episode": 13, "stream_id": "9013"},
                {"id": 4, "m3u_account": 1, "episode": 31, "stream_id": "9031"}
            ]
        }"#;
        VodCatalog::from_json_str(json).unwrap()
    }

    pub fn settings(movies_root: &Path, series_root: &Path) -> PluginSettingsDto {
        let mut settings = PluginSettingsDto::default();
        settings.root_folder = movies_root.to_string_lossy().to_string();
        settings.series_root_folder = series_root.to_string_lossy().to_string();
        settings.dispatcharr_url = "http://10.0.0.2:9191/".to_string();
        settings
    }

    /// Fails every query of the host data layer.
    pub struct FailingSource;

    impl VodSource for FailingSource {
        async fn count_movie_relations(&self) -> Result<usize, PluginError> { upstream_err_res!("connection refused") }
        async fn list_movie_relations(&self, _offset: usize, _limit: usize) -> Result<Vec<MovieRelation>, PluginError> { upstream_err_res!("connection refused") }
        async fn count_series_relations(&self) -> Result<usize, PluginError> { upstream_err_res!("connection refused") }
        async fn list_series_relations(&self, _offset: usize, _limit: usize) -> Result<Vec<SeriesRelation>, PluginError> { upstream_err_res!("connection refused") }
        async fn fetch_episodes(&self, _relation: &SeriesRelation) -> Result<(), PluginError> { upstream_err_res!("connection refused") }
        async fn list_episode_relations(&self, _account_id: u32) -> Result<Vec<EpisodeRelation>, PluginError> { upstream_err_res!("connection refused") }
    }

    pub fn count_files(root: &Path, suffix: &str) -> usize {
        let mut count = 0;
        if let Ok(entries) = std::fs::read_dir(root) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    count += count_files(&path, suffix);
                } else if path.extension().is_some_and(|ext| ext == suffix) {
                    count += 1;
                }
            }
        }
        count
    }
}
