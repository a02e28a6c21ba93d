use crate::library::NfoWriter;
use crate::model::{EpisodeRelation, SeriesJobConfig, SeriesRelation};
use crate::processing::processor::{database_error, prepare_root_folder};
use crate::repository::library_layout::{episode_strm_url, SeriesLayout};
use crate::repository::strm_repository::{has_season_folder, prepare_strm_output_directory, write_library_file, write_strm_file};
use crate::repository::{read_series_episodes, read_series_relations, VodSource};
use crate::utils::{is_progress_step, log_summary, RunLock};
use crate::utils::debug_if_enabled;
use log::{error, info, warn};
use shared::error::PluginError;
use shared::model::{ActionResult, ActionStats, SeriesGenerateStats};

#[derive(Debug, Default, PartialEq, Eq)]
struct SeriesOutcome {
    episodes: usize,
    nfo: usize,
}

async fn write_episode(cfg: &SeriesJobConfig, layout: &SeriesLayout, relation: &EpisodeRelation) -> Result<bool, PluginError> {
    let (strm_file, nfo_file) = layout.episode_files(&relation.episode);
    prepare_strm_output_directory(&layout.season_folder(relation.episode.season())).await?;
    write_strm_file(&strm_file, &episode_strm_url(&cfg.base_url, relation)).await?;
    if cfg.generate_nfo {
        let nfo = NfoWriter::episode(&relation.episode)?;
        write_library_file(&nfo_file, &nfo).await?;
        return Ok(true);
    }
    Ok(false)
}

/// Writes the folder of one series. `None` when the provider offers no episodes.
async fn process_series<S: VodSource>(source: &S, cfg: &SeriesJobConfig, relation: &SeriesRelation, layout: &SeriesLayout)
                                      -> Result<Option<SeriesOutcome>, PluginError> {
    if !relation.episodes_fetched {
        debug_if_enabled!("Fetching episodes for {}", layout.folder_name);
        source.fetch_episodes(relation).await?;
    }
    let episodes = read_series_episodes(source, relation).await?;
    if episodes.is_empty() {
        return Ok(None);
    }

    let mut outcome = SeriesOutcome::default();
    prepare_strm_output_directory(&layout.folder).await?;
    if cfg.generate_nfo {
        let nfo = NfoWriter::tvshow(&relation.series, relation.category.as_ref())?;
        write_library_file(&layout.tvshow_nfo_file(), &nfo).await?;
        outcome.nfo += 1;
    }
    for episode in &episodes {
        if write_episode(cfg, layout, episode).await? {
            outcome.nfo += 1;
        }
        outcome.episodes += 1;
    }
    Ok(Some(outcome))
}

fn result_message(stats: &SeriesGenerateStats, generate_nfo: bool) -> String {
    let mut message = format!("Created {} series with {} episodes", stats.series_processed, stats.episodes_created);
    if generate_nfo {
        message.push_str(&format!(" + {} NFO files", stats.nfo_created));
    }
    message
}

/// Writes season folders with `.strm` (and `.nfo`) files for up to one batch
/// of series, importing their episodes from the provider first when needed.
pub async fn generate_series<S: VodSource>(source: &S, cfg: &SeriesJobConfig) -> Result<ActionResult, PluginError> {
    info!("Series root: {}", cfg.root_folder.display());
    info!("Dispatcharr URL: {}", cfg.base_url);
    info!("Series batch size: {}", cfg.batch_size);
    info!("Generate series NFO: {}", cfg.generate_nfo);

    let total = source.count_series_relations().await.map_err(|err| database_error(&err))?;
    info!("Total series relations in database: {total}");
    let mut stats = SeriesGenerateStats { total_in_db: total, ..SeriesGenerateStats::default() };
    if total == 0 {
        return Ok(ActionResult::ok("No series found", ActionStats::SeriesGenerate(stats)));
    }

    let fetch_size = cfg.batch_size.fetch_size(total);
    let relations = read_series_relations(source, fetch_size).await.map_err(|err| database_error(&err))?;
    info!("Fetched {} series relations to check", relations.len());

    prepare_root_folder(&cfg.root_folder).await?;
    let _lock = RunLock::acquire(&cfg.root_folder)?;

    for (idx, relation) in relations.iter().enumerate() {
        let idx = idx + 1;
        stats.processed += 1;
        let layout = SeriesLayout::new(&cfg.root_folder, &relation.series);
        if has_season_folder(&layout.folder).await {
            stats.skipped += 1;
            continue;
        }
        if cfg.batch_size.is_reached(stats.series_processed) {
            info!("Batch complete! Created {} series", stats.series_processed);
            break;
        }
        match process_series(source, cfg, relation, &layout).await {
            Ok(Some(outcome)) => {
                stats.series_processed += 1;
                stats.episodes_created += outcome.episodes;
                stats.nfo_created += outcome.nfo;
                if is_progress_step(stats.series_processed) {
                    info!("[{idx}/{}] Created: {} ({} episodes)", relations.len(), layout.folder_name, outcome.episodes);
                }
            }
            Ok(None) => warn!("No episodes found for {}", layout.folder_name),
            Err(err) => {
                error!("Failed to create series {}: {err}", layout.folder_name);
                stats.errors += 1;
            }
        }
    }

    log_summary("Series generation summary", &[
        ("Total in DB", stats.total_in_db),
        ("Processed", stats.processed),
        ("Series created", stats.series_processed),
        ("Episodes created", stats.episodes_created),
        ("NFO files", stats.nfo_created),
        ("Skipped", stats.skipped),
        ("Errors", stats.errors),
    ]);

    Ok(ActionResult::ok(result_message(&stats, cfg.generate_nfo), ActionStats::SeriesGenerate(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BatchSize, MovieRelation};
    use crate::processing::processor::test_support::{count_files, series_catalog, FailingSource};
    use crate::repository::VodCatalog;
    use shared::error::upstream_err_res;
    use std::path::Path;

    fn config(root: &Path, batch_size: BatchSize, generate_nfo: bool) -> SeriesJobConfig {
        SeriesJobConfig {
            root_folder: root.to_path_buf(),
            base_url: "http://10.0.0.2:9191".to_string(),
            batch_size,
            generate_nfo,
        }
    }

    fn series_stats(result: &ActionResult) -> SeriesGenerateStats {
        match &result.stats {
            Some(ActionStats::SeriesGenerate(stats)) => stats.clone(),
            other => panic!("unexpected stats {other:?}"),
        }
    }

    fn file_names(folder: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(folder)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_generate_series() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = series_catalog();
        let result = generate_series(&catalog, &config(tmp.path(), BatchSize::All, true)).await.unwrap();
        let stats = series_stats(&result);
        assert_eq!(stats.total_in_db, 3);
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.series_processed, 2);
        assert_eq!(stats.episodes_created, 4);
        // two tvshow.nfo and four episode nfo
        assert_eq!(stats.nfo_created, 6);
        assert_eq!(stats.errors, 0);
        assert_eq!(result.message, "Created 2 series with 4 episodes + 6 NFO files");

        // fetched on demand, Lupin was already fetched
        assert_eq!(catalog.fetch_count(), 2);
        assert!(!tmp.path().join("Empty Show (2020)").exists());

        let dark = tmp.path().join("Dark (2017)");
        assert_eq!(file_names(&dark), vec!["Season 01", "Season 02", "tvshow.nfo"]);
        assert_eq!(
            file_names(&dark.join("Season 01")),
            vec!["Dark - S01E01 - First.nfo", "Dark - S01E01 - First.strm", "Dark - S01E02 - Second.nfo", "Dark - S01E02 - Second.strm"]
        );
        let url = std::fs::read_to_string(dark.join("Season 02/Dark - S02E01 - Next Season.strm")).unwrap();
        assert_eq!(url, "http://10.0.0.2:9191/proxy/vod/episode/e-13?stream_id=9013");
        assert!(tmp.path().join("Lupin/Season 01/Lupin - S01E01.strm").exists());
    }

    #[tokio::test]
    async fn test_episodes_are_written_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = series_catalog();
        let relations = read_series_relations(&catalog, 1).await.unwrap();
        catalog.fetch_episodes(&relations[0]).await.unwrap();
        let episodes = read_series_episodes(&catalog, &relations[0]).await.unwrap();
        let layout = SeriesLayout::new(tmp.path(), &relations[0].series);
        let stems: Vec<String> = episodes.iter().map(|rel| layout.episode_file_stem(&rel.episode)).collect();
        assert_eq!(stems, vec!["Dark - S01E01 - First", "Dark - S01E02 - Second", "Dark - S02E01 - Next Season"]);
    }

    #[tokio::test]
    async fn test_series_batch_and_rerun() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = series_catalog();
        let cfg = config(tmp.path(), BatchSize::Limit(1), false);

        let first = series_stats(&generate_series(&catalog, &cfg).await.unwrap());
        assert_eq!(first.series_processed, 1);
        assert_eq!(first.episodes_created, 3);
        assert_eq!(first.nfo_created, 0);
        assert!(!tmp.path().join("Dark (2017)/tvshow.nfo").exists());

        let second = series_stats(&generate_series(&catalog, &cfg).await.unwrap());
        assert_eq!(second.skipped, 1);
        assert_eq!(second.series_processed, 1);
        assert_eq!(count_files(tmp.path(), "strm"), 4);

        let third = generate_series(&catalog, &cfg).await.unwrap();
        assert_eq!(third.message, "Created 0 series with 0 episodes");
        assert_eq!(series_stats(&third).skipped, 2);
    }

    /// The catalog, except that importing episodes of one relation fails.
    struct BrokenFetchSource {
        catalog: VodCatalog,
        broken_relation: u32,
    }

    impl VodSource for BrokenFetchSource {
        async fn count_movie_relations(&self) -> Result<usize, PluginError> { self.catalog.count_movie_relations().await }
        async fn list_movie_relations(&self, offset: usize, limit: usize) -> Result<Vec<MovieRelation>, PluginError> {
            self.catalog.list_movie_relations(offset, limit).await
        }
        async fn count_series_relations(&self) -> Result<usize, PluginError> { self.catalog.count_series_relations().await }
        async fn list_series_relations(&self, offset: usize, limit: usize) -> Result<Vec<SeriesRelation>, PluginError> {
            self.catalog.list_series_relations(offset, limit).await
        }
        async fn fetch_episodes(&self, relation: &SeriesRelation) -> Result<(), PluginError> {
            if relation.id == self.broken_relation {
                return upstream_err_res!("provider timeout");
            }
            self.catalog.fetch_episodes(relation).await
        }
        async fn list_episode_relations(&self, account_id: u32) -> Result<Vec<EpisodeRelation>, PluginError> {
            self.catalog.list_episode_relations(account_id).await
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_only_skips_the_series() {
        let tmp = tempfile::tempdir().unwrap();
        let source = BrokenFetchSource { catalog: series_catalog(), broken_relation: 1 };
        let result = generate_series(&source, &config(tmp.path(), BatchSize::All, false)).await.unwrap();
        let stats = series_stats(&result);
        assert_eq!(stats.processed, 3);
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.series_processed, 1);
        assert_eq!(stats.episodes_created, 1);
        assert!(!tmp.path().join("Dark (2017)").exists());
        assert!(tmp.path().join("Lupin/Season 01/Lupin - S01E01.strm").exists());
    }

    #[tokio::test]
    async fn test_rerun_with_nfo_reports_nfo_count() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = series_catalog();
        let cfg = config(tmp.path(), BatchSize::All, true);

        generate_series(&catalog, &cfg).await.unwrap();
        let second = generate_series(&catalog, &cfg).await.unwrap();
        assert_eq!(second.message, "Created 0 series with 0 episodes + 0 NFO files");
        assert_eq!(series_stats(&second).skipped, 2);
    }

    #[tokio::test]
    async fn test_database_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = generate_series(&FailingSource, &config(tmp.path(), BatchSize::All, true)).await.unwrap_err();
        assert_eq!(err.message, "Database error: connection refused");
    }
}
