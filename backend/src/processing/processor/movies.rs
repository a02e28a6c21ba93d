use crate::library::NfoWriter;
use crate::model::{MovieJobConfig, MovieRelation};
use crate::processing::processor::{database_error, prepare_root_folder};
use crate::repository::library_layout::{movie_strm_url, MovieLayout};
use crate::repository::strm_repository::{prepare_strm_output_directory, write_library_file, write_strm_file};
use crate::repository::{read_movie_relations, VodSource};
use crate::utils::{is_progress_step, log_summary, path_exists, RunLock};
use log::{error, info};
use shared::error::PluginError;
use shared::model::{ActionResult, ActionStats, MovieGenerateStats};

/// Returns whether an `.nfo` was written next to the `.strm` file.
async fn write_movie(cfg: &MovieJobConfig, relation: &MovieRelation, layout: &MovieLayout) -> Result<bool, PluginError> {
    prepare_strm_output_directory(&layout.folder).await?;
    write_strm_file(&layout.strm_file, &movie_strm_url(&cfg.base_url, relation)).await?;
    if cfg.generate_nfo {
        let nfo = NfoWriter::movie(&relation.movie, relation.category.as_ref())?;
        write_library_file(&layout.nfo_file, &nfo).await?;
        return Ok(true);
    }
    Ok(false)
}

fn result_message(stats: &MovieGenerateStats, generate_nfo: bool) -> String {
    let mut message = format!("Created {} .strm files", stats.created_strm);
    if generate_nfo {
        message.push_str(&format!(" + {} .nfo files", stats.created_nfo));
    }
    message
}

/// Writes `.strm` (and `.nfo`) files for up to one batch of movies
/// that have no folder in the library yet.
pub async fn generate_movies<S: VodSource>(source: &S, cfg: &MovieJobConfig) -> Result<ActionResult, PluginError> {
    info!("Movies root: {}", cfg.root_folder.display());
    info!("Dispatcharr URL: {}", cfg.base_url);
    info!("Batch size: {}", cfg.batch_size);
    info!("Generate NFO: {}", cfg.generate_nfo);

    let total = source.count_movie_relations().await.map_err(|err| database_error(&err))?;
    info!("Total movie relations in database: {total}");
    let mut stats = MovieGenerateStats { total_in_db: total, ..MovieGenerateStats::default() };
    if total == 0 {
        return Ok(ActionResult::ok("No movies found to process", ActionStats::MovieGenerate(stats)));
    }

    let fetch_size = cfg.batch_size.fetch_size(total);
    let relations = read_movie_relations(source, fetch_size).await.map_err(|err| database_error(&err))?;
    info!("Fetched {} movie relations to check", relations.len());

    prepare_root_folder(&cfg.root_folder).await?;
    let _lock = RunLock::acquire(&cfg.root_folder)?;

    for (idx, relation) in relations.iter().enumerate() {
        let idx = idx + 1;
        stats.processed += 1;
        let layout = MovieLayout::new(&cfg.root_folder, &relation.movie);
        if path_exists(&layout.strm_file).await {
            stats.skipped += 1;
            continue;
        }
        if cfg.batch_size.is_reached(stats.created_strm) {
            info!("Batch complete! Created {} movies", stats.created_strm);
            break;
        }
        match write_movie(cfg, relation, &layout).await {
            Ok(nfo) => {
                stats.created_strm += 1;
                if nfo {
                    stats.created_nfo += 1;
                }
                if is_progress_step(stats.created_strm) {
                    info!("[{idx}/{}] Created: {}", relations.len(), layout.folder_name);
                }
            }
            Err(err) => {
                error!("Failed to create movie {}: {err}", layout.folder_name);
                stats.errors += 1;
            }
        }
    }

    log_summary("Movie generation summary", &[
        ("Total in DB", stats.total_in_db),
        ("Processed", stats.processed),
        ("Created .strm", stats.created_strm),
        ("Created .nfo", stats.created_nfo),
        ("Skipped", stats.skipped),
        ("Errors", stats.errors),
    ]);

    Ok(ActionResult::ok(result_message(&stats, cfg.generate_nfo), ActionStats::MovieGenerate(stats)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BatchSize;
    use crate::processing::processor::test_support::{count_files, movie_catalog, FailingSource};
    use shared::model::ActionStatus;
    use std::path::Path;

    fn config(root: &Path, batch_size: BatchSize, generate_nfo: bool) -> MovieJobConfig {
        MovieJobConfig {
            root_folder: root.to_path_buf(),
            base_url: "http://10.0.0.2:9191".to_string(),
            batch_size,
            generate_nfo,
        }
    }

    fn movie_stats(result: &ActionResult) -> MovieGenerateStats {
        match &result.stats {
            Some(ActionStats::MovieGenerate(stats)) => stats.clone(),
            other => panic!("unexpected stats {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_batch_cutoff() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = movie_catalog(50);
        let result = generate_movies(&catalog, &config(tmp.path(), BatchSize::Limit(10), false)).await.unwrap();
        let stats = movie_stats(&result);
        assert_eq!(stats.total_in_db, 50);
        assert_eq!(stats.created_strm, 10);
        assert_eq!(stats.created_nfo, 0);
        assert_eq!(stats.errors, 0);
        assert_eq!(result.message, "Created 10 .strm files");
        assert_eq!(count_files(tmp.path(), "strm"), 10);
        assert_eq!(count_files(tmp.path(), "nfo"), 0);
    }

    #[tokio::test]
    async fn test_second_run_skips_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = movie_catalog(5);
        let cfg = config(tmp.path(), BatchSize::All, true);

        let first = movie_stats(&generate_movies(&catalog, &cfg).await.unwrap());
        assert_eq!(first.created_strm, 5);
        assert_eq!(first.created_nfo, 5);

        let second = generate_movies(&catalog, &cfg).await.unwrap();
        assert_eq!(second.message, "Created 0 .strm files + 0 .nfo files");
        let second = movie_stats(&second);
        assert_eq!(second.created_strm, 0);
        assert_eq!(second.skipped, 5);
        assert_eq!(count_files(tmp.path(), "strm"), 5);
    }

    #[tokio::test]
    async fn test_skipped_items_do_not_end_the_batch() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = movie_catalog(12);
        let cfg = config(tmp.path(), BatchSize::Limit(4), true);

        generate_movies(&catalog, &cfg).await.unwrap();
        let result = generate_movies(&catalog, &cfg).await.unwrap();
        let stats = movie_stats(&result);
        assert_eq!(stats.skipped, 4);
        assert_eq!(stats.created_strm, 4);
        assert_eq!(result.message, "Created 4 .strm files + 4 .nfo files");
        assert_eq!(count_files(tmp.path(), "strm"), 8);
    }

    #[tokio::test]
    async fn test_strm_content_and_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = movie_catalog(1);
        generate_movies(&catalog, &config(tmp.path(), BatchSize::All, true)).await.unwrap();
        let folder = tmp.path().join("Movie 1 (2000)");
        let url = std::fs::read_to_string(folder.join("Movie 1 (2000).strm")).unwrap();
        assert_eq!(url, "http://10.0.0.2:9191/proxy/vod/movie/m-1?stream_id=101");
        let nfo = std::fs::read_to_string(folder.join("Movie 1 (2000).nfo")).unwrap();
        assert!(nfo.contains("<genre>Action</genre>"));
        assert!(nfo.contains("<genre>Sci Fi</genre>"));
    }

    #[tokio::test]
    async fn test_empty_source() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("Movies");
        let result = generate_movies(&movie_catalog(0), &config(&root, BatchSize::All, true)).await.unwrap();
        assert_eq!(result.message, "No movies found to process");
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_database_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let err = generate_movies(&FailingSource, &config(tmp.path(), BatchSize::All, true)).await.unwrap_err();
        assert_eq!(err.message, "Database error: connection refused");
        let result: ActionResult = err.into();
        assert_eq!(result.status, ActionStatus::Error);
    }

    #[tokio::test]
    async fn test_write_failures_are_counted() {
        let tmp = tempfile::tempdir().unwrap();
        // a file where the movie folder belongs
        std::fs::write(tmp.path().join("Movie 2 (2000)"), "x").unwrap();
        let result = generate_movies(&movie_catalog(3), &config(tmp.path(), BatchSize::All, false)).await.unwrap();
        let stats = movie_stats(&result);
        assert_eq!(stats.created_strm, 2);
        assert_eq!(stats.errors, 1);
    }
}
