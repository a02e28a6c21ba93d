use crate::model::{EpisodeRelation, MovieRelation, SeriesRelation};
use log::debug;
use shared::error::PluginError;
use std::future::Future;

/// Relations are read from the host in pages of this size.
pub const VOD_PAGE_SIZE: usize = 500;

/// The host data layer as seen by the processors.
///
/// Listings are ordered the same way on every call, so offsets are stable
/// between pages of one run.
pub trait VodSource {
    fn count_movie_relations(&self) -> impl Future<Output = Result<usize, PluginError>>;
    fn list_movie_relations(&self, offset: usize, limit: usize) -> impl Future<Output = Result<Vec<MovieRelation>, PluginError>>;
    fn count_series_relations(&self) -> impl Future<Output = Result<usize, PluginError>>;
    fn list_series_relations(&self, offset: usize, limit: usize) -> impl Future<Output = Result<Vec<SeriesRelation>, PluginError>>;
    /// Imports the episodes of a series from its provider.
    fn fetch_episodes(&self, relation: &SeriesRelation) -> impl Future<Output = Result<(), PluginError>>;
    /// All episode relations of one provider account, of every series.
    fn list_episode_relations(&self, account_id: u32) -> impl Future<Output = Result<Vec<EpisodeRelation>, PluginError>>;
}

#[derive(Default)]
pub struct EmptyVodSource {}

impl VodSource for EmptyVodSource {
    async fn count_movie_relations(&self) -> Result<usize, PluginError> { Ok(0) }
    async fn list_movie_relations(&self, _offset: usize, _limit: usize) -> Result<Vec<MovieRelation>, PluginError> { Ok(vec![]) }
    async fn count_series_relations(&self) -> Result<usize, PluginError> { Ok(0) }
    async fn list_series_relations(&self, _offset: usize, _limit: usize) -> Result<Vec<SeriesRelation>, PluginError> { Ok(vec![]) }
    async fn fetch_episodes(&self, _relation: &SeriesRelation) -> Result<(), PluginError> { Ok(()) }
    async fn list_episode_relations(&self, _account_id: u32) -> Result<Vec<EpisodeRelation>, PluginError> { Ok(vec![]) }
}

/// Reads the first `fetch_size` movie relations page by page.
pub async fn read_movie_relations<S: VodSource>(source: &S, fetch_size: usize) -> Result<Vec<MovieRelation>, PluginError> {
    let mut relations = Vec::with_capacity(fetch_size);
    while relations.len() < fetch_size {
        let limit = VOD_PAGE_SIZE.min(fetch_size - relations.len());
        let page = source.list_movie_relations(relations.len(), limit).await?;
        debug!("Read {} movie relations at offset {}", page.len(), relations.len());
        if page.is_empty() {
            break;
        }
        relations.extend(page);
    }
    Ok(relations)
}

/// Reads the first `fetch_size` series relations page by page.
pub async fn read_series_relations<S: VodSource>(source: &S, fetch_size: usize) -> Result<Vec<SeriesRelation>, PluginError> {
    let mut relations = Vec::with_capacity(fetch_size);
    while relations.len() < fetch_size {
        let limit = VOD_PAGE_SIZE.min(fetch_size - relations.len());
        let page = source.list_series_relations(relations.len(), limit).await?;
        debug!("Read {} series relations at offset {}", page.len(), relations.len());
        if page.is_empty() {
            break;
        }
        relations.extend(page);
    }
    Ok(relations)
}

/// The episodes of one series as offered by the account of `relation`,
/// ordered by season and episode number.
pub async fn read_series_episodes<S: VodSource>(source: &S, relation: &SeriesRelation) -> Result<Vec<EpisodeRelation>, PluginError> {
    let mut episodes: Vec<EpisodeRelation> = source
        .list_episode_relations(relation.account_id)
        .await?
        .into_iter()
        .filter(|rel| rel.episode.belongs_to(relation.series.id))
        .collect();
    episodes.sort_by_key(|rel| rel.episode.sort_key());
    Ok(episodes)
}
