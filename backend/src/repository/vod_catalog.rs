use crate::model::{Category, Episode, EpisodeRelation, Movie, MovieRelation, Series, SeriesRelation};
use crate::repository::VodSource;
use log::{debug, info};
use serde::Deserialize;
use shared::error::{upstream_err, PluginError};
use shared::utils::{deserialize_as_option_string, deserialize_as_string};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AccountRecord {
    id: u32,
}

#[derive(Debug, Default, Deserialize)]
struct RelationProperties {
    #[serde(default)]
    episodes_fetched: bool,
}

#[derive(Debug, Deserialize)]
struct MovieRelationRecord {
    id: u32,
    m3u_account: u32,
    movie: u32,
    #[serde(deserialize_with = "deserialize_as_string")]
    stream_id: String,
    #[serde(default)]
    category: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SeriesRelationRecord {
    id: u32,
    m3u_account: u32,
    series: u32,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    external_series_id: Option<String>,
    #[serde(default)]
    category: Option<u32>,
    #[serde(default)]
    custom_properties: Option<RelationProperties>,
}

#[derive(Debug, Deserialize)]
struct EpisodeRelationRecord {
    id: u32,
    m3u_account: u32,
    episode: u32,
    #[serde(deserialize_with = "deserialize_as_string")]
    stream_id: String,
}

/// A json export of the host vod tables.
#[derive(Debug, Default, Deserialize)]
struct CatalogDto {
    #[serde(default)]
    accounts: Vec<AccountRecord>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    movies: Vec<Movie>,
    #[serde(default)]
    movie_relations: Vec<MovieRelationRecord>,
    #[serde(default)]
    series: Vec<Series>,
    #[serde(default)]
    series_relations: Vec<SeriesRelationRecord>,
    #[serde(default)]
    episodes: Vec<Episode>,
    #[serde(default)]
    episode_relations: Vec<EpisodeRelationRecord>,
}

// (account, series)
type FetchKey = (u32, u32);

/// In-memory [`VodSource`] over a json export of the host database.
///
/// Like the host, episodes of a series stay invisible until the
/// series relation was fetched once.
#[derive(Debug)]
pub struct VodCatalog {
    movie_relations: Vec<MovieRelation>,
    series_relations: Vec<SeriesRelation>,
    episode_relations: Vec<EpisodeRelation>,
    fetched: RefCell<HashSet<FetchKey>>,
    fetch_count: Cell<usize>,
}

fn lookup<'a, T>(map: &HashMap<u32, &'a T>, id: u32, what: &str, owner: &str, owner_id: u32) -> Result<&'a T, PluginError> {
    map.get(&id)
        .copied()
        .ok_or_else(|| upstream_err!("{owner} {owner_id} references unknown {what} {id}"))
}

fn check_account(accounts: &HashSet<u32>, id: u32, owner: &str, owner_id: u32) -> Result<u32, PluginError> {
    if accounts.contains(&id) {
        Ok(id)
    } else {
        Err(upstream_err!("{owner} {owner_id} references unknown account {id}"))
    }
}

impl TryFrom<CatalogDto> for VodCatalog {
    type Error = PluginError;

    fn try_from(dto: CatalogDto) -> Result<Self, Self::Error> {
        let accounts: HashSet<u32> = dto.accounts.iter().map(|a| a.id).collect();
        let categories: HashMap<u32, &Category> = dto.categories.iter().map(|c| (c.id, c)).collect();
        let movies: HashMap<u32, &Movie> = dto.movies.iter().map(|m| (m.id, m)).collect();
        let series: HashMap<u32, &Series> = dto.series.iter().map(|s| (s.id, s)).collect();
        let episodes: HashMap<u32, &Episode> = dto.episodes.iter().map(|e| (e.id, e)).collect();

        for episode in &dto.episodes {
            if let Some(series_id) = episode.series {
                lookup(&series, series_id, "series", "episode", episode.id)?;
            }
        }

        let category_of = |category: Option<u32>, owner: &str, owner_id: u32| -> Result<Option<Category>, PluginError> {
            category
                .map(|id| lookup(&categories, id, "category", owner, owner_id).map(Category::clone))
                .transpose()
        };

        let mut movie_relations = Vec::with_capacity(dto.movie_relations.len());
        for rec in &dto.movie_relations {
            movie_relations.push(MovieRelation {
                id: rec.id,
                account_id: check_account(&accounts, rec.m3u_account, "movie relation", rec.id)?,
                stream_id: rec.stream_id.clone(),
                movie: lookup(&movies, rec.movie, "movie", "movie relation", rec.id)?.clone(),
                category: category_of(rec.category, "movie relation", rec.id)?,
            });
        }

        let mut fetched = HashSet::new();
        let mut series_relations = Vec::with_capacity(dto.series_relations.len());
        for rec in &dto.series_relations {
            let account_id = check_account(&accounts, rec.m3u_account, "series relation", rec.id)?;
            let episodes_fetched = rec.custom_properties.as_ref().is_some_and(|p| p.episodes_fetched);
            if episodes_fetched {
                fetched.insert((account_id, rec.series));
            }
            series_relations.push(SeriesRelation {
                id: rec.id,
                account_id,
                external_series_id: rec.external_series_id.clone(),
                episodes_fetched,
                series: lookup(&series, rec.series, "series", "series relation", rec.id)?.clone(),
                category: category_of(rec.category, "series relation", rec.id)?,
            });
        }

        let mut episode_relations = Vec::with_capacity(dto.episode_relations.len());
        for rec in &dto.episode_relations {
            episode_relations.push(EpisodeRelation {
                id: rec.id,
                account_id: check_account(&accounts, rec.m3u_account, "episode relation", rec.id)?,
                stream_id: rec.stream_id.clone(),
                episode: lookup(&episodes, rec.episode, "episode", "episode relation", rec.id)?.clone(),
            });
        }

        Ok(Self {
            movie_relations,
            series_relations,
            episode_relations,
            fetched: RefCell::new(fetched),
            fetch_count: Cell::new(0),
        })
    }
}

impl VodCatalog {
    pub fn from_json_str(content: &str) -> Result<Self, PluginError> {
        let dto: CatalogDto = serde_json::from_str(content).map_err(|err| upstream_err!("Invalid catalog: {err}"))?;
        Self::try_from(dto)
    }

    pub async fn from_file(path: &Path) -> Result<Self, PluginError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| upstream_err!("Can't read catalog {}: {err}", path.display()))?;
        let catalog = Self::from_json_str(&content)?;
        info!("Catalog loaded: {} movie relations, {} series relations, {} episode relations",
            catalog.movie_relations.len(), catalog.series_relations.len(), catalog.episode_relations.len());
        Ok(catalog)
    }

    /// How often episodes were imported from a provider.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.get()
    }

    fn is_fetched(&self, account_id: u32, series_id: u32) -> bool {
        self.fetched.borrow().contains(&(account_id, series_id))
    }
}

fn page<T: Clone>(items: &[T], offset: usize, limit: usize) -> Vec<T> {
    items.iter().skip(offset).take(limit).cloned().collect()
}

impl VodSource for VodCatalog {
    async fn count_movie_relations(&self) -> Result<usize, PluginError> {
        Ok(self.movie_relations.len())
    }

    async fn list_movie_relations(&self, offset: usize, limit: usize) -> Result<Vec<MovieRelation>, PluginError> {
        Ok(page(&self.movie_relations, offset, limit))
    }

    async fn count_series_relations(&self) -> Result<usize, PluginError> {
        Ok(self.series_relations.len())
    }

    async fn list_series_relations(&self, offset: usize, limit: usize) -> Result<Vec<SeriesRelation>, PluginError> {
        let mut relations = page(&self.series_relations, offset, limit);
        for relation in &mut relations {
            relation.episodes_fetched = self.is_fetched(relation.account_id, relation.series.id);
        }
        Ok(relations)
    }

    async fn fetch_episodes(&self, relation: &SeriesRelation) -> Result<(), PluginError> {
        if !self.series_relations.iter().any(|r| r.id == relation.id) {
            return Err(upstream_err!("Unknown series relation {}", relation.id));
        }
        debug!("Fetching episodes of series {} for account {}", relation.series.id, relation.account_id);
        self.fetched.borrow_mut().insert((relation.account_id, relation.series.id));
        self.fetch_count.set(self.fetch_count.get() + 1);
        Ok(())
    }

    async fn list_episode_relations(&self, account_id: u32) -> Result<Vec<EpisodeRelation>, PluginError> {
        Ok(self.episode_relations
            .iter()
            .filter(|rel| rel.account_id == account_id)
            .filter(|rel| rel.episode.series.is_some_and(|series_id| self.is_fetched(account_id, series_id)))
            .cloned()
            .collect())
    }
}
