//! Deterministic locations of the generated library files.
//!
//! The path of a `.strm` file is derived from the entity names only, its
//! existence marks the entity as generated.

use crate::model::{Episode, EpisodeRelation, Movie, MovieRelation, Series};
use shared::utils::{clean_title, sanitize_filename, FILE_SUFFIX_NFO, FILE_SUFFIX_STRM, PROXY_PATH_EPISODE,
                    PROXY_PATH_MOVIE, SEASON_FOLDER_PREFIX, TVSHOW_NFO_FILE};
use std::path::{Path, PathBuf};

fn with_year(name: &str, year: Option<u32>) -> String {
    let name = sanitize_filename(name);
    match year {
        Some(year) => format!("{name} ({year})"),
        None => name,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieLayout {
    pub folder_name: String,
    pub folder: PathBuf,
    pub strm_file: PathBuf,
    pub nfo_file: PathBuf,
}

impl MovieLayout {
    /// `{root}/{Title} ({Year})/{Title} ({Year}).strm`
    pub fn new(root: &Path, movie: &Movie) -> Self {
        let folder_name = with_year(&movie.display_name(), movie.year);
        let folder = root.join(&folder_name);
        let strm_file = folder.join(format!("{folder_name}.{FILE_SUFFIX_STRM}"));
        let nfo_file = strm_file.with_extension(FILE_SUFFIX_NFO);
        Self { folder_name, folder, strm_file, nfo_file }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesLayout {
    /// The sanitized series title, prefix of every episode file.
    pub series_name: String,
    pub folder_name: String,
    pub folder: PathBuf,
}

impl SeriesLayout {
    pub fn new(root: &Path, series: &Series) -> Self {
        let series_name = sanitize_filename(&series.display_name());
        let folder_name = with_year(&series_name, series.year);
        let folder = root.join(&folder_name);
        Self { series_name, folder_name, folder }
    }

    pub fn tvshow_nfo_file(&self) -> PathBuf {
        self.folder.join(TVSHOW_NFO_FILE)
    }

    pub fn season_folder(&self, season: u32) -> PathBuf {
        self.folder.join(season_folder_name(season))
    }

    /// `{Series} - S{NN}E{NN} - {Episode}`, without the title segment for unnamed episodes.
    pub fn episode_file_stem(&self, episode: &Episode) -> String {
        let numbering = format!("S{:02}E{:02}", episode.season(), episode.episode());
        let title = episode.name.as_deref().map(clean_title).filter(|title| !title.is_empty());
        let stem = match title {
            Some(title) => format!("{} - {numbering} - {}", self.series_name, sanitize_filename(&title)),
            None => format!("{} - {numbering}", self.series_name),
        };
        sanitize_filename(&stem)
    }

    /// The `.strm` and `.nfo` path of an episode.
    pub fn episode_files(&self, episode: &Episode) -> (PathBuf, PathBuf) {
        let stem = self.episode_file_stem(episode);
        let season_folder = self.season_folder(episode.season());
        (
            season_folder.join(format!("{stem}.{FILE_SUFFIX_STRM}")),
            season_folder.join(format!("{stem}.{FILE_SUFFIX_NFO}")),
        )
    }
}

pub fn season_folder_name(season: u32) -> String {
    format!("{SEASON_FOLDER_PREFIX} {season:02}")
}

/// `{base}/proxy/vod/movie/{uuid}?stream_id={id}`
pub fn movie_strm_url(base_url: &str, relation: &MovieRelation) -> String {
    format!("{base_url}/{PROXY_PATH_MOVIE}/{}?stream_id={}", relation.movie.uuid, relation.stream_id)
}

/// `{base}/proxy/vod/episode/{uuid}?stream_id={id}`
pub fn episode_strm_url(base_url: &str, relation: &EpisodeRelation) -> String {
    format!("{base_url}/{PROXY_PATH_EPISODE}/{}?stream_id={}", relation.episode.uuid, relation.stream_id)
}
