use serde::Deserialize;
use shared::utils::{clean_title, deserialize_as_option_string, deserialize_number_from_string};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub rating: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub tmdb_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub imdb_id: Option<String>,
    pub uuid: String,
}

impl Movie {
    /// The title without language prefix, a placeholder when the provider sent none.
    pub fn display_name(&self) -> String {
        self.name.as_deref().map_or_else(|| format!("Unknown Movie {}", self.id), clean_title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Series {
    pub id: u32,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub description: Option<String>,
}

impl Series {
    pub fn display_name(&self) -> String {
        self.name.as_deref().map_or_else(|| format!("Unknown Series {}", self.id), clean_title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Episode {
    pub id: u32,
    #[serde(default)]
    pub series: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_as_option_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub season_number: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_number_from_string")]
    pub episode_number: Option<u32>,
    pub uuid: String,
}

impl Episode {
    pub fn season(&self) -> u32 {
        self.season_number.unwrap_or_default()
    }

    pub fn episode(&self) -> u32 {
        self.episode_number.unwrap_or_default()
    }

    pub fn sort_key(&self) -> (u32, u32) {
        (self.season(), self.episode())
    }

    pub fn belongs_to(&self, series_id: u32) -> bool {
        self.series == Some(series_id)
    }
}

/// A movie as offered by one provider account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRelation {
    pub id: u32,
    pub account_id: u32,
    pub stream_id: String,
    pub movie: Movie,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesRelation {
    pub id: u32,
    pub account_id: u32,
    pub external_series_id: Option<String>,
    pub episodes_fetched: bool,
    pub series: Series,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRelation {
    pub id: u32,
    pub account_id: u32,
    pub stream_id: String,
    pub episode: Episode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_from_loose_json() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": 7, "name": "EN - Heat", "year": "1995", "rating": 8.3, "tmdb_id": 949, "imdb_id": "", "uuid": "abc"}"#,
        ).unwrap();
        assert_eq!(movie.year, Some(1995));
        assert_eq!(movie.rating.as_deref(), Some("8.3"));
        assert_eq!(movie.tmdb_id.as_deref(), Some("949"));
        assert_eq!(movie.imdb_id, None);
        assert_eq!(movie.display_name(), "Heat");
    }

    #[test]
    fn test_display_name_fallback() {
        let series: Series = serde_json::from_str(r#"{"id": 12, "name": null}"#).unwrap();
        assert_eq!(series.display_name(), "Unknown Series 12");
    }

    #[test]
    fn test_episode_numbers_default_to_zero() {
        let episode: Episode = serde_json::from_str(r#"{"id": 1, "series": 3, "uuid": "e1"}"#).unwrap();
        assert_eq!(episode.sort_key(), (0, 0));
        assert!(episode.belongs_to(3));
        assert!(!episode.belongs_to(4));
    }
}
